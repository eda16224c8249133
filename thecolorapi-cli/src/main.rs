use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use thecolorapi::{ClientConfig, ColorClient, ColorOptions, ColorSummary, DEFAULT_ENDPOINT};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "thecolorapi",
    about = "Look up color names and conversions with The Color API",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look a color up and print its names and conversions
    Lookup {
        #[command(flatten)]
        color: ColorArgs,

        /// Endpoint to query
        #[arg(long, env = "THECOLORAPI_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the normalized query parameter without sending a request
    Normalize {
        #[command(flatten)]
        color: ColorArgs,
    },
}

/// Exactly one of these must be given.
#[derive(Args, Debug, Clone)]
struct ColorArgs {
    /// Hex color, e.g. "#0047AB" or 0x0047ab
    #[arg(long)]
    hex: Option<String>,

    /// RGB components, e.g. 0,71,171
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    rgb: Option<Vec<i64>>,

    /// HSL components, e.g. 215,100,34
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    hsl: Option<Vec<i64>>,

    /// CMYK components, e.g. 100,58,0,33
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    cmyk: Option<Vec<i64>>,

    /// Color as a JSON object, e.g. '{"rgb": [0, 71, 171]}'
    #[arg(long = "from-json", value_name = "JSON")]
    from_json: Option<String>,
}

impl ColorArgs {
    fn into_options(self) -> Result<ColorOptions> {
        let flags = ColorOptions {
            hex: self.hex,
            rgb: self.rgb,
            hsl: self.hsl,
            cmyk: self.cmyk,
        };

        let Some(raw) = self.from_json else {
            return Ok(flags);
        };

        if flags.provided() > 0 {
            anyhow::bail!("--from-json cannot be combined with --hex, --rgb, --hsl or --cmyk");
        }

        let value: serde_json::Value =
            serde_json::from_str(&raw).context("--from-json is not valid JSON")?;
        Ok(ColorOptions::from_json(&value)?)
    }
}

fn render_summary(summary: &ColorSummary) -> String {
    let (r, g, b) = summary.rgb;
    let (h, s, l) = summary.hsl;
    let (hv, sv, v) = summary.hsv;
    let (c, m, y, k) = summary.cmyk;

    [
        format!("Name:     {}", summary.name),
        format!("Hex:      {}", summary.hex),
        format!("RGB:      {r}, {g}, {b}"),
        format!("HSL:      {h}, {s}%, {l}%"),
        format!("HSV:      {hv}, {sv}%, {v}%"),
        format!("CMYK:     {c}, {m}, {y}, {k}"),
        format!("Contrast: {}", summary.contrast_hex),
    ]
    .join("\n")
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "thecolorapi=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup {
            color,
            endpoint,
            timeout,
            json,
            output,
        } => {
            let options = color.into_options()?;
            let spec = options.into_spec()?;

            let config = ClientConfig {
                endpoint,
                timeout_secs: timeout,
                ..ClientConfig::default()
            };
            let client = ColorClient::from_config(config)?;
            debug!(endpoint = client.endpoint(), ?spec, "Looking up color");

            let summary = client.lookup(&spec)?.summary()?;
            let rendered = if json {
                serde_json::to_string_pretty(&summary)?
            } else {
                render_summary(&summary)
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, format!("{rendered}\n"))
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Color written to {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }

        Commands::Normalize { color } => {
            let query = color.into_options()?.into_spec()?.to_query()?;
            println!("{query}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_components_parse() {
        let cli = Cli::try_parse_from(["thecolorapi", "normalize", "--hsl", "-5,150,-5"]).unwrap();
        match cli.command {
            Commands::Normalize { color } => assert_eq!(color.hsl, Some(vec![-5, 150, -5])),
            _ => panic!("Expected normalize command"),
        }
    }

    #[test]
    fn test_from_json_conflicts_with_flags() {
        let args = ColorArgs {
            hex: Some("0047ab".to_string()),
            rgb: None,
            hsl: None,
            cmyk: None,
            from_json: Some(r#"{"rgb": [0, 71, 171]}"#.to_string()),
        };
        assert!(args.into_options().is_err());
    }

    #[test]
    fn test_render_summary_lines() {
        let summary = ColorSummary {
            name: "Cobalt".to_string(),
            hex: "#0047AB".to_string(),
            hex_clean: "0047AB".to_string(),
            rgb: (0, 71, 171),
            rgb_fraction: (0.0, 0.278, 0.671),
            hsl: (215, 100, 34),
            hsl_fraction: (0.597, 1.0, 0.335),
            hsv: (215, 100, 67),
            hsv_fraction: (0.597, 1.0, 0.671),
            cmyk: (100, 58, 0, 33),
            cmyk_fraction: (1.0, 0.585, 0.0, 0.329),
            contrast_hex: "#ffffff".to_string(),
        };

        let rendered = render_summary(&summary);
        assert!(rendered.starts_with("Name:     Cobalt\n"));
        assert!(rendered.contains("RGB:      0, 71, 171"));
        assert!(rendered.contains("HSL:      215, 100%, 34%"));
        assert!(rendered.ends_with("Contrast: #ffffff"));
    }
}
