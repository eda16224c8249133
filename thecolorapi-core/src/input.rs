//! Color input formats and their normalization into a query parameter.
//!
//! A lookup is driven by exactly one color, given in one of four formats.
//! [`ColorSpec`] holds that choice as a sum type. [`ColorOptions`] is the
//! four-slot entry point used when the format is only known at runtime
//! (command-line flags, JSON documents).

use crate::error::{ColorError, Result};
use serde_json::Value;
use std::fmt;

/// Upper bound for RGB components.
pub const RGB_MAX: i64 = 255;
/// Upper bound for saturation, lightness and CMYK percentages.
pub const PERCENT_MAX: i64 = 100;
/// Hue values wrap around at this many degrees.
pub const HUE_DEGREES: i64 = 360;

/// Returns the middle value of `(lo, value, hi)`.
///
/// For `lo <= hi` this is the usual clamp: `lo` below the range, `hi` above
/// it, `value` otherwise.
pub fn clamp(value: i64, lo: i64, hi: i64) -> i64 {
    let mut triple = [lo, value, hi];
    triple.sort_unstable();
    triple[1]
}

/// Reduces a hue in degrees into `[0, 359]`.
pub fn normalize_hue(hue: i64) -> i64 {
    hue.rem_euclid(HUE_DEGREES)
}

/// Normalizes a hex color string into 6 lowercase hex digits.
///
/// All `#` and `0x` occurrences are removed first, then the string is
/// lowercased and every character outside `0-9a-f` is dropped.
pub fn normalize_hex(value: &str) -> Result<String> {
    let stripped = value.replace('#', "").replace("0x", "").to_lowercase();
    let digits: String = stripped
        .chars()
        .filter(|c| c.is_ascii_digit() || ('a'..='f').contains(c))
        .collect();

    if digits.len() != 6 {
        return Err(ColorError::Validation("invalid hex string".to_string()));
    }

    Ok(digits)
}

/// One color in exactly one of the supported formats.
///
/// Values are kept as given; clamping happens in [`ColorSpec::to_query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// Hex string, with or without `#`/`0x` prefix
    Hex(String),
    /// Red, green, blue in `[0, 255]`
    Rgb(i64, i64, i64),
    /// Hue in degrees, saturation and lightness in `[0, 100]`
    Hsl(i64, i64, i64),
    /// Cyan, magenta, yellow, key in `[0, 100]`
    Cmyk(i64, i64, i64, i64),
}

impl ColorSpec {
    pub fn hex(value: impl Into<String>) -> Self {
        ColorSpec::Hex(value.into())
    }

    pub fn rgb(r: i64, g: i64, b: i64) -> Self {
        ColorSpec::Rgb(r, g, b)
    }

    pub fn hsl(h: i64, s: i64, l: i64) -> Self {
        ColorSpec::Hsl(h, s, l)
    }

    pub fn cmyk(c: i64, m: i64, y: i64, k: i64) -> Self {
        ColorSpec::Cmyk(c, m, y, k)
    }

    /// Which of the four formats this color is given in.
    pub fn format(&self) -> ColorFormat {
        match self {
            ColorSpec::Hex(_) => ColorFormat::Hex,
            ColorSpec::Rgb(..) => ColorFormat::Rgb,
            ColorSpec::Hsl(..) => ColorFormat::Hsl,
            ColorSpec::Cmyk(..) => ColorFormat::Cmyk,
        }
    }

    /// Validates and normalizes the color into the single query parameter
    /// sent to the service.
    ///
    /// Only hex input can fail; numeric components are clamped.
    pub fn to_query(&self) -> Result<QueryParam> {
        let value = match self {
            ColorSpec::Hex(hex) => normalize_hex(hex)?,
            ColorSpec::Rgb(r, g, b) => join(&[
                clamp(*r, 0, RGB_MAX),
                clamp(*g, 0, RGB_MAX),
                clamp(*b, 0, RGB_MAX),
            ]),
            ColorSpec::Hsl(h, s, l) => join(&[
                normalize_hue(*h),
                clamp(*s, 0, PERCENT_MAX),
                clamp(*l, 0, PERCENT_MAX),
            ]),
            ColorSpec::Cmyk(c, m, y, k) => join(&[
                clamp(*c, 0, PERCENT_MAX),
                clamp(*m, 0, PERCENT_MAX),
                clamp(*y, 0, PERCENT_MAX),
                clamp(*k, 0, PERCENT_MAX),
            ]),
        };

        Ok(QueryParam {
            format: self.format(),
            value,
        })
    }
}

fn join(components: &[i64]) -> String {
    components
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// The four input formats understood by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Cmyk,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 4] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Hsl,
        ColorFormat::Cmyk,
    ];

    /// Query parameter / JSON key for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Cmyk => "cmyk",
        }
    }

    /// Number of integer components, `None` for hex.
    pub fn arity(&self) -> Option<usize> {
        match self {
            ColorFormat::Hex => None,
            ColorFormat::Rgb | ColorFormat::Hsl => Some(3),
            ColorFormat::Cmyk => Some(4),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized `name=value` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    format: ColorFormat,
    value: String,
}

impl QueryParam {
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    pub fn name(&self) -> &'static str {
        self.format.as_str()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// `(name, value)` pair, as handed to the HTTP client.
    pub fn as_pair(&self) -> (&'static str, &str) {
        (self.name(), &self.value)
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name(), self.value)
    }
}

/// Four optional named slots, of which exactly one must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorOptions {
    pub hex: Option<String>,
    pub rgb: Option<Vec<i64>>,
    pub hsl: Option<Vec<i64>>,
    pub cmyk: Option<Vec<i64>>,
}

impl ColorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hex(mut self, hex: impl Into<String>) -> Self {
        self.hex = Some(hex.into());
        self
    }

    pub fn with_rgb(mut self, rgb: impl Into<Vec<i64>>) -> Self {
        self.rgb = Some(rgb.into());
        self
    }

    pub fn with_hsl(mut self, hsl: impl Into<Vec<i64>>) -> Self {
        self.hsl = Some(hsl.into());
        self
    }

    pub fn with_cmyk(mut self, cmyk: impl Into<Vec<i64>>) -> Self {
        self.cmyk = Some(cmyk.into());
        self
    }

    /// Reads the slots from a JSON object such as `{"rgb": [0, 71, 171]}`.
    ///
    /// A slot holding `null` counts as absent. Values of the wrong JSON type
    /// are [`ColorError::Type`]; arrays holding anything but integers are
    /// [`ColorError::Validation`].
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            ColorError::Type("color options must be a JSON object".to_string())
        })?;

        let mut options = ColorOptions::default();
        for (key, slot) in object {
            if slot.is_null() {
                continue;
            }
            match key.as_str() {
                "hex" => {
                    let hex = slot.as_str().ok_or_else(|| {
                        ColorError::Type("hex color must be represented as a string".to_string())
                    })?;
                    options.hex = Some(hex.to_string());
                }
                "rgb" => options.rgb = Some(integer_array(ColorFormat::Rgb, slot)?),
                "hsl" => options.hsl = Some(integer_array(ColorFormat::Hsl, slot)?),
                "cmyk" => options.cmyk = Some(integer_array(ColorFormat::Cmyk, slot)?),
                other => {
                    return Err(ColorError::Type(format!("unknown color format '{other}'")));
                }
            }
        }

        Ok(options)
    }

    /// Number of slots that are set.
    pub fn provided(&self) -> usize {
        [
            self.hex.is_some(),
            self.rgb.is_some(),
            self.hsl.is_some(),
            self.cmyk.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    /// Checks that exactly one slot is set and that it has the right arity.
    pub fn into_spec(self) -> Result<ColorSpec> {
        let provided = self.provided();
        if provided != 1 {
            return Err(ColorError::Validation(format!(
                "specify one color (single format) at a time, got {provided}"
            )));
        }

        if let Some(hex) = self.hex {
            return Ok(ColorSpec::Hex(hex));
        }
        if let Some(rgb) = self.rgb {
            let [r, g, b] = components::<3>(ColorFormat::Rgb, rgb)?;
            return Ok(ColorSpec::Rgb(r, g, b));
        }
        if let Some(hsl) = self.hsl {
            let [h, s, l] = components::<3>(ColorFormat::Hsl, hsl)?;
            return Ok(ColorSpec::Hsl(h, s, l));
        }

        let cmyk = self.cmyk.unwrap_or_default();
        let [c, m, y, k] = components::<4>(ColorFormat::Cmyk, cmyk)?;
        Ok(ColorSpec::Cmyk(c, m, y, k))
    }
}

impl TryFrom<ColorOptions> for ColorSpec {
    type Error = ColorError;

    fn try_from(options: ColorOptions) -> Result<Self> {
        options.into_spec()
    }
}

fn arity_error(format: ColorFormat) -> ColorError {
    let count = format.arity().unwrap_or_default();
    ColorError::Validation(format!(
        "{} color must contain {count} integers",
        format.as_str().to_uppercase()
    ))
}

fn components<const N: usize>(format: ColorFormat, values: Vec<i64>) -> Result<[i64; N]> {
    <[i64; N]>::try_from(values).map_err(|_| arity_error(format))
}

fn integer_array(format: ColorFormat, slot: &Value) -> Result<Vec<i64>> {
    let items = slot.as_array().ok_or_else(|| {
        ColorError::Type(format!(
            "{} color must be represented as an array",
            format.as_str().to_uppercase()
        ))
    })?;

    items
        .iter()
        .map(|item| item.as_i64().ok_or_else(|| arity_error(format)))
        .collect()
}
