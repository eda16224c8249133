//! # thecolorapi
//!
//! A typed Rust client for [The Color API](https://www.thecolorapi.com/).
//!
//! ## Features
//!
//! - **Four input formats**: hex, RGB, HSL and CMYK
//! - **Input normalization**: hex prefixes stripped, components clamped, hue wrapped
//! - **Typed accessors**: names, conversions, fractions and contrast color
//! - **Blocking**: one GET request per lookup, no background runtime to manage
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use thecolorapi::{ColorLookup, ColorSpec, Result};
//!
//! # fn main() -> Result<()> {
//! let color = ColorLookup::from_spec(&ColorSpec::rgb(0, 71, 171))?;
//!
//! println!("Name: {}", color.name()?);
//! println!("Hex: {}", color.hex()?);
//! println!("HSL: {:?}", color.hsl()?);
//! println!("Text color: {}", color.contrast_hex()?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Normalizing without a request
//!
//! ```rust
//! use thecolorapi::{ColorOptions, ColorSpec};
//!
//! let query = ColorSpec::hsl(400, 150, -5).to_query().unwrap();
//! assert_eq!(query.to_string(), "hsl=40,100,0");
//!
//! let spec = ColorOptions::new().with_hex("#0047AB").into_spec().unwrap();
//! assert_eq!(spec.to_query().unwrap().value(), "0047ab");
//! ```
//!
//! ### Custom endpoint or timeout
//!
//! ```rust,no_run
//! use thecolorapi::{ClientConfig, ColorClient, ColorSpec};
//!
//! # fn main() -> thecolorapi::Result<()> {
//! let client = ColorClient::from_config(ClientConfig::default().with_timeout_secs(10))?;
//! let color = client.lookup(&ColorSpec::cmyk(100, 58, 0, 33))?;
//! println!("{}", color.name()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`input`] - Color formats, validation and normalization
//! - [`client`] - HTTP client and its configuration
//! - [`response`] - Lookup result and accessors
//! - [`error`] - Error type

pub mod client;
pub mod error;
pub mod input;
pub mod response;

pub use client::{ClientConfig, ColorClient, DEFAULT_ENDPOINT};
pub use error::{ColorError, Result};
pub use input::{
    clamp, normalize_hex, normalize_hue, ColorFormat, ColorOptions, ColorSpec, QueryParam,
};
pub use response::{ColorLookup, ColorSummary};

/// Current version of thecolorapi
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
