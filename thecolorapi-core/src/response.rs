//! The decoded answer of a color lookup.
//!
//! [`ColorLookup`] owns the JSON document returned by the service and never
//! changes after it is built. Accessors are thin projections over that
//! document; they do not validate ranges and only fail when a field is
//! absent or has an unexpected JSON type.

use crate::client::ColorClient;
use crate::error::{ColorError, Result};
use crate::input::{ColorOptions, ColorSpec, QueryParam};
use serde::Serialize;
use serde_json::Value;

/// Result of one successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorLookup {
    json: Value,
    query: Option<QueryParam>,
}

impl ColorLookup {
    /// Validates `options` and looks the color up with a default client.
    ///
    /// ```rust,no_run
    /// use thecolorapi::{ColorLookup, ColorOptions};
    ///
    /// # fn main() -> thecolorapi::Result<()> {
    /// let color = ColorLookup::new(ColorOptions::new().with_hex("#0047AB"))?;
    /// println!("{} {:?}", color.name()?, color.rgb()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(options: ColorOptions) -> Result<Self> {
        ColorClient::new()?.lookup_options(options)
    }

    /// Looks `spec` up with a default client.
    pub fn from_spec(spec: &ColorSpec) -> Result<Self> {
        ColorClient::new()?.lookup(spec)
    }

    /// Wraps an already decoded response body.
    pub fn from_json(json: Value) -> Self {
        Self { json, query: None }
    }

    pub(crate) fn with_query(json: Value, query: QueryParam) -> Self {
        Self {
            json,
            query: Some(query),
        }
    }

    /// The query parameter this result was requested with, if known.
    pub fn query(&self) -> Option<&QueryParam> {
        self.query.as_ref()
    }

    /// The full response document.
    pub fn raw(&self) -> &Value {
        &self.json
    }

    pub fn into_raw(self) -> Value {
        self.json
    }

    fn field(&self, pointer: &str) -> Result<&Value> {
        self.json
            .pointer(pointer)
            .ok_or_else(|| ColorError::MissingField(pointer.to_string()))
    }

    fn str_at(&self, pointer: &str) -> Result<&str> {
        self.field(pointer)?
            .as_str()
            .ok_or_else(|| ColorError::MissingField(pointer.to_string()))
    }

    fn int_at(&self, pointer: &str) -> Result<i64> {
        self.field(pointer)?
            .as_i64()
            .ok_or_else(|| ColorError::MissingField(pointer.to_string()))
    }

    // The service writes whole fractions as integers (`0`, `1`).
    fn float_at(&self, pointer: &str) -> Result<f64> {
        self.field(pointer)?
            .as_f64()
            .ok_or_else(|| ColorError::MissingField(pointer.to_string()))
    }

    /// Hex string with leading `#`, e.g. `#0047AB`.
    pub fn hex(&self) -> Result<&str> {
        self.str_at("/hex/value")
    }

    /// Hex string without `#`, e.g. `0047AB`.
    pub fn hex_clean(&self) -> Result<&str> {
        self.str_at("/hex/clean")
    }

    /// Red, green, blue in `[0, 255]`.
    pub fn rgb(&self) -> Result<(i64, i64, i64)> {
        Ok((
            self.int_at("/rgb/r")?,
            self.int_at("/rgb/g")?,
            self.int_at("/rgb/b")?,
        ))
    }

    /// Red, green, blue in `[0, 1]`.
    pub fn rgb_fraction(&self) -> Result<(f64, f64, f64)> {
        Ok((
            self.float_at("/rgb/fraction/r")?,
            self.float_at("/rgb/fraction/g")?,
            self.float_at("/rgb/fraction/b")?,
        ))
    }

    /// Hue in `[0, 359]`, saturation and lightness in `[0, 100]`.
    pub fn hsl(&self) -> Result<(i64, i64, i64)> {
        Ok((
            self.int_at("/hsl/h")?,
            self.int_at("/hsl/s")?,
            self.int_at("/hsl/l")?,
        ))
    }

    pub fn hsl_fraction(&self) -> Result<(f64, f64, f64)> {
        Ok((
            self.float_at("/hsl/fraction/h")?,
            self.float_at("/hsl/fraction/s")?,
            self.float_at("/hsl/fraction/l")?,
        ))
    }

    /// Hue in `[0, 359]`, saturation and value in `[0, 100]`.
    pub fn hsv(&self) -> Result<(i64, i64, i64)> {
        Ok((
            self.int_at("/hsv/h")?,
            self.int_at("/hsv/s")?,
            self.int_at("/hsv/v")?,
        ))
    }

    pub fn hsv_fraction(&self) -> Result<(f64, f64, f64)> {
        Ok((
            self.float_at("/hsv/fraction/h")?,
            self.float_at("/hsv/fraction/s")?,
            self.float_at("/hsv/fraction/v")?,
        ))
    }

    /// Cyan, magenta, yellow, key in `[0, 100]`.
    pub fn cmyk(&self) -> Result<(i64, i64, i64, i64)> {
        Ok((
            self.int_at("/cmyk/c")?,
            self.int_at("/cmyk/m")?,
            self.int_at("/cmyk/y")?,
            self.int_at("/cmyk/k")?,
        ))
    }

    pub fn cmyk_fraction(&self) -> Result<(f64, f64, f64, f64)> {
        Ok((
            self.float_at("/cmyk/fraction/c")?,
            self.float_at("/cmyk/fraction/m")?,
            self.float_at("/cmyk/fraction/y")?,
            self.float_at("/cmyk/fraction/k")?,
        ))
    }

    /// `#000000` or `#ffffff`, whichever reads better on top of this color.
    pub fn contrast_hex(&self) -> Result<&str> {
        self.str_at("/contrast/value")
    }

    /// Human-readable color name.
    pub fn name(&self) -> Result<&str> {
        self.str_at("/name/value")
    }

    /// Collects every accessor into one serializable value.
    pub fn summary(&self) -> Result<ColorSummary> {
        Ok(ColorSummary {
            name: self.name()?.to_string(),
            hex: self.hex()?.to_string(),
            hex_clean: self.hex_clean()?.to_string(),
            rgb: self.rgb()?,
            rgb_fraction: self.rgb_fraction()?,
            hsl: self.hsl()?,
            hsl_fraction: self.hsl_fraction()?,
            hsv: self.hsv()?,
            hsv_fraction: self.hsv_fraction()?,
            cmyk: self.cmyk()?,
            cmyk_fraction: self.cmyk_fraction()?,
            contrast_hex: self.contrast_hex()?.to_string(),
        })
    }
}

/// Flat, owned snapshot of a [`ColorLookup`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSummary {
    pub name: String,
    pub hex: String,
    pub hex_clean: String,
    pub rgb: (i64, i64, i64),
    pub rgb_fraction: (f64, f64, f64),
    pub hsl: (i64, i64, i64),
    pub hsl_fraction: (f64, f64, f64),
    pub hsv: (i64, i64, i64),
    pub hsv_fraction: (f64, f64, f64),
    pub cmyk: (i64, i64, i64, i64),
    pub cmyk_fraction: (f64, f64, f64, f64),
    pub contrast_hex: String,
}
