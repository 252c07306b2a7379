//! Chart layout constants
//!
//! Every value has a fixed default. A TOML file may override any subset:
//!
//! ```toml
//! row_height = 24.0
//! band_even = "#ffffff"
//!
//! [margin]
//! left = 200.0
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Space around the chart body in pixels
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 0.0,
            left: 175.0,
        }
    }
}

/// Chart layout configuration
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Height of one record row in pixels
    pub row_height: f64,
    /// Label font size as a fraction of the row height
    pub font_ratio: f64,
    /// Gap between the label and the chart body
    pub label_padding: f64,
    pub margin: Margin,
    /// Outer canvas width, margins included
    pub canvas_width: f64,
    /// Outer canvas height, margins included
    pub canvas_height: f64,
    /// Calendar year the top axis is laid out against
    pub year: i32,
    pub band_even: String,
    pub band_odd: String,
    pub bar_color: String,
    pub text_color: String,
    pub font_family: String,
    pub grid_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            row_height: 20.0,
            font_ratio: 0.75,
            label_padding: 10.0,
            margin: Margin::default(),
            canvas_width: 875.0,
            canvas_height: 1000.0,
            year: 2012,
            band_even: "#ffffe0".into(),
            band_odd: "#fffac9".into(),
            bar_color: "#90ddbb".into(),
            text_color: "black".into(),
            font_family: "sans-serif".into(),
            grid_color: "lightgrey".into(),
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Configure row height
    pub fn row_height(mut self, height: f64) -> Self {
        self.row_height = height;
        self
    }

    /// Configure outer canvas size
    pub fn canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Width of the chart body, the scale's pixel range
    pub fn content_width(&self) -> f64 {
        self.canvas_width - self.margin.left - self.margin.right
    }

    /// Height of the chart body, spanned by gridlines
    pub fn content_height(&self) -> f64 {
        self.canvas_height - self.margin.top - self.margin.bottom
    }

    pub fn font_size(&self) -> f64 {
        self.row_height * self.font_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_content_box() {
        let config = ChartConfig::default();
        assert_eq!(config.content_width(), 680.0);
        assert_eq!(config.content_height(), 980.0);
        assert_eq!(config.font_size(), 15.0);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ChartConfig::from_toml_str(
            r##"
row_height = 24.0
band_even = "#ffffff"

[margin]
left = 200.0
"##,
        )
        .unwrap();
        assert_eq!(config.row_height, 24.0);
        assert_eq!(config.band_even, "#ffffff");
        assert_eq!(config.band_odd, "#fffac9");
        assert_eq!(config.margin.left, 200.0);
        assert_eq!(config.margin.top, 20.0);
    }

    #[test]
    fn bad_toml_is_error() {
        let err = ChartConfig::from_toml_str("row_height = \"tall\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn builder_setters() {
        let config = ChartConfig::new().row_height(30.0).canvas(500.0, 400.0);
        assert_eq!(config.font_size(), 22.5);
        assert_eq!(config.content_width(), 305.0);
    }
}
