// File: crates/legend-core/src/config.rs
// Summary: Legend configuration (feature switches, header text, text style) loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LegendError, Result};

/// User-facing legend options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    /// Show the legend at all. A hidden legend also switches every readout off.
    pub visible: bool,
    pub ohlc: bool,
    pub percent: bool,
    pub lines: bool,
    /// Text color of the legend frame.
    pub color: String,
    pub font_size: u32,
    pub font_family: String,
    /// Static header line shown above the readouts.
    pub text: String,
    /// Color the percent move with the reference series' up/down colors.
    pub color_based_on_candle: bool,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            visible: false,
            ohlc: true,
            percent: true,
            lines: true,
            color: "rgb(191, 195, 203)".to_string(),
            font_size: 11,
            font_family: "Monaco".to_string(),
            text: String::new(),
            color_based_on_candle: false,
        }
    }
}

impl LegendConfig {
    /// Load config from a TOML file; a missing file yields the default config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no legend config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LegendConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.font_size == 0 {
            return Err(LegendError::InvalidConfig("font_size must be positive".into()));
        }
        if self.font_family.trim().is_empty() {
            return Err(LegendError::InvalidConfig("font_family must not be empty".into()));
        }
        Ok(())
    }

    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            color: self.color.clone(),
            font_size: self.font_size,
            font_family: self.font_family.clone(),
        }
    }
}

/// Text styling of the legend frame, handed to the presentation layer as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub color: String,
    pub font_size: u32,
    pub font_family: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        LegendConfig::default().text_style()
    }
}
