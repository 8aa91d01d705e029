//! Optional palette configuration.
//!
//! ```toml
//! version = 1
//!
//! [defaults]
//! format = "hex-alpha"
//!
//! [palette]
//! accent = "#FF8800"
//! muted = "dark-gray"
//! ```
use std::collections::BTreeMap;

use serde::Deserialize;
use uicolor::Color;

use crate::format::OutputFormat;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwatchConfig {
    pub version: u32,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub palette: BTreeMap<String, Color>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Defaults {
    pub format: Option<OutputFormat>,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            version: 1,
            defaults: Defaults::default(),
            palette: BTreeMap::new(),
        }
    }
}

impl SwatchConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: SwatchConfig = toml::from_str(input)?;
        raw.validate()?;
        Ok(raw)
    }

    pub fn default_format(&self) -> Option<OutputFormat> {
        self.defaults.format
    }

    /// Palette entries win over the built-in named colors.
    pub fn resolve(&self, text: &str) -> Result<Color, uicolor::ColorParseError> {
        match self.palette.get(text.trim()) {
            Some(color) => Ok(*color),
            None => Color::parse(text),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != 1 {
            return Err(ConfigError::Invalid(format!(
                "unsupported config version {}; expected 1",
                self.version
            )));
        }

        for name in self.palette.keys() {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "palette names must not be empty".into(),
                ));
            }
            if name.starts_with('#') {
                return Err(ConfigError::Invalid(format!(
                    "palette name '{name}' must not start with '#'"
                )));
            }
        }

        Ok(())
    }
}
