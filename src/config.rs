// Presentation settings for the demo binaries.
// Only how output looks is configurable; prices, volumes and other sample
// constants live with their patterns as compile-time constants.

use crate::error::{PatternError, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable naming an optional TOML settings file.
pub const CONFIG_ENV: &str = "DESIGN_PATTERNS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Color headings and warnings on the terminal.
    pub color: bool,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| PatternError::config_parse("<inline>", err))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| PatternError::config_read(path, err))?;
        toml::from_str(&content).map_err(|err| PatternError::config_parse(path, err))
    }

    /// Settings from the file named by [`CONFIG_ENV`], or the defaults.
    pub fn discover() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}
