//! TOML configuration files.

use super::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full configuration file format.
///
/// ```toml
/// [password]
/// length = 16
/// include_symbols = false
///
/// [output]
/// count = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Password policy, the `[password]` table.
    #[serde(default)]
    pub password: Config,
    /// Output settings, the `[output]` table.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Number of passwords to produce per run.
    pub count: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { count: 1 }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.password.validate()?;
        Ok(config)
    }
}
