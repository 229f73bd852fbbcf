//! Configuration file loading for the terminal host.
//!
//! Settings come from `absorb.toml` in the working directory, or from the
//! file named on the command line. Every field is optional.

use absorb_engine::GameConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Logging settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, used when `RUST_LOG` is not set.
    /// Defaults to "info".
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
        }
    }
}

/// Host configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PlayConfig {
    /// Board size and variant of the game to start.
    pub game: GameConfig,
    /// Logging settings.
    pub log: LogConfig,
}

impl PlayConfig {
    /// Loads the configuration.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// [`Self::default_path()`] is read if present and defaults are used
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the path of the configuration file read by default.
    pub fn default_path() -> PathBuf {
        PathBuf::from("absorb.toml")
    }
}
