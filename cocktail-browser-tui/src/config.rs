//! Optional `config.toml` in the platform config directory

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::view::theme::Theme;

const APP_DIR: &str = "cocktail-browser";
const CONFIG_FILE: &str = "config.toml";

/// Configuration load errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Catalog API base URL; the public endpoint when unset
    pub api_base_url: Option<String>,
    /// Where preferences, the cached list and the log file live
    pub data_dir: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: Option<String>,
    pub theme: Theme,
}

impl Config {
    /// Load from the default location, falling back to defaults.
    ///
    /// Returns the config and, if the file existed but could not be used,
    /// the error that caused the fallback. Logging is not up yet at this point,
    /// so reporting is left to the caller.
    pub fn load() -> (Self, Option<ConfigError>) {
        let Some(path) = Self::default_path() else {
            return (Self::default(), None);
        };
        match Self::load_from(&path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load from a specific path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `{config_dir}/cocktail-browser/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Configured data directory, else `{data_dir}/cocktail-browser`,
    /// else a relative `.cocktail-browser`.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR}")))
    }

    /// Log filter directive, `info` unless configured
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}
