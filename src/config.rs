//! Configuration file handling.
//!
//! The config lives at `$ANSIFADE_CONFIG`, or `ansifade/config.toml` under
//! the platform config directory. A missing file means defaults; missing
//! fields inside a file are filled with defaults too.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::fade::cache::DEFAULT_MAX_ENTRIES;
use crate::fade::DEFAULT_FACTOR;
use crate::terminal::DEFAULT_QUERY_TIMEOUT_MS;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "ANSIFADE_CONFIG";

/// Errors from loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fade: FadeConfig,
    pub terminal: TerminalConfig,
    pub cache: CacheConfig,
}

/// Defaults for the `fade` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Weight of the original colors, 0.0 to 1.0
    pub factor: f64,
    /// Reference background (`#RRGGBB`); detected when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Reference foreground (`#RRGGBB`); detected when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            factor: DEFAULT_FACTOR,
            background: None,
            foreground: None,
        }
    }
}

/// Terminal detection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// How long to wait for the OSC color reply
    pub query_timeout_ms: u64,
    /// Treat the terminal as true-color regardless of detection
    pub force_truecolor: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: DEFAULT_QUERY_TIMEOUT_MS,
            force_truecolor: false,
        }
    }
}

/// Interpolation cache settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("ansifade").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config file, or defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the config to the default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, self.to_toml()?).map_err(io_error)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
