//! Configuration for the ProjectWizard CLI
//!
//! Load order:
//! - built-in defaults
//! - optional TOML file (`--config <path>`)
//! - `PROJECTWIZARD_*` environment overrides

use pw_history::{HistoryConfig, HistoryError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment override for [`WizardConfig::data_dir`]
pub const ENV_DATA_DIR: &str = "PROJECTWIZARD_DATA_DIR";
/// Environment override for [`HistoryConfig::max_items`]
pub const ENV_MAX_HISTORY: &str = "PROJECTWIZARD_MAX_HISTORY";
/// Environment override for [`GenerationConfig::delay_ms`]
pub const ENV_DELAY_MS: &str = "PROJECTWIZARD_DELAY_MS";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config file {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// TOML decoding error
        #[source]
        source: toml::de::Error,
    },

    /// Environment variable holds an unusable value
    #[error("invalid value for {var}: '{value}'")]
    Env {
        /// Variable name
        var: &'static str,
        /// Rejected value
        value: String,
    },

    /// Values are individually well-formed but unusable together
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<HistoryError> for ConfigError {
    fn from(e: HistoryError) -> Self {
        Self::Invalid(e.to_string())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Directory holding persisted slots
    pub data_dir: PathBuf,
    /// History store settings
    pub history: HistoryConfig,
    /// Generation settings
    pub generation: GenerationConfig,
    /// Logging settings
    pub log: LogConfig,
}

impl WizardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load defaults, then `path` if given, then process environment overrides
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed, an
    /// override is malformed, or the result fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.with_env_overrides(|var| std::env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file; missing keys take their defaults
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] or [`ConfigError::Parse`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `PROJECTWIZARD_*` overrides read through `lookup`
    ///
    /// # Errors
    /// Returns [`ConfigError::Env`] if a numeric override does not parse.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup(ENV_MAX_HISTORY) {
            self.history.max_items = parse_env(ENV_MAX_HISTORY, value)?;
        }
        if let Some(value) = lookup(ENV_DELAY_MS) {
            self.generation.delay_ms = parse_env(ENV_DELAY_MS, value)?;
        }
        Ok(self)
    }

    /// With data directory
    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// With simulated generation delay
    #[inline]
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.generation.delay_ms = delay_ms;
        self
    }

    /// Reject unusable combinations
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for a zero history bound, an empty
    /// key or an empty data directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.history.validate()?;
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_dir must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".projectwizard"),
            history: HistoryConfig::default(),
            generation: GenerationConfig::default(),
            log: LogConfig::default(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Env { var, value })
}

/// Generation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Simulated processing time in milliseconds
    pub delay_ms: u64,
}

impl GenerationConfig {
    /// Delay as a [`Duration`]
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { delay_ms: 2500 }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}
