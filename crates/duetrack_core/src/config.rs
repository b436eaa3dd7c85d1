//! Tracker configuration.
//!
//! # Responsibility
//! - Load classifier thresholds and log level from JSON.
//! - Provide build-mode defaults when no file is present.
//!
//! # Invariants
//! - `attention_window_days` is never negative after loading.

use crate::logging::{default_log_level, parse_level};
use crate::status::classifier::{DuePolicy, DEFAULT_ATTENTION_WINDOW_DAYS};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file used by UI bridges.
pub const CONFIG_PATH_ENV: &str = "DUETRACK_CONFIG";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    InvalidAttentionWindow(i64),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::InvalidAttentionWindow(days) => {
                write!(f, "attention_window_days must be >= 0, got {days}")
            }
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidAttentionWindow(_) | Self::InvalidLogLevel(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Days ahead of today still painted as needing attention.
    pub attention_window_days: i64,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            attention_window_days: DEFAULT_ATTENTION_WINDOW_DAYS,
            log_level: default_log_level().to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parses and validates a JSON document. Missing keys take defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Loads the file named by `DUETRACK_CONFIG`, if set.
    ///
    /// Returns `Ok(None)` when the variable is unset or blank.
    pub fn load_from_env() -> Result<Option<Self>, ConfigError> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::load(raw.trim()).map(Some),
            _ => Ok(None),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attention_window_days < 0 {
            return Err(ConfigError::InvalidAttentionWindow(
                self.attention_window_days,
            ));
        }
        parse_level(&self.log_level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }

    pub fn due_policy(&self) -> DuePolicy {
        DuePolicy {
            attention_window_days: self.attention_window_days,
        }
    }
}
