//! Environment-driven application configuration.
//!
//! # Responsibility
//! - Read startup settings once from environment variables.
//! - Reject malformed values before any backend is constructed.
//!
//! # Invariants
//! - Configuration is read once at startup and never re-read.
//! - Missing variables fall back to development defaults.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use crate::selector::StorageMode;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_APP_ENV: &str = "APP_ENV";
pub const ENV_DB_PATH: &str = "CAMPUS_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "CAMPUS_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "CAMPUS_LOG_DIR";

const DEFAULT_APP_ENV: &str = "development";
const DEFAULT_DB_PATH: &str = "campus.sqlite3";
const IN_MEMORY_DB_PATH: &str = ":memory:";

/// Where the relational backend keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    /// Private SQLite database discarded on exit.
    Memory,
}

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Deployment environment name; `production` selects SQLite storage.
    pub env: String,
    pub db_location: DbLocation,
    pub log_level: &'static str,
    /// Rolling log file directory; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { variable: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { variable, message } => write!(f, "invalid {variable}: {message}"),
        }
    }
}

impl Error for ConfigError {}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: DEFAULT_APP_ENV.to_string(),
            db_location: DbLocation::File(PathBuf::from(DEFAULT_DB_PATH)),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value.
    ///
    /// Blank values are treated as unset. `APP_ENV` is kept verbatim so that
    /// only an exact `production` selects the relational backend; the other
    /// variables are trimmed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(env) = lookup(ENV_APP_ENV).filter(|value| !value.is_empty()) {
            config.env = env;
        }

        if let Some(path) = read(ENV_DB_PATH) {
            config.db_location = if path == IN_MEMORY_DB_PATH {
                DbLocation::Memory
            } else {
                DbLocation::File(PathBuf::from(path))
            };
        }

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(|message| ConfigError::Invalid {
                variable: ENV_LOG_LEVEL,
                message,
            })?;
        }

        if let Some(dir) = read(ENV_LOG_DIR) {
            let dir = normalize_log_dir(&dir).map_err(|message| ConfigError::Invalid {
                variable: ENV_LOG_DIR,
                message,
            })?;
            config.log_dir = Some(dir);
        }

        Ok(config)
    }

    /// Storage backend implied by [`AppConfig::env`].
    pub fn storage_mode(&self) -> StorageMode {
        StorageMode::from_env_name(&self.env)
    }
}
