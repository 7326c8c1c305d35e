//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Configuration is loaded from a TOML file with an environment
//! variable override for the database password (`GEOSHELL_DB_PASSWORD`),
//! which is never stored in the file when the override is present.

pub mod database;
pub mod logging;

use serde::Deserialize;
use std::path::Path;

use crate::error::{ConfigError, Result};

pub use database::DatabaseConfig;
pub use logging::LoggingConfig;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. [`Config::load_or_default`] falls back to the
/// built-in defaults when no config file exists, so the tool works out of
/// the box against a local database.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// The database password is taken from the `GEOSHELL_DB_PASSWORD`
    /// environment variable when set, overriding the file value.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation
    /// fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Ok(password) = std::env::var("GEOSHELL_DB_PASSWORD") {
            config.database.password = password;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from a TOML file, or fall back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            let mut config = Self::default();
            if let Ok(password) = std::env::var("GEOSHELL_DB_PASSWORD") {
                config.database.password = password;
            }
            return Ok(config);
        }
        Self::load(path)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.database.name.is_empty() {
            return Err(ConfigError::MissingField { field: "name" }.into());
        }
        if self.database.user.is_empty() {
            return Err(ConfigError::MissingField { field: "user" }.into());
        }
        if self.database.host.is_empty() {
            return Err(ConfigError::MissingField { field: "host" }.into());
        }
        if self.database.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
