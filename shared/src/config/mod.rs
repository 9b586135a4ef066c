//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token TTL and password hashing cost
//! - `database` - Credential store connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server, deadlines and graceful shutdown

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, MAX_BCRYPT_COST, MIN_BCRYPT_COST};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Prefix for environment variable overrides, e.g. `SSO__AUTH__TOKEN_TTL=900`
pub const ENV_PREFIX: &str = "SSO";

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Baseline configuration for an environment, before file and env overrides
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from an optional file plus `SSO__*` environment overrides
    ///
    /// Layering, lowest to highest precedence: environment defaults, the file at
    /// `path` (TOML, YAML or JSON by extension), then environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let mut builder = Self::base_builder(environment)?;

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::Invalid(format!(
                    "config file does not exist: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Self::from_builder(builder)
    }

    /// Check invariants the rest of the system relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.token_ttl == 0 {
            return Err(ConfigError::Invalid("auth.token_ttl must be positive".to_string()));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::Invalid(format!(
                "auth.bcrypt_cost must be between {} and {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST
            )));
        }
        if self.server.request_timeout == 0 {
            return Err(ConfigError::Invalid("server.request_timeout must be positive".to_string()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid("database.max_connections must be positive".to_string()));
        }
        Ok(())
    }

    fn base_builder(environment: Environment) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = config::Config::try_from(&Self::for_environment(environment))?;
        Ok(config::Config::builder().add_source(defaults))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
