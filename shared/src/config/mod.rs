//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing and expiry configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Prefix of environment variables that override file configuration,
/// e.g. `PO_SERVER__PORT=9000` or `PO_AUTH__JWT__SECRET=...`
pub const ENV_PREFIX: &str = "PO";

/// Errors raised while assembling the application configuration
pub type ConfigError = ::config::ConfigError;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::new("127.0.0.1", 8080),
            database: DatabaseConfig::new("mysql://localhost:3306/pizza_orders_dev"),
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            database: DatabaseConfig::new("mysql://prod-db:3306/pizza_orders")
                .with_max_connections(50),
            auth: AuthConfig {
                jwt: JwtConfig::new(auth::UNSET_SECRET),
            },
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Baseline configuration for an environment, before files and overrides
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }

    /// Reject settings that must never reach production
    ///
    /// Production must not sign tokens with a secret published in this crate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::Message(String::from(
                "production requires a JWT secret; set PO_AUTH__JWT__SECRET",
            )));
        }
        Ok(())
    }

    /// Load configuration for the detected environment
    ///
    /// Layers, lowest precedence first:
    /// 1. the environment baseline (`for_environment`)
    /// 2. `config.toml`, then `config.{environment}.toml`, when present
    /// 3. `PO_*` environment variables (`__` separates nesting levels)
    ///
    /// `.env` and `.env.{environment}` files are read into the process
    /// environment before the variables are collected.
    pub fn load() -> Result<Self, ConfigError> {
        let env = Environment::from_env();
        dotenvy::from_filename(env.env_file()).ok();
        dotenvy::dotenv().ok();

        let baseline = ::config::Config::try_from(&Self::for_environment(env))?;

        ::config::Config::builder()
            .add_source(baseline)
            .add_source(::config::File::with_name("config").required(false))
            .add_source(::config::File::with_name(env.config_file()).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
