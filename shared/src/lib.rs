//! Shared configuration and common types for the pizza order server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types and the layered configuration loader
//! - The error response body returned by the HTTP layer

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use crate::config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig,
};
pub use crate::errors::{error_codes, ErrorResponse};
