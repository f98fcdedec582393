//! Token service module for JWT management
//!
//! Access and refresh tokens are HMAC-signed claim sets carrying the
//! subject, a purpose tag and an expiry. Nothing is persisted.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
