//! Middleware modules for the API

pub mod auth;

pub use auth::{bearer_token, AuthContext, JwtAuth};
