//! # Pizza Orders Core
//!
//! Domain layer for the pizza order backend: entities, the error taxonomy,
//! repository interfaces, and the authentication and order-lifecycle
//! services a transport layer calls.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
