//! Request-independent handler helpers

pub mod error;

pub use error::{handle_domain_error, json_config, path_config, status_and_code, ApiError};
