//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, OrderError, TokenError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Authenticated, but the access policy denied the action
    #[error("Unauthorized access")]
    Unauthorized,

    /// Store or other infrastructure failure
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Externally observable failure kinds
///
/// Every `DomainError` collapses to exactly one kind, and the transport layer
/// maps each kind to exactly one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCredentials,
    DuplicateUsername,
    DuplicateEmail,
    InvalidToken,
    Unauthorized,
    NotFound,
    InvalidStatus,
    InvalidQuantity,
    Internal,
}

impl DomainError {
    /// Shorthand for a missing order
    pub fn order_not_found() -> Self {
        DomainError::NotFound {
            resource: "Order".to_string(),
        }
    }

    /// Wrap a store failure
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// The externally observable kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Unauthorized => ErrorKind::Unauthorized,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(AuthError::InvalidCredentials) => ErrorKind::InvalidCredentials,
            DomainError::Auth(AuthError::DuplicateUsername { .. }) => ErrorKind::DuplicateUsername,
            DomainError::Auth(AuthError::DuplicateEmail { .. }) => ErrorKind::DuplicateEmail,
            // Token generation only fails on a broken signing key
            DomainError::Token(TokenError::GenerationFailed) => ErrorKind::Internal,
            DomainError::Token(_) => ErrorKind::InvalidToken,
            DomainError::Order(OrderError::InvalidStatus { .. }) => ErrorKind::InvalidStatus,
            DomainError::Order(OrderError::InvalidQuantity { .. }) => ErrorKind::InvalidQuantity,
        }
    }
}
