//! Domain-specific error types for authentication, tokens, and orders
//!
//! Error messages here are developer-facing; the presentation layer decides
//! what a client sees for each kind.

use thiserror::Error;

/// Account and credential errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username, inactive account, or wrong password.
    /// The three cases are deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username already taken: {username}")]
    DuplicateUsername { username: String },

    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },
}

/// Reasons a token was rejected
///
/// Every variant surfaces as the single external kind `InvalidToken`;
/// the reason only exists for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token purpose mismatch: expected {expected}, found {found}")]
    PurposeMismatch { expected: String, found: String },

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token format")]
    Malformed,

    /// Signature and claims are fine but the account is gone
    #[error("Token subject does not resolve to an account")]
    UnknownSubject,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Order payload errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Invalid order status: {value}")]
    InvalidStatus { value: String },

    #[error("Quantity must be at least 1, got {value}")]
    InvalidQuantity { value: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        let error = AuthError::DuplicateUsername {
            username: "johndoe".to_string(),
        };
        assert!(error.to_string().contains("johndoe"));
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }

    #[test]
    fn test_token_error_messages() {
        let error = TokenError::PurposeMismatch {
            expected: "access".to_string(),
            found: "refresh".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Token purpose mismatch: expected access, found refresh"
        );
    }

    #[test]
    fn test_order_error_messages() {
        let error = OrderError::InvalidQuantity { value: 0 };
        assert_eq!(error.to_string(), "Quantity must be at least 1, got 0");
    }
}
