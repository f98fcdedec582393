//! Business services containing domain logic and use cases.

pub mod auth;
pub mod credentials;
pub mod directory;
pub mod orders;
pub mod policy;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use credentials::{BcryptVerifier, CredentialVerifier};
pub use directory::UserDirectory;
pub use orders::OrderLedger;
pub use policy::AccessPolicy;
pub use token::{TokenService, TokenServiceConfig};
