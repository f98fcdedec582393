//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Secret used when nothing else is configured; never valid in production
pub const DEVELOPMENT_SECRET: &str = "development-secret-please-change-in-production";

/// Stand-in for the production baseline; the real secret must come from
/// `PO_AUTH__JWT__SECRET`
pub const UNSET_SECRET: &str = "use-env-variable";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEVELOPMENT_SECRET),
            access_token_expiry: 3600,      // 60 minutes
            refresh_token_expiry: 2592000,  // 30 days
            issuer: String::from("pizza-orders"),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// True when the secret is one of the values published in this crate
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEVELOPMENT_SECRET || self.secret == UNSET_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,
}

fn default_algorithm() -> String {
    String::from("HS256")
}
