//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, TokenPair, TokenPurpose};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Issues and validates stateless JWTs bound to a username
///
/// Keys are derived once in [`TokenService::new`] and never change, so the
/// service can be shared across request handlers behind an `Arc`.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Internal` for an empty secret,
    /// a non-HMAC algorithm, or a non-positive lifetime
    pub fn new(config: TokenServiceConfig) -> DomainResult<Self> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::internal("JWT secret must not be empty"));
        }
        if !matches!(
            config.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::internal(format!(
                "Unsupported JWT algorithm {:?}; only HS256, HS384 and HS512 are accepted",
                config.algorithm
            )));
        }
        if config.access_token_expiry_seconds <= 0 || config.refresh_token_expiry_seconds <= 0 {
            return Err(DomainError::internal("Token lifetimes must be positive"));
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked by `validate_at` against an explicit clock
        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues an access token for `subject`
    pub fn issue_access(&self, subject: &str) -> DomainResult<String> {
        self.issue_access_at(subject, Utc::now())
    }

    /// Issues an access token as if the current time were `now`
    pub fn issue_access_at(&self, subject: &str, now: DateTime<Utc>) -> DomainResult<String> {
        self.issue(
            subject,
            TokenPurpose::Access,
            now,
            self.config.access_token_expiry_seconds,
        )
    }

    /// Issues a refresh token for `subject`
    pub fn issue_refresh(&self, subject: &str) -> DomainResult<String> {
        self.issue_refresh_at(subject, Utc::now())
    }

    pub fn issue_refresh_at(&self, subject: &str, now: DateTime<Utc>) -> DomainResult<String> {
        self.issue(
            subject,
            TokenPurpose::Refresh,
            now,
            self.config.refresh_token_expiry_seconds,
        )
    }

    /// Issues an access and a refresh token together
    pub fn issue_pair(&self, subject: &str) -> DomainResult<TokenPair> {
        let now = Utc::now();
        Ok(TokenPair {
            access_token: self.issue_access_at(subject, now)?,
            refresh_token: self.issue_refresh_at(subject, now)?,
            access_expires_in: self.config.access_token_expiry_seconds,
            refresh_expires_in: self.config.refresh_token_expiry_seconds,
        })
    }

    /// Validates `token` for `expected` use and returns its subject
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The embedded subject, unchanged
    /// * `Err(DomainError::Token)` - Bad signature, malformed token, wrong
    ///   purpose, or expired
    pub fn validate(&self, token: &str, expected: TokenPurpose) -> DomainResult<String> {
        self.validate_at(token, expected, Utc::now())
    }

    /// Validates `token` against the instant `now`
    pub fn validate_at(
        &self,
        token: &str,
        expected: TokenPurpose,
        now: DateTime<Utc>,
    ) -> DomainResult<String> {
        let claims = self.decode_jwt(token)?;

        if !claims.has_purpose(expected) {
            tracing::debug!(
                expected = expected.as_str(),
                found = %claims.purpose,
                "Rejected token with wrong purpose"
            );
            return Err(TokenError::PurposeMismatch {
                expected: expected.as_str().to_string(),
                found: claims.purpose,
            }
            .into());
        }

        if claims.is_expired_at(now) {
            tracing::debug!(exp = claims.exp, "Rejected expired token");
            return Err(TokenError::Expired.into());
        }

        Ok(claims.sub)
    }

    /// Exchanges a refresh token for a new access token with the same subject
    pub fn refresh(&self, refresh_token: &str) -> DomainResult<String> {
        let subject = self.validate(refresh_token, TokenPurpose::Refresh)?;
        self.issue_access(&subject)
    }

    fn issue(
        &self,
        subject: &str,
        purpose: TokenPurpose,
        now: DateTime<Utc>,
        ttl_seconds: i64,
    ) -> DomainResult<String> {
        let claims = Claims::new(
            subject,
            purpose,
            &self.config.issuer,
            now,
            Duration::seconds(ttl_seconds),
        );
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            DomainError::Token(TokenError::GenerationFailed)
        })
    }

    fn decode_jwt(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::Malformed,
                };
                tracing::debug!(error = %e, reason = %reason, "Rejected undecodable token");
                DomainError::Token(reason)
            })
    }
}
