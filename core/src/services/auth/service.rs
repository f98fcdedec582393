//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{TokenPair, TokenPurpose};
use crate::errors::{DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::services::credentials::{BcryptVerifier, CredentialVerifier};
use crate::services::directory::UserDirectory;
use crate::services::token::TokenService;

/// Authentication service for the complete sign-up/login/refresh flow
///
/// Tokens are stateless: deactivating or demoting an account does not
/// invalidate tokens issued before the change.
pub struct AuthService<U, V = BcryptVerifier>
where
    U: UserRepository,
    V: CredentialVerifier,
{
    /// Account creation and credential checks
    directory: Arc<UserDirectory<U, V>>,
    /// JWT issuance and validation
    token_service: Arc<TokenService>,
}

impl<U, V> AuthService<U, V>
where
    U: UserRepository,
    V: CredentialVerifier,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `directory` - User directory for account data
    /// * `token_service` - Service for JWT token management
    pub fn new(directory: Arc<UserDirectory<U, V>>, token_service: Arc<TokenService>) -> Self {
        Self {
            directory,
            token_service,
        }
    }

    pub fn directory(&self) -> &Arc<UserDirectory<U, V>> {
        &self.directory
    }

    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }

    /// Register a new regular, active account
    ///
    /// Staff accounts are only created through the directory.
    pub async fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<Account> {
        self.directory.create(username, email, password).await
    }

    /// Check credentials and issue an access/refresh pair
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Tokens whose subject is the username
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Any
    ///   credential failure
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<TokenPair> {
        let account = self.directory.authenticate(username, password).await?;
        let pair = self.token_service.issue_pair(&account.username)?;
        tracing::info!(username = %account.username, "Login succeeded");
        Ok(pair)
    }

    /// Exchange a refresh token for a new access token
    pub fn refresh(&self, refresh_token: &str) -> DomainResult<String> {
        self.token_service.refresh(refresh_token)
    }

    /// Validate an access token and load the account it names
    pub async fn resolve_actor(&self, access_token: &str) -> DomainResult<Account> {
        let subject = self
            .token_service
            .validate(access_token, TokenPurpose::Access)?;
        self.resolve_subject(&subject).await
    }

    /// Load the account for an already-validated subject
    pub async fn resolve_subject(&self, subject: &str) -> DomainResult<Account> {
        match self.directory.find_by_username(subject).await? {
            Some(account) => Ok(account),
            None => {
                tracing::warn!(username = %subject, "Token subject no longer exists");
                Err(TokenError::UnknownSubject.into())
            }
        }
    }
}
