//! User directory implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::account::{Account, NewAccount};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::credentials::{BcryptVerifier, CredentialVerifier};

/// Digested once so unknown usernames cost one real verification
const PLACEHOLDER_PASSWORD: &str = "placeholder-password-for-unknown-users";

/// Uniqueness-checked account creation, lookup and authentication
pub struct UserDirectory<U, V = BcryptVerifier>
where
    U: UserRepository,
    V: CredentialVerifier,
{
    /// Account store
    user_repository: Arc<U>,
    /// Password hashing scheme
    verifier: V,
    /// Digest compared against when the username is unknown
    placeholder_digest: String,
}

impl<U, V> UserDirectory<U, V>
where
    U: UserRepository,
    V: CredentialVerifier,
{
    /// Create a new user directory
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Account store
    /// * `verifier` - Credential verifier used for hashing and checking passwords
    pub fn new(user_repository: Arc<U>, verifier: V) -> DomainResult<Self> {
        let placeholder_digest = verifier.hash(PLACEHOLDER_PASSWORD)?;
        Ok(Self {
            user_repository,
            verifier,
            placeholder_digest,
        })
    }

    pub fn repository(&self) -> &Arc<U> {
        &self.user_repository
    }

    /// Create a regular, active account
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<Account> {
        self.create_with(NewAccount::new(username, email, password))
            .await
    }

    /// Create an account, honouring the optional role and activity flags
    ///
    /// Used for seeding and administration; public sign-up goes through `create`.
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::Auth(AuthError::DuplicateUsername))` - Username taken
    /// * `Err(DomainError::Auth(AuthError::DuplicateEmail))` - Email taken
    ///
    /// The username check runs first, so a double collision reports the username.
    pub async fn create_with(&self, new_account: NewAccount) -> DomainResult<Account> {
        let NewAccount {
            username,
            email,
            password,
            is_staff,
            is_active,
        } = new_account;

        if self.user_repository.find_by_username(&username).await?.is_some() {
            tracing::warn!(username = %username, "Sign-up rejected: username taken");
            return Err(AuthError::DuplicateUsername { username }.into());
        }
        if self.user_repository.find_by_email(&email).await?.is_some() {
            tracing::warn!(username = %username, "Sign-up rejected: email taken");
            return Err(AuthError::DuplicateEmail { email }.into());
        }

        let password_hash = self.verifier.hash(&password)?;
        let account = Account::new(username, email, password_hash)
            .with_staff(is_staff.unwrap_or(false))
            .with_active(is_active.unwrap_or(true));

        // The store re-checks both keys atomically; a concurrent sign-up can
        // still lose here
        let account = self.user_repository.create(account).await?;
        tracing::info!(
            username = %account.username,
            account_id = %account.id,
            is_staff = account.is_staff,
            "Account created"
        );
        Ok(account)
    }

    pub async fn find_by_username(&self, username: &str) -> DomainResult<Option<Account>> {
        self.user_repository.find_by_username(username).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Account>> {
        self.user_repository.find_by_id(id).await
    }

    /// Check a username and password
    ///
    /// Unknown username, inactive account and wrong password all fail with
    /// the same `InvalidCredentials`.
    pub async fn authenticate(&self, username: &str, password: &str) -> DomainResult<Account> {
        let account = self.user_repository.find_by_username(username).await?;

        match account {
            Some(account) => {
                let password_ok = self.verifier.verify(password, &account.password_hash);
                if password_ok && account.is_active {
                    tracing::debug!(username = %username, "Authenticated");
                    Ok(account)
                } else {
                    let reason = if password_ok { "inactive" } else { "wrong_password" };
                    tracing::warn!(username = %username, reason, "Authentication failed");
                    Err(AuthError::InvalidCredentials.into())
                }
            }
            None => {
                let _ = self.verifier.verify(password, &self.placeholder_digest);
                tracing::warn!(username = %username, reason = "unknown_user", "Authentication failed");
                Err(AuthError::InvalidCredentials.into())
            }
        }
    }
}
