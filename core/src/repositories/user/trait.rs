//! User repository trait defining the interface for account persistence.
//!
//! The trait is async-first and storage-agnostic; the core never chooses an
//! engine. Implementations must enforce username and email uniqueness at
//! insert time so that concurrent sign-ups cannot both succeed.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use po_core::repositories::UserRepository;
/// use po_core::domain::entities::account::Account;
/// use po_core::errors::DomainError;
///
/// struct PostgresUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for PostgresUserRepository {
///     async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, DomainError> { Ok(None) }
/// #   async fn find_by_email(&self, _email: &str) -> Result<Option<Account>, DomainError> { Ok(None) }
/// #   async fn create(&self, account: Account) -> Result<Account, DomainError> { Ok(account) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an account by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with given ID
    /// * `Err(DomainError)` - Store failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Insert a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::Auth(AuthError::DuplicateUsername))` - Username taken
    /// * `Err(DomainError::Auth(AuthError::DuplicateEmail))` - Email taken
    /// * `Err(DomainError)` - Store failure
    ///
    /// When both collide the username error wins.
    async fn create(&self, account: Account) -> Result<Account, DomainError>;
}
