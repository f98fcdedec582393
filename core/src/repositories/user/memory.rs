//! In-memory implementation of UserRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Process-local account store, used by tests and single-node setups
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    /// Overwrite a stored account, standing in for an admin edit
    #[cfg(test)]
    pub(crate) async fn replace(&self, account: Account) {
        self.accounts.write().await.insert(account.id, account);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        // Uniqueness check and insert share one write guard
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.username == account.username) {
            return Err(AuthError::DuplicateUsername {
                username: account.username,
            }
            .into());
        }
        if accounts.values().any(|a| a.email == account.email) {
            return Err(AuthError::DuplicateEmail {
                email: account.email,
            }
            .into());
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }
}
