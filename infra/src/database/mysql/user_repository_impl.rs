//! MySQL implementation of the UserRepository trait.
//!
//! Uniqueness of username and email is enforced by the `uq_users_username`
//! and `uq_users_email` indexes. Inserts take no locking reads; a lost race
//! surfaces as a unique violation named after the index it hit.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use po_core::domain::entities::account::Account;
use po_core::errors::{AuthError, DomainError};
use po_core::repositories::UserRepository;

use super::db_error;

const ACCOUNT_COLUMNS: &str = r#"
    id, username, email, password_hash, is_staff, is_active, created_at, updated_at
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &MySqlRow) -> Result<Account, DomainError> {
        let column = |name: &str, e: sqlx::Error| {
            DomainError::internal(format!("Failed to get {}: {}", name, e))
        };

        let id: String = row.try_get("id").map_err(|e| column("id", e))?;

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))?,
            username: row.try_get("username").map_err(|e| column("username", e))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| column("password_hash", e))?,
            is_staff: row.try_get("is_staff").map_err(|e| column("is_staff", e))?,
            is_active: row.try_get("is_active").map_err(|e| column("is_active", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }

    async fn find_one(&self, filter: &str, value: String) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE {} = ? LIMIT 1",
            ACCOUNT_COLUMNS, filter
        );

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    /// Translate a duplicate-key error into the matching domain error
    fn map_insert_error(account: &Account, error: sqlx::Error) -> DomainError {
        if let sqlx::Error::Database(ref db_err) = error {
            if db_err.is_unique_violation() {
                let message = db_err.message();
                if message.contains("uq_users_email") {
                    return AuthError::DuplicateEmail {
                        email: account.email.clone(),
                    }
                    .into();
                }
                return AuthError::DuplicateUsername {
                    username: account.username.clone(),
                }
                .into();
            }
        }
        db_error("Failed to create account", error)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        self.find_one("id", id.to_string()).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("username", username.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("email", email.to_string()).await
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, username, email, password_hash,
                is_staff, is_active, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.is_staff)
            .bind(account.is_active)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_insert_error(&account, e))?;

        Ok(account)
    }
}
