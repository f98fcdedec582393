//! Account entity representing a registered customer or staff member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Login name, globally unique and immutable after creation
    pub username: String,

    /// Contact email, globally unique
    pub email: String,

    /// One-way password digest, never the plaintext
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Elevated role: cross-account visibility and status changes
    pub is_staff: bool,

    /// Disables authentication when false
    pub is_active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a regular, active account
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            is_staff: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Grants or removes the staff role
    pub fn with_staff(mut self, is_staff: bool) -> Self {
        self.is_staff = is_staff;
        self
    }

    /// Enables or disables authentication for the account
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Account creation input for seeding and administration
///
/// `is_staff` and `is_active` default to a regular, active account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_staff: Option<bool>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl NewAccount {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            is_staff: None,
            is_active: None,
        }
    }

    /// Marks the new account as staff
    pub fn staff(mut self) -> Self {
        self.is_staff = Some(true);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_defaults() {
        let account = Account::new(
            "johndoe".to_string(),
            "johndoe@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert_eq!(account.username, "johndoe");
        assert!(!account.is_staff);
        assert!(account.is_active);
        assert_eq!(account.created_at, account.updated_at);
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let account = Account::new(
            "johndoe".to_string(),
            "johndoe@example.com".to_string(),
            "$2b$04$secret-digest".to_string(),
        );

        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "johndoe");
    }

    #[test]
    fn test_new_account_flags_deserialize_as_optional() {
        let input: NewAccount = serde_json::from_str(
            r#"{"username":"jane","email":"jane@example.com","password":"pw"}"#,
        )
        .unwrap();

        assert_eq!(input.is_staff, None);
        assert_eq!(input.is_active, None);
        assert_eq!(NewAccount::new("a", "b", "c").staff().is_staff, Some(true));
    }
}
