//! Unit tests for the user directory

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::entities::account::NewAccount;
use crate::errors::{AuthError, DomainError, DomainResult, ErrorKind};
use crate::repositories::InMemoryUserRepository;
use crate::services::credentials::{BcryptVerifier, CredentialVerifier};
use crate::services::directory::UserDirectory;

fn create_directory() -> UserDirectory<InMemoryUserRepository> {
    UserDirectory::new(
        Arc::new(InMemoryUserRepository::new()),
        BcryptVerifier::new(4),
    )
    .unwrap()
}

/// Counts verifications so the unknown-user path can be observed
struct CountingVerifier {
    inner: BcryptVerifier,
    verifications: Arc<AtomicUsize>,
}

impl CredentialVerifier for CountingVerifier {
    fn hash(&self, plaintext: &str) -> DomainResult<String> {
        self.inner.hash(plaintext)
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        self.inner.verify(plaintext, digest)
    }
}

#[tokio::test]
async fn test_create_then_authenticate() {
    let directory = create_directory();

    let account = directory
        .create("johndoe", "john@example.com", "password123")
        .await
        .unwrap();
    assert!(!account.is_staff);
    assert!(account.is_active);
    assert_ne!(account.password_hash, "password123");

    let authenticated = directory.authenticate("johndoe", "password123").await.unwrap();
    assert_eq!(authenticated.id, account.id);

    let found = directory.find_by_username("johndoe").await.unwrap().unwrap();
    assert_eq!(found.id, account.id);
    assert_eq!(directory.find_by_id(account.id).await.unwrap().unwrap(), found);
}

#[tokio::test]
async fn test_duplicate_username_with_any_email() {
    let directory = create_directory();
    directory.create("johndoe", "john@example.com", "pw").await.unwrap();

    let err = directory
        .create("johndoe", "other@example.com", "pw")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateUsername);
}

#[tokio::test]
async fn test_duplicate_email_with_new_username() {
    let directory = create_directory();
    directory.create("johndoe", "john@example.com", "pw").await.unwrap();

    let err = directory
        .create("janedoe", "john@example.com", "pw")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::Auth(AuthError::DuplicateEmail {
            email: "john@example.com".to_string()
        })
    );
}

#[tokio::test]
async fn test_username_collision_wins_over_email() {
    let directory = create_directory();
    directory.create("johndoe", "john@example.com", "pw").await.unwrap();

    let err = directory
        .create("johndoe", "john@example.com", "pw")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateUsername);
}

#[tokio::test]
async fn test_create_with_flags() {
    let directory = create_directory();

    let staff = directory
        .create_with(NewAccount::new("boss", "boss@example.com", "pw").staff())
        .await
        .unwrap();
    assert!(staff.is_staff);
    assert!(staff.is_active);

    let mut dormant = NewAccount::new("sleepy", "sleepy@example.com", "pw");
    dormant.is_active = Some(false);
    let dormant = directory.create_with(dormant).await.unwrap();
    assert!(!dormant.is_staff);
    assert!(!dormant.is_active);
}

#[tokio::test]
async fn test_authentication_failures_are_indistinguishable() {
    let directory = create_directory();
    directory.create("johndoe", "john@example.com", "password123").await.unwrap();
    let mut inactive = NewAccount::new("ghost", "ghost@example.com", "password123");
    inactive.is_active = Some(false);
    directory.create_with(inactive).await.unwrap();

    let wrong_password = directory.authenticate("johndoe", "nope").await.unwrap_err();
    let unknown_user = directory.authenticate("nobody", "password123").await.unwrap_err();
    let inactive_user = directory.authenticate("ghost", "password123").await.unwrap_err();

    let expected = DomainError::Auth(AuthError::InvalidCredentials);
    assert_eq!(wrong_password, expected);
    assert_eq!(unknown_user, expected);
    assert_eq!(inactive_user, expected);
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test]
async fn test_unknown_user_still_verifies_once() {
    let verifications = Arc::new(AtomicUsize::new(0));
    let verifier = CountingVerifier {
        inner: BcryptVerifier::new(4),
        verifications: Arc::clone(&verifications),
    };
    let directory = UserDirectory::new(Arc::new(InMemoryUserRepository::new()), verifier).unwrap();

    let _ = directory.authenticate("nobody", "whatever").await;
    assert_eq!(verifications.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sign_ups_only_one_wins() {
    let directory = Arc::new(create_directory());

    let mut handles = Vec::new();
    for i in 0..8 {
        let directory = Arc::clone(&directory);
        handles.push(tokio::spawn(async move {
            directory
                .create("racer", &format!("racer{}@example.com", i), "pw")
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(err) => assert_eq!(err.kind(), ErrorKind::DuplicateUsername),
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(directory.repository().len().await, 1);
}
