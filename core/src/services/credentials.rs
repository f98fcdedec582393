//! Password hashing and verification

use crate::errors::{DomainError, DomainResult};

/// One-way password hashing
pub trait CredentialVerifier: Send + Sync {
    /// Hash a plaintext password into a salted digest
    fn hash(&self, plaintext: &str) -> DomainResult<String>;

    /// True iff `plaintext` matches `digest`; a malformed digest is a mismatch
    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}

/// bcrypt-backed verifier
#[derive(Debug, Clone, Copy)]
pub struct BcryptVerifier {
    cost: u32,
}

impl BcryptVerifier {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptVerifier {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl CredentialVerifier for BcryptVerifier {
    fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }
}
