// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// `Ok(false)` means the password does not match; errors are reserved for
    /// unreadable hashes and executor failures.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}
