//! Password hashing seam

use async_trait::async_trait;

use crate::errors::DomainError;

/// One-way password hashing
///
/// Implementations are expected to be slow on purpose and should keep that
/// work off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    async fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plaintext password against a stored hash
    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError>;
}
