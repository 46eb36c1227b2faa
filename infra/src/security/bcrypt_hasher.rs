//! bcrypt implementation of the `PasswordHasher` seam.
//!
//! bcrypt is CPU bound, so both directions run on the blocking pool.

use async_trait::async_trait;

use sh_core::errors::{AuthError, DomainError};
use sh_core::services::PasswordHasher;

/// Password hasher backed by bcrypt
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the given work factor (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| {
                tracing::error!("Password hashing task failed: {}", e);
                DomainError::from(AuthError::PasswordHashingFailed)
            })?
            .map_err(|e| {
                tracing::error!("Password hashing failed: {}", e);
                AuthError::PasswordHashingFailed.into()
            })
    }

    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError> {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();

        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
            .await
            .map_err(|e| {
                tracing::error!("Password verification task failed: {}", e);
                DomainError::from(AuthError::PasswordHashingFailed)
            })?;

        // A malformed stored hash can never match
        match outcome {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!("Stored password hash could not be verified: {}", e);
                Ok(false)
            }
        }
    }
}
