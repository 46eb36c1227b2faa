//! User repository trait defining the interface for credential storage.
//!
//! The trait is async-first and every method reports store failures as
//! `DomainError` so services never see driver-specific errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Username and email are unique across all users. Implementations must
/// reject a duplicate on `create` with `DomainError::Auth(AuthError::UserAlreadyExists)`
/// even when the caller checked beforehand, since two registrations can race.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with this id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by normalized email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Fetch every user whose id is in `ids`; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError>;

    /// Check whether the email is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether the username is already taken
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Persist a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
