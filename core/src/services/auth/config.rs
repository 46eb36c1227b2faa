//! Configuration for the authentication service

use crate::domain::entities::user::{MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH};

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Shortest accepted password, in characters
    pub min_password_length: usize,
    /// Longest accepted password, in characters
    pub max_password_length: usize,
    /// Longest accepted username, in characters
    pub max_username_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            min_password_length: MIN_PASSWORD_LENGTH,
            max_password_length: MAX_PASSWORD_LENGTH,
            max_username_length: MAX_USERNAME_LENGTH,
        }
    }
}
