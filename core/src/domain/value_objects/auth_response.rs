//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::{User, UserProfile};

/// Returned after a successful registration or login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Signed identity token
    pub token: String,

    /// The authenticated user, without credentials
    pub user: UserProfile,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(token: String, user: &User) -> Self {
        Self {
            token,
            user: user.profile(),
        }
    }
}
