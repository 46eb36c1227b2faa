//! Business services containing domain logic and use cases.

pub mod auth;
pub mod listing;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, PasswordHasher};
pub use listing::{ListingService, ListingServiceConfig};
pub use token::{TokenService, TokenServiceConfig};
