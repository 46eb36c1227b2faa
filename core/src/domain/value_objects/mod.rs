//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod listing_details;

// Re-export commonly used types
pub use auth_response::AuthResponse;
pub use listing_details::{ListingDetails, ListingPage};
