//! Domain entities representing core business objects.

pub mod listing;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use listing::{
    Listing, ListingEdit, ListingStatus, NewListing, MAX_CONTACT_INFO_LENGTH,
    MAX_DESCRIPTION_LENGTH, MAX_IMAGE_COUNT, MAX_PRICE, MAX_TITLE_LENGTH, MAX_ZIP_CODE_LENGTH,
    MIN_PRICE,
};
pub use token::{Claims, JWT_ISSUER, TOKEN_EXPIRY_HOURS};
pub use user::{
    User, UserProfile, MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH,
};
