pub mod listing;
pub mod user;

pub use listing::{ListingFilter, ListingRepository};
pub use user::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use listing::MockListingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user::MockUserRepository;
