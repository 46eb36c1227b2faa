pub mod auth;
pub mod listing;

pub use auth::*;
pub use listing::*;
