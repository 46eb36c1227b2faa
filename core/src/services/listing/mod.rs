//! Listing service module
//!
//! Paginated retrieval, creation, and owner-only mutation of listings.
//! Deletion is soft: the row stays and its status becomes `deleted`.

mod config;
mod service;


pub use config::ListingServiceConfig;
pub use service::ListingService;
