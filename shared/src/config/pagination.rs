//! Default page sizes for the listing views

use serde::{Deserialize, Serialize};

use super::env_or;

/// Page sizes applied when a request omits `page_size` or sends a value below 1
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Public listing view
    pub default_page_size: u32,

    /// The caller's own listings
    pub my_listings_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 8,
            my_listings_page_size: 6,
        }
    }
}

impl PaginationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            default_page_size: env_or("DEFAULT_PAGE_SIZE", 8),
            my_listings_page_size: env_or("DEFAULT_MY_LISTINGS_PAGE_SIZE", 6),
        }
    }
}
