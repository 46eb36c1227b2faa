//! Configuration for the listing service

use sh_shared::config::PaginationConfig;

/// Configuration for the listing service
#[derive(Debug, Clone, Copy)]
pub struct ListingServiceConfig {
    /// Page size for the public listing view when none is requested
    pub default_page_size: u32,
    /// Page size for the caller's own listings when none is requested
    pub my_listings_page_size: u32,
}

impl Default for ListingServiceConfig {
    fn default() -> Self {
        Self {
            default_page_size: 8,
            my_listings_page_size: 6,
        }
    }
}

impl From<PaginationConfig> for ListingServiceConfig {
    fn from(config: PaginationConfig) -> Self {
        Self {
            default_page_size: config.default_page_size,
            my_listings_page_size: config.my_listings_page_size,
        }
    }
}
