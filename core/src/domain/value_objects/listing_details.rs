//! A listing with its owner populated.

use serde::{Deserialize, Serialize};
use sh_shared::types::PaginatedResponse;

use crate::domain::entities::listing::Listing;
use crate::domain::entities::user::UserProfile;

/// Listing as returned by the listing service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDetails {
    #[serde(flatten)]
    pub listing: Listing,

    /// Owner of the listing
    pub user: UserProfile,
}

impl ListingDetails {
    pub fn new(listing: Listing, user: UserProfile) -> Self {
        Self { listing, user }
    }
}

/// One page of listings
pub type ListingPage = PaginatedResponse<ListingDetails>;
