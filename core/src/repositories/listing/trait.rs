//! Listing repository trait defining the interface for listing persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::listing::{Listing, ListingEdit, ListingStatus};
use crate::errors::DomainError;

/// Which listings a paged query covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingFilter {
    /// Public view: `active` listings only
    Active,
    /// Owner view: everything the user owns except `deleted`
    OwnedBy(Uuid),
}

impl ListingFilter {
    /// Whether `listing` belongs to the result set of this filter
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            ListingFilter::Active => listing.status == ListingStatus::Active,
            ListingFilter::OwnedBy(owner_id) => {
                listing.user_id == *owner_id && listing.status != ListingStatus::Deleted
            }
        }
    }
}

/// Repository trait for Listing persistence operations
///
/// Paged queries order by `created_at` descending, then `id` descending.
/// Listings are never physically removed; deletion is a status change.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Persist a new listing
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// Find a listing by id regardless of its status
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError>;

    /// One page of listings matching `filter`, newest first
    async fn find_page(
        &self,
        filter: ListingFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Listing>, DomainError>;

    /// Number of listings matching `filter`
    async fn count(&self, filter: ListingFilter) -> Result<u64, DomainError>;

    /// Overwrite title, description and price only
    ///
    /// # Returns
    /// * `Ok(Some(Listing))` - The refreshed record
    /// * `Ok(None)` - No listing with this id
    async fn update_details(
        &self,
        id: Uuid,
        edit: &ListingEdit,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Listing>, DomainError>;

    /// Set the status column only. Returns `false` when no row matched.
    async fn update_status(
        &self,
        id: Uuid,
        status: ListingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError>;
}
