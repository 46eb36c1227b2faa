//! Main listing service implementation

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use sh_shared::types::{PaginatedResponse, Pagination};
use uuid::Uuid;

use crate::domain::entities::listing::{Listing, ListingEdit, ListingStatus, NewListing};
use crate::domain::entities::user::UserProfile;
use crate::domain::value_objects::{ListingDetails, ListingPage};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{ListingFilter, ListingRepository, UserRepository};

use super::config::ListingServiceConfig;

const LISTING_RESOURCE: &str = "Post";

/// Service managing the listing lifecycle
///
/// Every mutating operation takes the caller's identity as an explicit
/// parameter; ownership is checked against the stored record.
pub struct ListingService<L, U>
where
    L: ListingRepository,
    U: UserRepository,
{
    /// Listing storage
    listing_repository: Arc<L>,
    /// Credential store, used to populate owners
    user_repository: Arc<U>,
    config: ListingServiceConfig,
}

impl<L, U> ListingService<L, U>
where
    L: ListingRepository,
    U: UserRepository,
{
    /// Create a new listing service
    pub fn new(
        listing_repository: Arc<L>,
        user_repository: Arc<U>,
        config: ListingServiceConfig,
    ) -> Self {
        Self {
            listing_repository,
            user_repository,
            config,
        }
    }

    /// Active listings, newest first
    ///
    /// A `page` below 1 becomes 1 and a `page_size` below 1 becomes the
    /// configured default (8).
    pub async fn list(&self, page: i64, page_size: i64) -> DomainResult<ListingPage> {
        let pagination = Pagination::resolve(page, page_size, self.config.default_page_size);
        self.page(ListingFilter::Active, pagination).await
    }

    /// A single listing by id, whatever its status
    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<ListingDetails> {
        let listing = self.find_listing(id).await?;
        self.with_owner(listing).await
    }

    /// The caller's listings except deleted ones, newest first
    ///
    /// A `page_size` below 1 becomes the configured default (6).
    pub async fn list_mine(
        &self,
        owner_id: Uuid,
        page: i64,
        page_size: i64,
    ) -> DomainResult<ListingPage> {
        let pagination = Pagination::resolve(page, page_size, self.config.my_listings_page_size);
        self.page(ListingFilter::OwnedBy(owner_id), pagination).await
    }

    /// Create an active listing owned by `owner_id`
    pub async fn create(&self, owner_id: Uuid, draft: NewListing) -> DomainResult<ListingDetails> {
        draft.validate()?;

        let owner = self
            .user_repository
            .find_by_id(owner_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let listing = self
            .listing_repository
            .create(Listing::new(owner_id, draft))
            .await?;
        tracing::info!(listing_id = %listing.id, owner_id = %owner_id, "listing created");

        Ok(ListingDetails::new(listing, owner.profile()))
    }

    /// Overwrite title, description and price of a listing the caller owns
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::NotFound)` - No listing with this id
    /// * `Err(DomainError::Forbidden)` - The caller is not the owner
    pub async fn update(
        &self,
        requester_id: Uuid,
        id: Uuid,
        edit: ListingEdit,
    ) -> DomainResult<ListingDetails> {
        edit.validate()?;

        let listing = self.find_listing(id).await?;
        if !listing.is_owned_by(requester_id) {
            tracing::warn!(listing_id = %id, requester_id = %requester_id, "update rejected: not owner");
            return Err(DomainError::Forbidden {
                message: "You can only edit your own posts".to_string(),
            });
        }

        let updated = self
            .listing_repository
            .update_details(id, &edit, Utc::now())
            .await?
            .ok_or_else(not_found)?;
        tracing::info!(listing_id = %id, "listing updated");

        self.with_owner(updated).await
    }

    /// Soft delete a listing the caller owns
    ///
    /// The record stays in storage with status `deleted`.
    pub async fn delete(&self, requester_id: Uuid, id: Uuid) -> DomainResult<()> {
        let mut listing = self.find_listing(id).await?;
        if !listing.is_owned_by(requester_id) {
            tracing::warn!(listing_id = %id, requester_id = %requester_id, "delete rejected: not owner");
            return Err(DomainError::Forbidden {
                message: "You can only delete your own posts".to_string(),
            });
        }
        let previous = listing.status;
        if !listing.transition_to(ListingStatus::Deleted) {
            return Err(DomainError::Validation {
                message: format!("Cannot delete a post with status {}", previous),
            });
        }

        let updated = self
            .listing_repository
            .update_status(id, listing.status, listing.updated_at)
            .await?;
        if !updated {
            return Err(not_found());
        }
        tracing::info!(listing_id = %id, "listing soft deleted");

        Ok(())
    }

    async fn find_listing(&self, id: Uuid) -> DomainResult<Listing> {
        self.listing_repository
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    async fn page(&self, filter: ListingFilter, pagination: Pagination) -> DomainResult<ListingPage> {
        let total_count = self.listing_repository.count(filter).await?;
        let listings = self
            .listing_repository
            .find_page(filter, pagination.offset(), pagination.limit())
            .await?;

        let items = self.with_owners(listings).await?;
        Ok(PaginatedResponse::new(items, pagination, total_count))
    }

    async fn with_owner(&self, listing: Listing) -> DomainResult<ListingDetails> {
        let mut details = self.with_owners(vec![listing]).await?;
        details.pop().ok_or_else(|| DomainError::internal("listing lost while loading owner"))
    }

    /// Attach owner profiles with one batched lookup
    async fn with_owners(&self, listings: Vec<Listing>) -> DomainResult<Vec<ListingDetails>> {
        if listings.is_empty() {
            return Ok(Vec::new());
        }

        let mut owner_ids: Vec<Uuid> = listings.iter().map(|listing| listing.user_id).collect();
        owner_ids.sort_unstable();
        owner_ids.dedup();

        let owners: HashMap<Uuid, UserProfile> = self
            .user_repository
            .find_by_ids(&owner_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.profile()))
            .collect();

        listings
            .into_iter()
            .map(|listing| -> DomainResult<ListingDetails> {
                let owner = owners.get(&listing.user_id).cloned().ok_or_else(|| {
                    tracing::error!(listing_id = %listing.id, owner_id = %listing.user_id, "listing owner missing");
                    DomainError::internal(format!("owner {} missing for listing {}", listing.user_id, listing.id))
                })?;
                Ok(ListingDetails::new(listing, owner))
            })
            .collect()
    }
}

fn not_found() -> DomainError {
    DomainError::NotFound {
        resource: LISTING_RESOURCE.to_string(),
    }
}
