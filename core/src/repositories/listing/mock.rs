//! Mock implementation of ListingRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::listing::{Listing, ListingEdit, ListingStatus};
use crate::errors::DomainError;

use super::trait_::{ListingFilter, ListingRepository};

/// In-memory listing repository for tests
#[derive(Clone, Default)]
pub struct MockListingRepository {
    listings: Arc<RwLock<HashMap<Uuid, Listing>>>,
}

impl MockListingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a listing as-is, bypassing service rules (test setup)
    pub async fn insert(&self, listing: Listing) {
        self.listings.write().await.insert(listing.id, listing);
    }

    /// Total number of stored rows, deleted ones included
    pub async fn len(&self) -> usize {
        self.listings.read().await.len()
    }

    async fn matching(&self, filter: ListingFilter) -> Vec<Listing> {
        let listings = self.listings.read().await;
        let mut matching: Vec<Listing> = listings
            .values()
            .filter(|listing| filter.matches(listing))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        matching
    }
}

#[async_trait]
impl ListingRepository for MockListingRepository {
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        let mut listings = self.listings.write().await;
        if listings.contains_key(&listing.id) {
            return Err(DomainError::Conflict {
                message: "Listing already exists".to_string(),
            });
        }
        listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError> {
        Ok(self.listings.read().await.get(&id).cloned())
    }

    async fn find_page(
        &self,
        filter: ListingFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Listing>, DomainError> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(self
            .matching(filter)
            .await
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    async fn count(&self, filter: ListingFilter) -> Result<u64, DomainError> {
        let listings = self.listings.read().await;
        Ok(listings.values().filter(|listing| filter.matches(listing)).count() as u64)
    }

    async fn update_details(
        &self,
        id: Uuid,
        edit: &ListingEdit,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Listing>, DomainError> {
        let mut listings = self.listings.write().await;
        Ok(listings.get_mut(&id).map(|listing| {
            listing.title = edit.title.clone();
            listing.description = edit.description.clone();
            listing.price = edit.price;
            listing.updated_at = updated_at;
            listing.clone()
        }))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ListingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let mut listings = self.listings.write().await;
        match listings.get_mut(&id) {
            Some(listing) => {
                listing.status = status;
                listing.updated_at = updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
