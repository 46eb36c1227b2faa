//! PostgreSQL implementation of the ListingRepository trait.
//!
//! Listings live in the `posts` table. Status is stored as text and image
//! references as a `TEXT[]` column. Rows are never deleted here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use sh_core::domain::entities::listing::{Listing, ListingEdit, ListingStatus};
use sh_core::errors::DomainError;
use sh_core::repositories::{ListingFilter, ListingRepository};

use super::{column_failed, query_failed};

const LISTING_COLUMNS: &str = "id, user_id, title, description, price, contact_info, zip_code, \
                               negotiable, image_urls, status, created_at, updated_at";

/// PostgreSQL implementation of ListingRepository
#[derive(Clone)]
pub struct PgListingRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgListingRepository {
    /// Create a new PostgreSQL listing repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Listing entity
    fn row_to_listing(row: &PgRow) -> Result<Listing, DomainError> {
        let status: String = row.try_get("status").map_err(|e| column_failed("status", e))?;

        Ok(Listing {
            id: row.try_get("id").map_err(|e| column_failed("id", e))?,
            user_id: row.try_get("user_id").map_err(|e| column_failed("user_id", e))?,
            title: row.try_get("title").map_err(|e| column_failed("title", e))?,
            description: row
                .try_get("description")
                .map_err(|e| column_failed("description", e))?,
            price: row.try_get("price").map_err(|e| column_failed("price", e))?,
            contact_info: row
                .try_get("contact_info")
                .map_err(|e| column_failed("contact_info", e))?,
            zip_code: row.try_get("zip_code").map_err(|e| column_failed("zip_code", e))?,
            negotiable: row
                .try_get("negotiable")
                .map_err(|e| column_failed("negotiable", e))?,
            image_urls: row
                .try_get::<Vec<String>, _>("image_urls")
                .map_err(|e| column_failed("image_urls", e))?,
            status: status
                .parse::<ListingStatus>()
                .map_err(DomainError::internal)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_failed("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column_failed("updated_at", e))?,
        })
    }
}

/// `WHERE` clause for a filter; `$1` is the owner id when present
fn filter_clause(filter: &ListingFilter) -> &'static str {
    match filter {
        ListingFilter::Active => "status = 'active'",
        ListingFilter::OwnedBy(_) => "user_id = $1 AND status <> 'deleted'",
    }
}

fn to_sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl ListingRepository for PgListingRepository {
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        let query = format!(
            r#"
            INSERT INTO posts (
                id, user_id, title, description, price, contact_info, zip_code,
                negotiable, image_urls, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            LISTING_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(listing.id)
            .bind(listing.user_id)
            .bind(&listing.title)
            .bind(&listing.description)
            .bind(listing.price)
            .bind(&listing.contact_info)
            .bind(&listing.zip_code)
            .bind(listing.negotiable)
            .bind(&listing.image_urls)
            .bind(listing.status.as_str())
            .bind(listing.created_at)
            .bind(listing.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to create listing", e))?;

        Self::row_to_listing(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError> {
        let query = format!("SELECT {} FROM posts WHERE id = $1", LISTING_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find listing by id", e))?;

        result.as_ref().map(Self::row_to_listing).transpose()
    }

    async fn find_page(
        &self,
        filter: ListingFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Listing>, DomainError> {
        let rows = match filter {
            ListingFilter::Active => {
                let query = format!(
                    "SELECT {} FROM posts WHERE {} ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
                    LISTING_COLUMNS,
                    filter_clause(&filter)
                );
                sqlx::query(&query)
                    .bind(to_sql_bound(limit))
                    .bind(to_sql_bound(offset))
                    .fetch_all(&self.pool)
                    .await
            }
            ListingFilter::OwnedBy(owner_id) => {
                let query = format!(
                    "SELECT {} FROM posts WHERE {} ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3",
                    LISTING_COLUMNS,
                    filter_clause(&filter)
                );
                sqlx::query(&query)
                    .bind(owner_id)
                    .bind(to_sql_bound(limit))
                    .bind(to_sql_bound(offset))
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| query_failed("Failed to load listing page", e))?;

        rows.iter().map(Self::row_to_listing).collect()
    }

    async fn count(&self, filter: ListingFilter) -> Result<u64, DomainError> {
        let query = format!("SELECT COUNT(*) AS total FROM posts WHERE {}", filter_clause(&filter));

        let mut statement = sqlx::query(&query);
        if let ListingFilter::OwnedBy(owner_id) = filter {
            statement = statement.bind(owner_id);
        }
        let row = statement
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to count listings", e))?;

        let total: i64 = row.try_get("total").map_err(|e| column_failed("total", e))?;
        u64::try_from(total).map_err(|e| DomainError::internal(format!("Negative listing count: {}", e)))
    }

    async fn update_details(
        &self,
        id: Uuid,
        edit: &ListingEdit,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Listing>, DomainError> {
        let query = format!(
            r#"
            UPDATE posts
            SET title = $1, description = $2, price = $3, updated_at = $4
            WHERE id = $5
            RETURNING {}
            "#,
            LISTING_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(&edit.title)
            .bind(&edit.description)
            .bind(edit.price)
            .bind(updated_at)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to update listing", e))?;

        result.as_ref().map(Self::row_to_listing).transpose()
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ListingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE posts SET status = $1, updated_at = $2 WHERE id = $3")
            .bind(status.as_str())
            .bind(updated_at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to update listing status", e))?;

        Ok(result.rows_affected() > 0)
    }
}
