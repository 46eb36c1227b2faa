//! Listing entity: an item offered for sale, owned by exactly one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sh_shared::validation::validators;
use uuid::Uuid;

use crate::errors::ValidationError;

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum description length in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Maximum contact info length in characters
pub const MAX_CONTACT_INFO_LENGTH: usize = 200;

/// Maximum postal code length in characters
pub const MAX_ZIP_CODE_LENGTH: usize = 20;

/// Lowest accepted price
pub const MIN_PRICE: f64 = 0.01;

/// Highest accepted price
pub const MAX_PRICE: f64 = 999_999.0;

/// Maximum number of image references per listing
pub const MAX_IMAGE_COUNT: usize = 5;

/// Lifecycle status of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Visible in public and owner views
    Active,
    /// Sold, still visible to its owner
    Sold,
    /// Soft deleted; only reachable by direct lookup
    Deleted,
}

impl ListingStatus {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Sold => "sold",
            ListingStatus::Deleted => "deleted",
        }
    }

    /// Whether `self -> next` is allowed. Nothing leaves `Deleted` except a
    /// repeated delete, which keeps the status unchanged.
    pub fn can_transition_to(&self, next: ListingStatus) -> bool {
        matches!(
            (self, next),
            (ListingStatus::Active, ListingStatus::Sold)
                | (ListingStatus::Active, ListingStatus::Deleted)
                | (ListingStatus::Sold, ListingStatus::Deleted)
                | (ListingStatus::Deleted, ListingStatus::Deleted)
        )
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ListingStatus::Active),
            "sold" => Ok(ListingStatus::Sold),
            "deleted" => Ok(ListingStatus::Deleted),
            other => Err(format!("Invalid listing status: {}", other)),
        }
    }
}

/// Listing entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    pub title: String,
    pub description: String,
    pub price: f64,
    pub contact_info: String,
    pub zip_code: String,
    pub negotiable: bool,
    pub image_urls: Vec<String>,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Creates a new listing for `owner_id`. The status always starts as `Active`.
    pub fn new(owner_id: Uuid, draft: NewListing) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: owner_id,
            title: draft.title,
            description: draft.description,
            price: draft.price,
            contact_info: draft.contact_info,
            zip_code: draft.zip_code,
            negotiable: draft.negotiable,
            image_urls: draft.image_urls,
            status: ListingStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Ownership check
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Moves to `next` if the lifecycle allows it. Returns whether it did.
    pub fn transition_to(&mut self, next: ListingStatus) -> bool {
        if !self.status.can_transition_to(next) {
            return false;
        }
        self.status = next;
        self.updated_at = Utc::now();
        true
    }
}

/// Fields supplied when creating a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub contact_info: String,
    pub zip_code: String,
    #[serde(default)]
    pub negotiable: bool,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl NewListing {
    /// Checks every field against its bounds, reporting the first violation
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        validate_price(self.price)?;
        validate_bounded("contact_info", &self.contact_info, MAX_CONTACT_INFO_LENGTH)?;
        validate_bounded("zip_code", &self.zip_code, MAX_ZIP_CODE_LENGTH)?;

        if self.image_urls.len() > MAX_IMAGE_COUNT {
            return Err(ValidationError::TooManyImages {
                max: MAX_IMAGE_COUNT,
            });
        }
        if self.image_urls.iter().any(|url| !validators::not_empty(url)) {
            return Err(ValidationError::RequiredField {
                field: "image_urls".to_string(),
            });
        }
        Ok(())
    }
}

/// The editable subset of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingEdit {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

impl ListingEdit {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        validate_price(self.price)
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    validate_bounded("title", title, MAX_TITLE_LENGTH)
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::InvalidLength {
            field: "description".to_string(),
            min: 0,
            max: MAX_DESCRIPTION_LENGTH,
        });
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !validators::in_range(price, MIN_PRICE, MAX_PRICE) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: MIN_PRICE.to_string(),
            max: MAX_PRICE.to_string(),
        });
    }
    Ok(())
}

fn validate_bounded(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    if !validators::not_empty(value) {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    if !validators::length_between(value, 1, max) {
        return Err(ValidationError::InvalidLength {
            field: field.to_string(),
            min: 1,
            max,
        });
    }
    Ok(())
}
