//! Request bodies and query strings for the listing endpoints

use serde::{Deserialize, Serialize};
use sh_core::domain::entities::listing::{ListingEdit, NewListing};
use validator::Validate;

/// `?page=&page_size=`; values that are absent or not integers read as 0,
/// which the service resolves to its defaults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        lenient_number(self.page.as_deref())
    }

    pub fn page_size(&self) -> i64 {
        lenient_number(self.page_size.as_deref())
    }
}

fn lenient_number(value: Option<&str>) -> i64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateListingRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: String,
    #[validate(range(min = 0.01, max = 999999.0, message = "Price must be between 0.01 and 999999"))]
    pub price: f64,
    #[validate(length(min = 1, max = 200, message = "Contact info must be between 1 and 200 characters"))]
    pub contact_info: String,
    #[validate(length(min = 1, max = 20, message = "Zip code must be between 1 and 20 characters"))]
    pub zip_code: String,
    #[serde(default)]
    pub negotiable: bool,
    #[serde(default)]
    #[validate(length(max = 5, message = "At most 5 images are allowed"))]
    pub image_urls: Vec<String>,
}

impl From<CreateListingRequest> for NewListing {
    fn from(request: CreateListingRequest) -> Self {
        NewListing {
            title: request.title,
            description: request.description,
            price: request.price,
            contact_info: request.contact_info,
            zip_code: request.zip_code,
            negotiable: request.negotiable,
            image_urls: request.image_urls,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateListingRequest {
    #[validate(length(min = 1, max = 200, message = "Title and valid price are required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: String,
    #[validate(range(min = 0.01, max = 999999.0, message = "Title and valid price are required"))]
    pub price: f64,
}

impl From<UpdateListingRequest> for ListingEdit {
    fn from(request: UpdateListingRequest) -> Self {
        ListingEdit {
            title: request.title,
            description: request.description,
            price: request.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_is_lenient() {
        let query = PageQuery {
            page: Some("abc".to_string()),
            page_size: Some(" 12 ".to_string()),
        };
        assert_eq!(query.page(), 0);
        assert_eq!(query.page_size(), 12);
        assert_eq!(PageQuery::default().page(), 0);
    }

    #[test]
    fn test_update_request_rejects_zero_price() {
        let request = UpdateListingRequest {
            title: "Bike".to_string(),
            description: String::new(),
            price: 0.0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_six_images() {
        let request = CreateListingRequest {
            title: "Bike".to_string(),
            description: String::new(),
            price: 10.0,
            contact_info: "555-0100".to_string(),
            zip_code: "94103".to_string(),
            negotiable: false,
            image_urls: vec!["https://img.example.com/a.jpg".to_string(); 6],
        };
        assert!(request.validate().is_err());
    }
}
