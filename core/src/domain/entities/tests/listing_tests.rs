//! Unit tests for listing entity

use uuid::Uuid;

use crate::domain::entities::listing::*;
use crate::errors::ValidationError;

fn draft() -> NewListing {
    NewListing {
        title: "Bike".to_string(),
        description: "Road bike, barely used".to_string(),
        price: 50.0,
        contact_info: "555-0100".to_string(),
        zip_code: "94110".to_string(),
        negotiable: true,
        image_urls: vec!["https://cdn.example.com/bike.jpg".to_string()],
    }
}

#[test]
fn test_new_listing_is_active() {
    let owner = Uuid::new_v4();
    let listing = Listing::new(owner, draft());

    assert_eq!(listing.status, ListingStatus::Active);
    assert!(listing.is_owned_by(owner));
    assert!(!listing.is_owned_by(Uuid::new_v4()));
}

#[test]
fn test_status_transitions() {
    use ListingStatus::*;

    assert!(Active.can_transition_to(Sold));
    assert!(Active.can_transition_to(Deleted));
    assert!(Sold.can_transition_to(Deleted));
    assert!(Deleted.can_transition_to(Deleted));

    assert!(!Deleted.can_transition_to(Active));
    assert!(!Deleted.can_transition_to(Sold));
    assert!(!Sold.can_transition_to(Active));
}

#[test]
fn test_deleted_listing_cannot_be_revived() {
    let mut listing = Listing::new(Uuid::new_v4(), draft());

    let created_at = listing.updated_at;

    assert!(listing.transition_to(ListingStatus::Deleted));
    assert!(listing.updated_at >= created_at);
    assert!(!listing.transition_to(ListingStatus::Active));
    assert!(listing.transition_to(ListingStatus::Deleted));
    assert_eq!(listing.status, ListingStatus::Deleted);
}

#[test]
fn test_draft_validation() {
    assert!(draft().validate().is_ok());

    let mut blank_title = draft();
    blank_title.title = "   ".to_string();
    assert!(matches!(
        blank_title.validate(),
        Err(ValidationError::RequiredField { ref field }) if field == "title"
    ));

    let mut long_title = draft();
    long_title.title = "x".repeat(MAX_TITLE_LENGTH + 1);
    assert!(matches!(long_title.validate(), Err(ValidationError::InvalidLength { .. })));

    let mut free = draft();
    free.price = 0.0;
    assert!(matches!(free.validate(), Err(ValidationError::OutOfRange { .. })));

    let mut too_expensive = draft();
    too_expensive.price = MAX_PRICE + 1.0;
    assert!(too_expensive.validate().is_err());

    let mut too_many_images = draft();
    too_many_images.image_urls = vec!["https://cdn.example.com/a.jpg".to_string(); MAX_IMAGE_COUNT + 1];
    assert!(matches!(
        too_many_images.validate(),
        Err(ValidationError::TooManyImages { max: MAX_IMAGE_COUNT })
    ));

    let mut no_contact = draft();
    no_contact.contact_info = String::new();
    assert!(no_contact.validate().is_err());
}

#[test]
fn test_edit_validation() {
    let edit = ListingEdit {
        title: "Bike".to_string(),
        description: String::new(),
        price: 0.01,
    };
    assert!(edit.validate().is_ok());

    let negative = ListingEdit { price: -5.0, ..edit.clone() };
    assert!(negative.validate().is_err());

    let long_description = ListingEdit {
        description: "d".repeat(MAX_DESCRIPTION_LENGTH + 1),
        ..edit
    };
    assert!(long_description.validate().is_err());
}

#[test]
fn test_status_serialization() {
    assert_eq!(serde_json::to_string(&ListingStatus::Deleted).unwrap(), "\"deleted\"");
    assert_eq!("sold".parse::<ListingStatus>().unwrap(), ListingStatus::Sold);
    assert!("archived".parse::<ListingStatus>().is_err());
}
