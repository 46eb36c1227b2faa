//! HTTP tests for the listing endpoints

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use uuid::Uuid;

use sh_api::app::{create_app, HttpSettings};
use sh_core::domain::entities::listing::{Listing, ListingStatus, NewListing};

fn new_listing(title: &str) -> NewListing {
    NewListing {
        title: title.to_string(),
        description: String::new(),
        price: 10.0,
        contact_info: "555-0100".to_string(),
        zip_code: "94103".to_string(),
        negotiable: false,
        image_urls: Vec::new(),
    }
}

#[actix_web::test]
async fn test_bike_listing_lifecycle_over_http() {
    let ctx = common::context();
    let (alice_id, alice) = ctx.signed_up("alice").await;
    let (_, bob) = ctx.signed_up("bob").await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    // Alice lists a bike
    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .insert_header(("Authorization", alice.clone()))
        .set_json(common::listing_body("Bike", 120.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let bike_id = created["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["data"]["status"], "active");
    assert_eq!(created["data"]["user_id"], alice_id.to_string());
    assert_eq!(created["data"]["user"]["username"], "alice");

    // Bob sees it in the public list
    let req = test::TestRequest::get()
        .uri("/api/v1/posts")
        .insert_header(("Authorization", bob.clone()))
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["data"]["total_count"], 1);
    assert_eq!(page["data"]["items"][0]["title"], "Bike");

    // Bob cannot edit it
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/posts/{}", bike_id))
        .insert_header(("Authorization", bob.clone()))
        .set_json(json!({ "title": "Mine now", "description": "", "price": 1.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "You can only edit your own posts");

    // Bob cannot delete it
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/posts/{}", bike_id))
        .insert_header(("Authorization", bob.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Alice drops the price
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/posts/{}", bike_id))
        .insert_header(("Authorization", alice.clone()))
        .set_json(json!({ "title": "Bike", "description": "price drop", "price": 100.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post updated successfully");
    assert_eq!(body["data"]["price"], 100.0);
    assert_eq!(body["data"]["zip_code"], "94103");

    // Alice deletes it
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/posts/{}", bike_id))
        .insert_header(("Authorization", alice.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post deleted successfully");

    // Gone from both views
    let req = test::TestRequest::get()
        .uri("/api/v1/posts")
        .insert_header(("Authorization", bob.clone()))
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["data"]["total_count"], 0);

    let req = test::TestRequest::get()
        .uri("/api/v1/my-listings")
        .insert_header(("Authorization", alice.clone()))
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["data"]["total_count"], 0);

    // Still reachable by id
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/posts/{}", bike_id))
        .insert_header(("Authorization", bob))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "deleted");
    assert_eq!(ctx.listings.len().await, 1);
}

#[actix_web::test]
async fn test_invalid_paging_falls_back_to_defaults() {
    let ctx = common::context();
    let (owner_id, bearer) = ctx.signed_up("alice").await;
    for i in 0..10 {
        ctx.listings
            .insert(Listing::new(owner_id, new_listing(&format!("item {}", i))))
            .await;
    }
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/posts?page=abc&page_size=-3")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["page_size"], 8);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 8);
    assert_eq!(body["data"]["total_pages"], 2);

    let req = test::TestRequest::get()
        .uri("/api/v1/my-listings?page=2")
        .insert_header(("Authorization", bearer))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["page"], 2);
    assert_eq!(body["data"]["page_size"], 6);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_my_listings_includes_sold_excludes_deleted() {
    let ctx = common::context();
    let (owner_id, bearer) = ctx.signed_up("alice").await;
    for status in [ListingStatus::Active, ListingStatus::Sold, ListingStatus::Deleted] {
        let mut listing = Listing::new(owner_id, new_listing(status.as_str()));
        listing.status = status;
        ctx.listings.insert(listing).await;
    }
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/my-listings")
        .insert_header(("Authorization", bearer))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["total_count"], 2);
    let statuses: Vec<&str> = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["status"].as_str().unwrap())
        .collect();
    assert!(!statuses.contains(&"deleted"));
}

#[actix_web::test]
async fn test_malformed_id_is_bad_request() {
    let ctx = common::context();
    let (_, bearer) = ctx.signed_up("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/posts/not-a-uuid")
        .insert_header(("Authorization", bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid post ID");
}

#[actix_web::test]
async fn test_unknown_id_is_not_found() {
    let ctx = common::context();
    let (_, bearer) = ctx.signed_up("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    for req in [
        test::TestRequest::get(),
        test::TestRequest::delete(),
    ] {
        let req = req
            .uri(&format!("/api/v1/posts/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Post not found");
    }
}

#[actix_web::test]
async fn test_create_rejects_invalid_price() {
    let ctx = common::context();
    let (_, bearer) = ctx.signed_up("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .insert_header(("Authorization", bearer))
        .set_json(common::listing_body("Bike", -1.0))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.listings.len().await, 0);
}

#[actix_web::test]
async fn test_unknown_route_is_enveloped_not_found() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::get().uri("/api/v1/nothing-here").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
}
