//! Shared wiring for the HTTP tests: real services over in-memory stores

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use sh_api::app::AppState;
use sh_core::repositories::{MockListingRepository, MockUserRepository};
use sh_core::services::{
    AuthService, AuthServiceConfig, ListingService, ListingServiceConfig, TokenService,
    TokenServiceConfig,
};
use sh_infra::security::BcryptPasswordHasher;

pub type TestState = AppState<MockUserRepository, MockListingRepository, BcryptPasswordHasher>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: MockUserRepository,
    pub listings: MockListingRepository,
    pub tokens: Arc<TokenService>,
}

pub fn context() -> TestContext {
    let users = MockUserRepository::new();
    let listings = MockListingRepository::new();
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()).unwrap());

    let auth_service = Arc::new(AuthService::new(
        Arc::new(users.clone()),
        Arc::new(BcryptPasswordHasher::new(4)),
        Arc::clone(&tokens),
        AuthServiceConfig::default(),
    ));
    let listing_service = Arc::new(ListingService::new(
        Arc::new(listings.clone()),
        Arc::new(users.clone()),
        ListingServiceConfig::default(),
    ));

    let state = web::Data::new(AppState {
        auth_service,
        listing_service,
        token_service: Arc::clone(&tokens),
        database: None,
    });

    TestContext {
        state,
        users,
        listings,
        tokens,
    }
}

impl TestContext {
    /// Register through the service and return `(user_id, bearer header value)`
    pub async fn signed_up(&self, username: &str) -> (Uuid, String) {
        let response = self
            .state
            .auth_service
            .register(username, &format!("{}@example.com", username), "secret123")
            .await
            .unwrap();
        (response.user.id, format!("Bearer {}", response.token))
    }
}

pub fn listing_body(title: &str, price: f64) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "barely used",
        "price": price,
        "contact_info": "555-0100",
        "zip_code": "94103",
        "negotiable": true,
        "image_urls": ["https://img.example.com/1.jpg"]
    })
}
