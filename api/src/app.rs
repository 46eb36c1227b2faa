//! Application state and factory
//!
//! This module holds the shared service handles and builds the Actix-web
//! application: middleware, extractor error handlers and the route table.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App};
use sh_core::repositories::{ListingRepository, UserRepository};
use sh_core::services::{AuthService, ListingService, PasswordHasher, TokenService};
use sh_infra::database::DatabasePool;
use sh_shared::config::CorsConfig;

use crate::handlers::{bad_request, json_error_handler, not_found};
use crate::middleware::{
    auth::JwtAuth,
    cors::{create_cors, Preflight},
};
use crate::routes::{auth, health, listings};

/// Application state that holds shared services
pub struct AppState<U, L, H>
where
    U: UserRepository,
    L: ListingRepository,
    H: PasswordHasher,
{
    pub auth_service: Arc<AuthService<U, H>>,
    pub listing_service: Arc<ListingService<L, U>>,
    pub token_service: Arc<TokenService>,
    /// Pool probed by `/health`; `None` when running without a database
    pub database: Option<DatabasePool>,
}

/// Settings for the HTTP layer itself
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub cors: CorsConfig,
    pub max_payload_size: usize,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            cors: CorsConfig::development(),
            max_payload_size: 256 * 1024,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, L, H>(
    app_state: web::Data<AppState<U, L, H>>,
    settings: &HttpSettings,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    H: PasswordHasher + 'static,
{
    let jwt_auth = JwtAuth::new(Arc::clone(&app_state.token_service));

    App::new()
        .app_data(app_state)
        .app_data(
            web::JsonConfig::default()
                .limit(settings.max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            actix_web::error::InternalError::from_response(err, bad_request("Invalid query parameters")).into()
        }))
        .wrap(Logger::default())
        // Every response, rejections included, carries CORS headers
        .wrap(create_cors(&settings.cors))
        // OPTIONS stops here, ahead of routing and the auth guard
        .wrap(Preflight::new(&settings.cors))
        .route("/health", web::get().to(health::health_check::<U, L, H>))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U, L, H>))
                        .route("/login", web::post().to(auth::login::<U, L, H>))
                        .service(
                            web::resource("/me")
                                .wrap(jwt_auth.clone())
                                .route(web::get().to(auth::me::<U, L, H>)),
                        ),
                )
                .service(
                    web::resource("/posts")
                        .wrap(jwt_auth.clone())
                        .route(web::get().to(listings::list::<U, L, H>))
                        .route(web::post().to(listings::create::<U, L, H>)),
                )
                .service(
                    web::resource("/posts/{id}")
                        .wrap(jwt_auth.clone())
                        .route(web::get().to(listings::detail::<U, L, H>))
                        .route(web::put().to(listings::update::<U, L, H>))
                        .route(web::delete().to(listings::delete::<U, L, H>)),
                )
                .service(
                    web::resource("/my-listings")
                        .wrap(jwt_auth)
                        .route(web::get().to(listings::mine::<U, L, H>)),
                ),
        )
        .default_service(web::route().to(not_found))
}
