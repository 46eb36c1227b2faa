use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use sh_api::app::{create_app, AppState, HttpSettings};
use sh_core::services::{
    AuthService, AuthServiceConfig, ListingService, ListingServiceConfig, TokenService,
    TokenServiceConfig,
};
use sh_infra::config::InfrastructureConfig;
use sh_infra::InfrastructureServices;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = sh_api::config::load()?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting SecondHand Market API Server ({})", config.environment);
    if config.auth.jwt.is_using_default_secret() {
        log::warn!("JWT_SECRET is not set; using the development secret");
    }

    let infra = InfrastructureServices::connect(InfrastructureConfig {
        database: config.database.clone(),
        bcrypt_cost: config.auth.bcrypt_cost,
    })
    .await?;
    let pool = infra.pool.clone();

    let user_repository = Arc::new(infra.user_repository);
    let listing_repository = Arc::new(infra.listing_repository);
    let password_hasher = Arc::new(infra.password_hasher);
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt))?);

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        password_hasher,
        Arc::clone(&token_service),
        AuthServiceConfig::default(),
    ));
    let listing_service = Arc::new(ListingService::new(
        listing_repository,
        user_repository,
        ListingServiceConfig::from(config.pagination),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        listing_service,
        token_service,
        database: Some(pool.clone()),
    });
    let settings = HttpSettings {
        cors: config.cors.clone(),
        max_payload_size: config.server.max_payload_size,
    };

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &settings));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}
