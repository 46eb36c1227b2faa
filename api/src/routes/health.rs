use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use sh_core::repositories::{ListingRepository, UserRepository};
use sh_core::services::PasswordHasher;
use sh_shared::types::response::{HealthResponse, HealthStatus, ServiceHealth};

use crate::app::AppState;

/// Handler for GET /health
///
/// Reports liveness and, when a pool is configured, database reachability.
/// Returns 503 if the database does not answer.
pub async fn health_check<U, L, H>(state: web::Data<AppState<U, L, H>>) -> HttpResponse
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    H: PasswordHasher + 'static,
{
    let mut services = HashMap::new();

    if let Some(pool) = &state.database {
        let database = match pool.health_check().await {
            Ok(true) => ServiceHealth {
                status: HealthStatus::Healthy,
                message: Some(pool.get_statistics().to_string()),
            },
            Ok(false) => ServiceHealth {
                status: HealthStatus::Unhealthy,
                message: Some("unexpected probe result".to_string()),
            },
            Err(e) => {
                log::warn!("Health check could not reach the database: {}", e);
                ServiceHealth {
                    status: HealthStatus::Unhealthy,
                    message: Some("database unreachable".to_string()),
                }
            }
        };
        services.insert("database".to_string(), database);
    }

    let healthy = services
        .values()
        .all(|service| service.status == HealthStatus::Healthy);
    let response = HealthResponse {
        status: if healthy {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        },
        services,
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    if healthy {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
