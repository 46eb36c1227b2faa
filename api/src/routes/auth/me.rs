use actix_web::{web, HttpResponse};

use sh_core::repositories::{ListingRepository, UserRepository};
use sh_core::services::PasswordHasher;
use sh_shared::types::ApiResponse;

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/auth/me
pub async fn me<U, L, H>(state: web::Data<AppState<U, L, H>>, auth: AuthContext) -> HttpResponse
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.auth_service.current_user(auth.user_id).await {
        Ok(profile) => HttpResponse::Ok().json(ApiResponse::success(profile)),
        Err(error) => handle_domain_error(error),
    }
}
