use actix_web::{web, HttpResponse};

use sh_core::repositories::{ListingRepository, UserRepository};
use sh_core::services::PasswordHasher;
use sh_shared::types::ApiResponse;

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::parse_listing_id;

/// Handler for GET /api/v1/posts/{id}
///
/// Returns the listing whatever its status, deleted ones included.
pub async fn detail<U, L, H>(
    state: web::Data<AppState<U, L, H>>,
    _auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    H: PasswordHasher + 'static,
{
    let id = match parse_listing_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.listing_service.get_by_id(id).await {
        Ok(details) => HttpResponse::Ok().json(ApiResponse::success(details)),
        Err(error) => handle_domain_error(error),
    }
}
