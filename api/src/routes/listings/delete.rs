use actix_web::{web, HttpResponse};

use sh_core::repositories::{ListingRepository, UserRepository};
use sh_core::services::PasswordHasher;
use sh_shared::types::ApiResponse;

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::parse_listing_id;

/// Handler for DELETE /api/v1/posts/{id}
///
/// Soft delete: the listing disappears from both list views but stays
/// reachable by id with status `deleted`.
pub async fn delete<U, L, H>(
    state: web::Data<AppState<U, L, H>>,
    auth: AuthContext,
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

    match state.listing_service.delete(auth.user_id, id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message("Post deleted successfully")),
        Err(error) => handle_domain_error(error),
    }
}
