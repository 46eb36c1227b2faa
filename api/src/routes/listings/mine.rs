use actix_web::{web, HttpResponse};

use sh_core::repositories::{ListingRepository, UserRepository};
use sh_core::services::PasswordHasher;
use sh_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::listing::PageQuery;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/my-listings
///
/// The caller's active and sold listings; `page_size` defaults to 6.
pub async fn mine<U, L, H>(
    state: web::Data<AppState<U, L, H>>,
    auth: AuthContext,
    query: web::Query<PageQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state
        .listing_service
        .list_mine(auth.user_id, query.page(), query.page_size())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(ApiResponse::success(page)),
        Err(error) => handle_domain_error(error),
    }
}
