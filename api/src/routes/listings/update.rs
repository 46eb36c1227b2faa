use actix_web::{web, HttpResponse};
use validator::Validate;

use sh_core::repositories::{ListingRepository, UserRepository};
use sh_core::services::PasswordHasher;
use sh_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::listing::UpdateListingRequest;
use crate::handlers::{handle_domain_error, validation_failed};
use crate::middleware::auth::AuthContext;

use super::parse_listing_id;

/// Handler for PUT /api/v1/posts/{id}
///
/// Overwrites title, description and price. Only the owner may edit.
///
/// ## Errors
/// - 400 Bad Request: malformed id, missing title or price out of range
/// - 403 Forbidden: the caller does not own the listing
/// - 404 Not Found: no listing with this id
pub async fn update<U, L, H>(
    state: web::Data<AppState<U, L, H>>,
    auth: AuthContext,
    path: web::Path<String>,
    request: web::Json<UpdateListingRequest>,
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
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    match state
        .listing_service
        .update(auth.user_id, id, request.into())
        .await
    {
        Ok(details) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            details,
            "Post updated successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
