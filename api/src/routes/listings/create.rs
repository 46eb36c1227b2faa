use actix_web::{web, HttpResponse};
use validator::Validate;

use sh_core::repositories::{ListingRepository, UserRepository};
use sh_core::services::PasswordHasher;
use sh_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::listing::CreateListingRequest;
use crate::handlers::{handle_domain_error, validation_failed};
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/v1/posts
///
/// The new listing belongs to the caller and always starts `active`.
///
/// ## Errors
/// - 400 Bad Request: a field is missing or out of bounds
/// - 401 Unauthorized: missing or invalid token
pub async fn create<U, L, H>(
    state: web::Data<AppState<U, L, H>>,
    auth: AuthContext,
    request: web::Json<CreateListingRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    H: PasswordHasher + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    match state.listing_service.create(auth.user_id, request.into()).await {
        Ok(details) => HttpResponse::Created().json(ApiResponse::success_with_message(
            details,
            "Post created successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
