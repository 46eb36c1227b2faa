use actix_web::{web, HttpResponse};
use validator::Validate;

use sh_core::repositories::{ListingRepository, UserRepository};
use sh_core::services::PasswordHasher;
use sh_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::LoginRequest;
use crate::handlers::{handle_domain_error, validation_failed};

/// Handler for POST /api/v1/auth/login
///
/// Unknown email and wrong password both answer 401 with
/// `Invalid email or password`.
pub async fn login<U, L, H>(
    state: web::Data<AppState<U, L, H>>,
    request: web::Json<LoginRequest>,
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

    match state.auth_service.login(&request.email, &request.password).await {
        Ok(auth_response) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            auth_response,
            "Login successful",
        )),
        Err(error) => handle_domain_error(error),
    }
}
