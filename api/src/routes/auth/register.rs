use actix_web::{web, HttpResponse};
use validator::Validate;

use sh_core::repositories::{ListingRepository, UserRepository};
use sh_core::services::PasswordHasher;
use sh_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::RegisterRequest;
use crate::handlers::{handle_domain_error, validation_failed};

/// Handler for POST /api/v1/auth/register
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "email": "alice@example.com", "password": "secret123" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "status": "success",
///     "message": "User registered successfully",
///     "data": { "token": "eyJ...", "user": { "id": "...", "username": "alice", ... } }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: a field is missing or out of bounds
/// - 409 Conflict: email or username already taken
pub async fn register<U, L, H>(
    state: web::Data<AppState<U, L, H>>,
    request: web::Json<RegisterRequest>,
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

    match state
        .auth_service
        .register(&request.username, &request.email, &request.password)
        .await
    {
        Ok(auth_response) => {
            log::info!("Registered user {}", auth_response.user.id);
            HttpResponse::Created().json(ApiResponse::success_with_message(
                auth_response,
                "User registered successfully",
            ))
        }
        Err(error) => handle_domain_error(error),
    }
}
