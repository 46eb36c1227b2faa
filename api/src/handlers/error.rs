//! Mapping of domain failures onto HTTP responses in the envelope

use actix_web::{error::InternalError, http::StatusCode, HttpRequest, HttpResponse};
use sh_core::errors::{DomainError, ErrorKind};
use sh_shared::types::ApiResponse;
use validator::ValidationErrors;

/// HTTP status for a failure category
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert a domain error into an error envelope
///
/// Internal failures are logged with their detail; the client only sees a
/// generic message.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let kind = error.kind();
    match kind {
        ErrorKind::Internal => log::error!("Request failed: {}", error),
        _ => log::debug!("Request rejected: {}", error),
    }

    HttpResponse::build(status_for(kind)).json(ApiResponse::error(error.public_message()))
}

/// 400 with one validation message, taken from the failing fields in name order
pub fn validation_failed(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let message = fields
        .iter()
        .flat_map(|(_, errors)| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request".to_string());

    HttpResponse::BadRequest().json(ApiResponse::error(message))
}

/// 400 for a body, query or path that could not be decoded
pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error(message))
}

/// Error handler for `web::JsonConfig`
pub fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected request body: {}", err);
    let response = bad_request("Invalid request body");
    InternalError::from_response(err, response).into()
}

/// Default handler for unmatched routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error("The requested resource was not found"))
}
