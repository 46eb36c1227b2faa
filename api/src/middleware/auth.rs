//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware reads `Authorization: Bearer <token>`, verifies the token
//! with the core `TokenService` and injects an [`AuthContext`] into the
//! request extensions. Rejections are written in the response envelope and
//! never say whether a token was expired or tampered with.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use sh_core::services::token::TokenService;
use sh_shared::types::ApiResponse;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

pub const MISSING_HEADER: &str = "Missing authorization header";
pub const INVALID_FORMAT: &str = "Invalid authorization format";
pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// User authentication context injected into requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
}

/// Why a request was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    MissingHeader,
    InvalidFormat,
    InvalidToken,
}

impl AuthRejection {
    pub fn message(&self) -> &'static str {
        match self {
            AuthRejection::MissingHeader => MISSING_HEADER,
            AuthRejection::InvalidFormat => INVALID_FORMAT,
            AuthRejection::InvalidToken => INVALID_TOKEN,
        }
    }

    fn into_response(self) -> HttpResponse {
        HttpResponse::Unauthorized().json(ApiResponse::error(self.message()))
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware backed by `token_service`
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let header = req
                .headers()
                .get(AUTHORIZATION)
                .map(|value| value.to_str().unwrap_or("\u{fffd}").to_owned());

            let user_id = match authenticate(header.as_deref(), &token_service) {
                Ok(user_id) => user_id,
                Err(rejection) => {
                    log::debug!("Rejected {} {}: {}", req.method(), req.path(), rejection.message());
                    let response = rejection.into_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(AuthContext { user_id });

            let response = service.call(req).await?;
            Ok(response.map_into_left_body())
        })
    }
}

/// Extracts the token from an `Authorization` header value
///
/// The value must be exactly two space-separated parts, the first being
/// `Bearer`.
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

/// Resolve an `Authorization` header to the authenticated user id
pub fn authenticate(header: Option<&str>, token_service: &TokenService) -> Result<Uuid, AuthRejection> {
    let header = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthRejection::MissingHeader),
    };
    let token = extract_bearer_token(header).ok_or(AuthRejection::InvalidFormat)?;

    token_service
        .verify(token)
        .map_err(|_| AuthRejection::InvalidToken)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| ErrorUnauthorized(MISSING_HEADER));

        ready(result)
    }
}
