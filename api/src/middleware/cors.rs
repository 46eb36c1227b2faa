//! CORS middleware configuration for cross-origin requests.
//!
//! Browser clients call the API from another origin, so every route,
//! error responses included, goes through this layer. In development any
//! origin is accepted; in production only the origins listed in
//! `CORS_ALLOWED_ORIGINS`.
//!
//! `OPTIONS` requests never reach a route or the auth guard: [`Preflight`]
//! answers them with 204 No Content and the cross-origin headers.

use actix_cors::Cors;
use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, Method},
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use sh_shared::config::CorsConfig;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(config.allowed_methods.iter().map(String::as_str))
        .allowed_headers(config.allowed_headers.iter().map(String::as_str))
        .expose_headers(vec![header::CONTENT_TYPE])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        log::info!("Configuring CORS to allow any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

/// Answers every `OPTIONS` request with 204 before routing
#[derive(Clone)]
pub struct Preflight {
    config: Rc<CorsConfig>,
}

impl Preflight {
    pub fn new(config: &CorsConfig) -> Self {
        Self {
            config: Rc::new(config.clone()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Preflight
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = PreflightMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PreflightMiddleware {
            service,
            config: Rc::clone(&self.config),
        }))
    }
}

pub struct PreflightMiddleware<S> {
    service: S,
    config: Rc<CorsConfig>,
}

impl<S, B> Service<ServiceRequest> for PreflightMiddleware<S>
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
        if *req.method() != Method::OPTIONS {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let origin = req
            .headers()
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok());
        let response = preflight_response(&self.config, origin);
        Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) })
    }
}

/// 204 carrying the allow headers; the origin is echoed only when permitted
pub fn preflight_response(config: &CorsConfig, origin: Option<&str>) -> HttpResponse {
    let mut response = HttpResponse::NoContent();
    response
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, config.allowed_methods.join(", ")))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, config.allowed_headers.join(", ")))
        .insert_header((header::ACCESS_CONTROL_MAX_AGE, config.max_age.to_string()))
        .insert_header((header::VARY, "Origin"));

    if config.allows_any_origin() {
        response.insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"));
    } else if let Some(origin) = origin.filter(|o| config.allowed_origins.iter().any(|a| a == o)) {
        response.insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, origin));
    }

    response.finish()
}
