//! JWT authorization middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, validates it
//! strictly through the token provider, and injects the caller's identity
//! into request extensions. Classified validation failures produce a 401
//! with the per-kind error code.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use kl_core::services::token::JwtTokenProvider;
use kl_shared::types::response::ErrorResponse;

use crate::handlers::error::handle_domain_error;

/// Authenticated caller context injected into requests
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    /// Kindergarten id from the validated token claims
    pub kindergarten_id: i64,
}

/// JWT authorization middleware factory
///
/// The token provider is injected explicitly at construction; the middleware
/// holds no other state.
pub struct JwtAuth {
    provider: Arc<JwtTokenProvider>,
}

impl JwtAuth {
    /// Creates the middleware around a shared token provider
    pub fn new(provider: Arc<JwtTokenProvider>) -> Self {
        Self { provider }
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
            provider: Arc::clone(&self.provider),
        }))
    }
}

/// JWT authorization middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    provider: Arc<JwtTokenProvider>,
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
        let provider = Arc::clone(&self.provider);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    let response = HttpResponse::Unauthorized().json(ErrorResponse::new(
                        "AUTHENTICATION_REQUIRED",
                        "Missing or invalid Authorization header",
                    ));
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            match provider.validate_token(&token) {
                Ok(info) => {
                    req.extensions_mut().insert(AuthContext {
                        kindergarten_id: info.id,
                    });
                }
                Err(error) => {
                    let response = handle_domain_error(&error);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            }

            service
                .call(req)
                .await
                .map(|res| res.map_into_left_body())
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req.extensions().get::<AuthContext>().copied().ok_or_else(|| {
            let response = HttpResponse::Unauthorized().json(ErrorResponse::new(
                "AUTHENTICATION_REQUIRED",
                "Authentication required",
            ));
            InternalError::from_response("unauthenticated request", response).into()
        });

        ready(result)
    }
}
