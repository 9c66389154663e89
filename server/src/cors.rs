//! Single-origin cross-origin policy.
//!
//! # Design
//! `tower_http::cors::CorsLayer` only decorates responses; it never refuses
//! a request. The policy here adds [`enforce_cors`], a middleware that turns
//! a foreign `Origin`, or a preflight asking for a method or header outside
//! the allow-list, into a 403 before routing. Requests without an `Origin`
//! header are not cross-origin and pass untouched.

use axum::{
    extract::{Request, State},
    http::{
        header::{ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, CONTENT_TYPE, ORIGIN},
        HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::types::MessageBody;

pub const ALLOWED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origin: HeaderValue,
}

impl CorsPolicy {
    pub fn new(origin: &str) -> Result<Self, axum::http::header::InvalidHeaderValue> {
        Ok(Self {
            origin: HeaderValue::from_str(origin)?,
        })
    }

    pub fn allows_method(&self, method: &Method) -> bool {
        ALLOWED_METHODS.contains(method)
    }

    /// Whether every header named in an `Access-Control-Request-Headers`
    /// value is on the allow-list.
    pub fn allows_headers(&self, requested: &HeaderValue) -> bool {
        let Ok(list) = requested.to_str() else {
            return false;
        };
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .all(|name| name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()))
    }

    /// Response-header layer for requests that passed [`enforce_cors`].
    pub fn layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(self.origin.clone())
            .allow_methods(ALLOWED_METHODS.to_vec())
            .allow_headers([CONTENT_TYPE])
    }

    fn check(&self, request: &Request) -> Result<(), &'static str> {
        let headers = request.headers();
        let Some(origin) = headers.get(ORIGIN) else {
            return Ok(());
        };
        if origin != &self.origin {
            return Err("origin not allowed");
        }

        if *request.method() == Method::OPTIONS {
            if let Some(requested) = headers.get(ACCESS_CONTROL_REQUEST_METHOD) {
                let allowed = Method::from_bytes(requested.as_bytes())
                    .is_ok_and(|method| self.allows_method(&method));
                if !allowed {
                    return Err("method not allowed");
                }
            }
            if let Some(requested) = headers.get(ACCESS_CONTROL_REQUEST_HEADERS) {
                if !self.allows_headers(requested) {
                    return Err("header not allowed");
                }
            }
            return Ok(());
        }

        if !self.allows_method(request.method()) {
            return Err("method not allowed");
        }
        Ok(())
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            origin: HeaderValue::from_static(crate::config::DEFAULT_CORS_ORIGIN),
        }
    }
}

/// Reject cross-origin requests the policy does not permit.
pub async fn enforce_cors(
    State(policy): State<CorsPolicy>,
    request: Request,
    next: Next,
) -> Response {
    if let Err(reason) = policy.check(&request) {
        warn!(
            method = %request.method(),
            uri = %request.uri(),
            reason,
            "rejected cross-origin request"
        );
        return (
            StatusCode::FORBIDDEN,
            Json(MessageBody::new(format!("CORS: {reason}"))),
        )
            .into_response();
    }
    next.run(request).await
}
