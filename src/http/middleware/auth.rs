//! API-key authentication gate.
//!
//! # Responsibilities
//! - Gate all `/api/products*` traffic behind a shared static secret
//! - Reject with 401 before routing or any handler runs
//!
//! # Design Decisions
//! - Prefix-scoped: paths outside the products namespace pass untouched,
//!   so the gate can sit on the whole router and still cover unrouted
//!   paths under the namespace
//! - Exact string compare of the `x-api-key` header; no per-key identity,
//!   rate limiting, or expiry
//! - Anonymous listing is an explicit config switch, not a mount-order
//!   accident: when enabled, only `GET /api/products` (exact path) passes

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::error::ApiError;

/// Header carrying the client's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Path prefix the gate protects.
pub const PROTECTED_PREFIX: &str = "/api/products";

/// State required by the auth gate.
#[derive(Clone)]
pub struct AuthState {
    pub api_key: Arc<str>,
    pub allow_anonymous_list: bool,
}

impl AuthState {
    pub fn new(api_key: &str, allow_anonymous_list: bool) -> Self {
        Self {
            api_key: Arc::from(api_key),
            allow_anonymous_list,
        }
    }
}

/// Returns true if the path belongs to the protected products namespace.
fn in_protected_namespace(path: &str) -> bool {
    path == PROTECTED_PREFIX || path.starts_with("/api/products/")
}

/// Reject any products-namespace request whose `x-api-key` header does not
/// match the configured secret.
pub async fn require_api_key(
    State(auth): State<AuthState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path();

    if !in_protected_namespace(path) {
        return Ok(next.run(request).await);
    }

    if auth.allow_anonymous_list && request.method() == Method::GET && path == PROTECTED_PREFIX {
        return Ok(next.run(request).await);
    }

    let supplied = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match supplied {
        Some(key) if key == auth.api_key.as_ref() => Ok(next.run(request).await),
        _ => {
            tracing::warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "Rejected request with missing or invalid API key"
            );
            Err(ApiError::Unauthorized(
                "Unauthorized: Invalid API Key".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_boundaries() {
        assert!(in_protected_namespace("/api/products"));
        assert!(in_protected_namespace("/api/products/42"));
        assert!(in_protected_namespace("/api/products/stats/category"));
        assert!(!in_protected_namespace("/"));
        assert!(!in_protected_namespace("/api/other"));
        // A sibling path sharing the prefix characters is not gated
        assert!(!in_protected_namespace("/api/productsearch"));
    }
}
