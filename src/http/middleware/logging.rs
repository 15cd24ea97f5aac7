//! Access logging gate.
//!
//! Outermost layer: one log line per request, every path, before any other
//! gate runs. Side effect only; never rejects or alters the request. The
//! timestamp comes from the tracing subscriber.

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Log method and path for every incoming request.
pub async fn access_log(request: Request<Body>, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        "Incoming request"
    );
    next.run(request).await
}
