//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all product routes
//! - Wire up middleware in pipeline order (access log → auth → handler)
//! - Apply request timeout and body size limits
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - The auth gate is path-scoped inside the middleware, so `/` stays
//!   open while every `/api/products*` path is gated, routed or not
//! - Handlers receive the store as `Arc<dyn ProductStore>`; the router
//!   never knows which backend is behind it

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::middleware::{access_log, require_api_key, AuthState};
use crate::products::handlers;
use crate::store::ProductStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

/// HTTP server for the product API.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: ServerConfig, store: Arc<dyn ProductStore>) -> Self {
        let state = AppState { store };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layer order matters: the access logger is applied last so it runs
    /// first (outermost), ahead of the timeout and the auth gate.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let auth = AuthState::new(&config.auth.api_key, config.auth.allow_anonymous_list);

        Router::new()
            .route("/", get(handlers::root))
            .route(
                "/api/products",
                get(handlers::list_products).post(handlers::create_product),
            )
            .route(
                "/api/products/stats/category",
                get(handlers::category_stats),
            )
            .route(
                "/api/products/{id}",
                get(handlers::get_product)
                    .put(handlers::update_product)
                    .delete(handlers::delete_product),
            )
            // Unmatched paths get a JSON 404 instead of axum's bare one;
            // the auth gate above still covers unrouted namespace paths
            .fallback(handlers::unmatched)
            .with_state(state)
            .layer(middleware::from_fn_with_state(auth, require_api_key))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(access_log))
    }

    /// The assembled router, for in-process testing without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Returning here would shut the server down; park instead
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
