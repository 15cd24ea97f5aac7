//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layer ordering)
//!     → middleware/logging.rs (access log, every request)
//!     → middleware/auth.rs (x-api-key gate, /api/products* only)
//!     → products::handlers (CRUD + aggregation)
//!     → JSON response (errors via error::ApiError)
//! ```

pub mod middleware;
pub mod server;

pub use server::{AppState, HttpServer};
