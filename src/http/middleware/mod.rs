//! Request pipeline gates.
//!
//! Gates run in a fixed order ahead of every handler: access logging first,
//! then authentication for the products namespace. A gate either passes the
//! request through unchanged or short-circuits with an `ApiError`; nothing
//! downstream runs after a rejection.

pub mod auth;
pub mod logging;

pub use auth::{require_api_key, AuthState};
pub use logging::access_log;
