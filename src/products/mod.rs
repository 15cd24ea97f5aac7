//! Product resource subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → handlers.rs (extract query/path/body)
//!     → validation.rs (shape-check write payloads)
//!     → store (persistence via ProductStore trait)
//!     → JSON response (or ApiError)
//! ```

pub mod handlers;
pub mod model;
pub mod validation;

pub use model::{CategoryCount, ListQuery, Product, ProductDraft, ProductFilter};
pub use validation::{validate_payload, Violation};
