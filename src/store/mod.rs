//! Persistence subsystem.
//!
//! # Data Flow
//! ```text
//! handlers (Arc<dyn ProductStore>)
//!     → ProductStore trait (list/get/insert/update/delete/aggregate)
//!     → memory.rs (DashMap-backed default backend)
//! ```
//!
//! # Design Decisions
//! - Handlers depend only on the trait; swapping in a database-backed
//!   store requires no handler changes
//! - Every operation is async and fallible, even where the in-memory
//!   backend cannot currently fail
//! - List order is stable insertion order so pagination is deterministic

pub mod memory;
pub mod seed;

use async_trait::async_trait;
use thiserror::Error;

use crate::products::model::{CategoryCount, Product, ProductDraft, ProductFilter};

/// Persistence-layer failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert attempted with an id that already exists.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    /// Backend failure (connection loss, corrupt data, ...).
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Abstract interface over the persistent product collection.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// List products matching `filter`, in stable insertion order,
    /// sliced by `skip`/`limit`.
    async fn list(
        &self,
        filter: &ProductFilter,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Product>, StoreError>;

    /// Fetch one product by id.
    async fn get(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Insert a new product; the id must not already exist.
    async fn insert(&self, product: Product) -> Result<Product, StoreError>;

    /// Replace the business fields of an existing product, keeping its id.
    /// Returns `None` if the id is unknown.
    async fn update(&self, id: &str, draft: ProductDraft) -> Result<Option<Product>, StoreError>;

    /// Delete by id. Returns whether the id existed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Count products per distinct category.
    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, StoreError>;

    /// Total number of stored products.
    async fn count(&self) -> Result<usize, StoreError>;
}

pub use memory::MemoryStore;
