//! One-time startup seeding.
//!
//! Replaces a process-global sample list with an explicit seed pass
//! against the store: runs once at startup and only touches an empty
//! collection.

use uuid::Uuid;

use crate::products::model::ProductDraft;
use crate::store::{ProductStore, StoreError};

/// The sample catalog inserted into an empty store.
pub fn sample_products() -> Vec<ProductDraft> {
    vec![
        ProductDraft {
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        ProductDraft {
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        ProductDraft {
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}

/// Insert the sample catalog if the store is empty.
///
/// A non-empty store is left untouched. Returns the number of products
/// inserted.
pub async fn seed_if_empty(store: &dyn ProductStore) -> Result<usize, StoreError> {
    if store.count().await? > 0 {
        return Ok(0);
    }

    let samples = sample_products();
    let inserted = samples.len();
    for draft in samples {
        store
            .insert(draft.into_product(Uuid::new_v4().to_string()))
            .await?;
    }

    tracing::info!(count = inserted, "Seeded sample products");
    Ok(inserted)
}
