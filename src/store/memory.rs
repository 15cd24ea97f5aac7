//! In-memory store backend.
//!
//! # Responsibilities
//! - Concurrent product storage without an external database
//! - Stable insertion-order listing for deterministic pagination
//! - Per-category counting
//!
//! # Design Decisions
//! - DashMap shards writes; no extra locking layer on top
//! - An atomic sequence number per entry preserves insertion order
//!   (DashMap iteration order is unspecified)

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;

use crate::products::model::{CategoryCount, Product, ProductDraft, ProductFilter};
use crate::store::{ProductStore, StoreError};

#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    product: Product,
}

/// DashMap-backed implementation of [`ProductStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: DashMap<String, Entry>,
    next_seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(
        &self,
        filter: &ProductFilter,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Product>, StoreError> {
        let mut matches: Vec<(u64, Product)> = self
            .items
            .iter()
            .filter(|entry| filter.matches(&entry.value().product))
            .map(|entry| (entry.value().seq, entry.value().product.clone()))
            .collect();
        matches.sort_by_key(|(seq, _)| *seq);

        Ok(matches
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(|(_, product)| product)
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.items.get(id).map(|entry| entry.product.clone()))
    }

    async fn insert(&self, product: Product) -> Result<Product, StoreError> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        match self.items.entry(product.id.clone()) {
            MapEntry::Occupied(_) => Err(StoreError::DuplicateId(product.id)),
            MapEntry::Vacant(slot) => {
                slot.insert(Entry {
                    seq,
                    product: product.clone(),
                });
                Ok(product)
            }
        }
    }

    async fn update(&self, id: &str, draft: ProductDraft) -> Result<Option<Product>, StoreError> {
        match self.items.get_mut(id) {
            Some(mut entry) => {
                entry.product = draft.into_product(id.to_string());
                Ok(Some(entry.product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.items.remove(id).is_some())
    }

    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, StoreError> {
        // BTreeMap keeps the rows sorted by category name
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for entry in self.items.iter() {
            *counts
                .entry(entry.value().product.category.clone())
                .or_insert(0) += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.items.len())
    }
}
