//! Product entity and wire types.

use serde::{Deserialize, Serialize};

/// A product as stored and returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned unique identifier, immutable after creation.
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Grouping key for the category aggregation.
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

/// The business fields of a product, without the id.
///
/// Produced only by the validation gate; the id is attached by the create
/// handler (new UUID) or taken from the path (update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

impl ProductDraft {
    /// Attach an id, producing a full product record.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
        }
    }
}

/// Filter conditions for listing products. Conditions combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Exact match on `category`.
    pub category: Option<String>,
    /// Case-insensitive substring match on `name`.
    pub name_contains: Option<String>,
}

impl ProductFilter {
    /// Returns true if the product satisfies every supplied condition.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(needle) = &self.name_contains {
            if !product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl ListQuery {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 10;

    /// Effective page number; zero or absent falls back to the default.
    pub fn page(&self) -> u64 {
        self.page.filter(|p| *p >= 1).unwrap_or(Self::DEFAULT_PAGE)
    }

    /// Effective page size; zero or absent falls back to the default.
    pub fn limit(&self) -> u64 {
        self.limit
            .filter(|l| *l >= 1)
            .unwrap_or(Self::DEFAULT_LIMIT)
    }

    /// Pagination window as (skip, take).
    pub fn window(&self) -> (usize, usize) {
        let skip = (self.page() - 1).saturating_mul(self.limit());
        (skip as usize, self.limit() as usize)
    }

    /// Filter conditions extracted from the query string.
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            category: self.category.clone(),
            name_contains: self.search.clone(),
        }
    }
}

/// One row of the per-category aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}
