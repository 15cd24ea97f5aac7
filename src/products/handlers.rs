//! Product route handlers.
//!
//! # Responsibilities
//! - One handler per route: list, get, create, update, delete, stats
//! - Shape-check write payloads before touching the store
//! - Translate store misses into NotFound errors
//!
//! # Design Decisions
//! - Handlers return `Result<_, ApiError>`; every failure, including store
//!   failures, flows through the error translator via `?`
//! - Write bodies arrive as raw bytes and are parsed here, so a malformed
//!   body produces the same JSON error shape as a schema violation

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::http::server::AppState;
use crate::products::model::{CategoryCount, ListQuery, Product, ProductDraft};
use crate::products::validation::validate_payload;

/// GET /, a plain greeting outside the products namespace.
pub async fn root() -> &'static str {
    "Hello World!"
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let filter = query.filter();
    let (skip, limit) = query.window();

    let products = state.store.list(&filter, skip, limit).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let draft = parse_and_validate(&body)?;

    let product = draft.into_product(Uuid::new_v4().to_string());
    let stored = state.store.insert(product).await?;

    tracing::debug!(id = %stored.id, "Product created");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let draft = parse_and_validate(&body)?;

    let updated = state
        .store
        .update(&id, draft)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;
    Ok(Json(updated))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let found = state.store.delete(&id).await?;
    if !found {
        return Err(ApiError::NotFound("Product not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/products/stats/category
pub async fn category_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryCount>>, ApiError> {
    let counts = state.store.count_by_category().await?;
    Ok(Json(counts))
}

/// Fallback for unrouted paths: same JSON error shape as everything else.
pub async fn unmatched() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}

/// Run a raw write body through the validation gate.
fn parse_and_validate(body: &Bytes) -> Result<ProductDraft, ApiError> {
    let payload: Value = serde_json::from_slice(body).map_err(|e| ApiError::malformed_body(&e))?;
    validate_payload(&payload).map_err(ApiError::invalid_payload)
}
