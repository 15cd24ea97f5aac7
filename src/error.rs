//! Error translation layer.
//!
//! # Responsibilities
//! - Define the error taxonomy for the whole request pipeline
//! - Map each error kind to an HTTP status and a JSON body
//! - Absorb persistence failures so handlers can use `?`
//!
//! # Design Decisions
//! - `IntoResponse` on `ApiError` is the single place error responses are
//!   built; gates and handlers only ever construct an `ApiError`
//! - Every error body has the same shape: `{error, message}`, plus a
//!   `details` array for validation failures
//! - Unrecognized failures fall through to 500 InternalServerError

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::products::validation::Violation;
use crate::store::StoreError;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error kind, e.g. "NotFoundError".
    pub error: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Per-field violations, present only for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Violation>>,
}

/// Application-level error surfaced by gates and handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed write payload (400).
    #[error("{message}")]
    Validation {
        message: String,
        violations: Vec<Violation>,
    },

    /// Missing id on get/update/delete (404).
    #[error("{0}")]
    NotFound(String),

    /// Bad or missing API key (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Persistence or unexpected failure (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Validation failure for a payload that parsed as JSON but violates
    /// the product schema.
    pub fn invalid_payload(violations: Vec<Violation>) -> Self {
        ApiError::Validation {
            message: "Invalid product data".to_string(),
            violations,
        }
    }

    /// Validation failure for a body that is not JSON at all.
    pub fn malformed_body(err: &serde_json::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid product data: {}", err),
            violations: Vec::new(),
        }
    }

    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation { .. } => (StatusCode::BAD_REQUEST, "ValidationError"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFoundError"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UnauthorizedError"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalServerError"),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %message, "Request rejected");
        }

        let details = match self {
            ApiError::Validation { violations, .. } if !violations.is_empty() => Some(violations),
            _ => None,
        };

        let body = ErrorBody {
            error: kind,
            message,
            details,
        };
        (status, Json(body)).into_response()
    }
}
