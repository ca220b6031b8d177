//! Error types for the product search service.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by searches and single-product lookups.
///
/// An empty result list is never an error: a search that matches nothing
/// returns `Ok` with no products.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Malformed or contradictory filter values (e.g. `min_price > max_price`).
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// The catalog accessor failed, timed out or answered with garbage.
    #[error("backing store unavailable: {0}")]
    BackingStoreUnavailable(String),

    /// Only produced by single-product lookup.
    #[error("product not found: {0}")]
    NotFound(String),
}

impl SearchError {
    pub fn status(&self) -> StatusCode {
        match self {
            SearchError::InvalidFilter(_) => StatusCode::BAD_REQUEST,
            SearchError::BackingStoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            SearchError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::InvalidFilter(_) => "invalid_filter",
            SearchError::BackingStoreUnavailable(_) => "backing_store_unavailable",
            SearchError::NotFound(_) => "not_found",
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::BackingStoreUnavailable(err.to_string())
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let payload = json!({
            "error": self.to_string(),
            "kind": self.kind(),
        });
        (self.status(), Json(payload)).into_response()
    }
}

/// Result type alias for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
