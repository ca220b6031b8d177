//! Catalog Module
//!
//! Backing stores that supply product data to the search core.
//!
//! ## Backends
//! - **`memory`**: `InMemoryCatalog`, a concurrent map of products scanned
//!   directly for every search. Seeded with the demo catalog by default.
//! - **`elastic`**: `ElasticCatalog`, an HTTP client for an Elasticsearch
//!   index. The query is rendered to the search DSL and evaluated remotely.
//!
//! Both implement [`CatalogAccessor`], so the service and its tests can swap
//! one for the other without touching filter or ranking semantics.

pub mod elastic;
pub mod memory;
pub mod types;


use crate::error::SearchResult;
use crate::search::query::ProductQuery;
use async_trait::async_trait;
use types::{Product, ProductId};

#[async_trait]
pub trait CatalogAccessor: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    /// Products matching `query`, in no particular order.
    ///
    /// `limit` is a hint for backends that rank on their side; backends that
    /// return every match are still correct since the caller re-ranks and
    /// truncates.
    async fn candidates(&self, query: &ProductQuery, limit: usize) -> SearchResult<Vec<Product>>;

    /// Single product by id, `None` when the store has no such product.
    async fn product(&self, id: &ProductId) -> SearchResult<Option<Product>>;
}
