//! Single-Product Cache
//!
//! Key-value cache with per-entry time-to-live, consulted only by
//! single-product lookup. Searches never read or write it.
//!
//! Keys are derived from the product id (`product:{id}`, see
//! [`ProductId::cache_key`](crate::catalog::types::ProductId::cache_key)).

pub mod memory;

#[cfg(test)]
mod tests;

use crate::catalog::types::Product;
use async_trait::async_trait;
use std::time::Duration;

/// Default lifetime of a cached product.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

#[async_trait]
pub trait ProductCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<Product>;

    async fn set(&self, key: &str, product: Product, ttl: Duration);
}
