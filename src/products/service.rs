use crate::cache::ProductCache;
use crate::catalog::CatalogAccessor;
use crate::catalog::types::{Product, ProductId};
use crate::error::{SearchError, SearchResult};
use crate::search::engine;
use crate::search::types::{FilterOptions, RankedResult};

use std::sync::Arc;
use std::time::Duration;

/// Product operations over one catalog and one single-entity cache.
pub struct ProductService {
    catalog: Arc<dyn CatalogAccessor>,
    cache: Arc<dyn ProductCache>,
    cache_ttl: Duration,
}

impl ProductService {
    pub fn new(
        catalog: Arc<dyn CatalogAccessor>,
        cache: Arc<dyn ProductCache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            catalog,
            cache,
            cache_ttl,
        }
    }

    pub fn catalog_name(&self) -> &'static str {
        self.catalog.name()
    }

    /// Looks a product up by id, going through the cache first.
    pub async fn get_product(&self, id: &ProductId) -> SearchResult<Product> {
        let cache_key = id.cache_key();

        if let Some(product) = self.cache.get(&cache_key).await {
            tracing::debug!("Cache hit for {}", cache_key);
            return Ok(product);
        }

        let product = self
            .catalog
            .product(id)
            .await?
            .ok_or_else(|| SearchError::NotFound(id.to_string()))?;

        self.cache
            .set(&cache_key, product.clone(), self.cache_ttl)
            .await;

        Ok(product)
    }

    /// Ranked search; never touches the cache.
    pub async fn search_products(
        &self,
        query: &str,
        filters: &FilterOptions,
    ) -> SearchResult<RankedResult> {
        engine::search(query, filters, self.catalog.as_ref()).await
    }
}

/// Price after taking `discount_percent` percent off.
pub fn apply_discount(price: f64, discount_percent: f64) -> SearchResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(SearchError::InvalidFilter(format!(
            "price must be a non-negative number, got {}",
            price
        )));
    }
    if !discount_percent.is_finite() || !(0.0..=100.0).contains(&discount_percent) {
        return Err(SearchError::InvalidFilter(format!(
            "discount must be between 0 and 100 percent, got {}",
            discount_percent
        )));
    }

    Ok(price * (1.0 - discount_percent / 100.0))
}
