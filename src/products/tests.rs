//! Products Module Tests
//!
//! ## Test Scopes
//! - **Lookup**: Cache-first single-product retrieval and `NotFound`.
//! - **Search**: Delegation to the search engine, with the cache untouched.
//! - **Pricing**: `apply_discount` arithmetic and validation.
//! - **HTTP**: `GET /api/products/:id` status codes.

#[cfg(test)]
mod tests {
    use crate::cache::memory::MemoryCache;
    use crate::cache::{DEFAULT_TTL, ProductCache};
    use crate::catalog::CatalogAccessor;
    use crate::catalog::memory::InMemoryCatalog;
    use crate::catalog::types::{Product, ProductId};
    use crate::error::{SearchError, SearchResult};
    use crate::products::service::{ProductService, apply_discount};
    use crate::router::router;
    use crate::search::query::ProductQuery;
    use crate::search::types::FilterOptions;

    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    /// Wraps the demo catalog and counts single-product fetches.
    struct CountingCatalog {
        inner: InMemoryCatalog,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl CatalogAccessor for CountingCatalog {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn candidates(&self, query: &ProductQuery, limit: usize) -> SearchResult<Vec<Product>> {
            self.inner.candidates(query, limit).await
        }

        async fn product(&self, id: &ProductId) -> SearchResult<Option<Product>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.product(id).await
        }
    }

    /// Backing store that is always down.
    struct DownCatalog;

    #[async_trait]
    impl CatalogAccessor for DownCatalog {
        fn name(&self) -> &'static str {
            "down"
        }

        async fn candidates(&self, _query: &ProductQuery, _limit: usize) -> SearchResult<Vec<Product>> {
            Err(SearchError::BackingStoreUnavailable("connection refused".to_string()))
        }

        async fn product(&self, _id: &ProductId) -> SearchResult<Option<Product>> {
            Err(SearchError::BackingStoreUnavailable("connection refused".to_string()))
        }
    }

    fn counting_service() -> (ProductService, Arc<CountingCatalog>, Arc<MemoryCache>) {
        let catalog = Arc::new(CountingCatalog {
            inner: InMemoryCatalog::demo(),
            lookups: AtomicUsize::new(0),
        });
        let cache = Arc::new(MemoryCache::new());
        let service = ProductService::new(catalog.clone(), cache.clone(), DEFAULT_TTL);
        (service, catalog, cache)
    }

    // ============================================================
    // LOOKUP
    // ============================================================

    #[tokio::test]
    async fn test_get_product_caches_after_first_fetch() {
        let (service, catalog, cache) = counting_service();
        let id = ProductId::from(4);

        let first = service.get_product(&id).await.unwrap();
        let second = service.get_product(&id).await.unwrap();

        assert_eq!(first.name, "Coffee Maker");
        assert_eq!(first, second);
        assert_eq!(catalog.lookups.load(Ordering::SeqCst), 1);
        assert_eq!(cache.get("product:4").await, Some(first));
    }

    #[tokio::test]
    async fn test_get_product_prefers_cached_copy() {
        let (service, catalog, cache) = counting_service();
        let mut stale = catalog.inner.product(&ProductId::from(2)).await.unwrap().unwrap();
        stale.price = 1.0;
        cache.set("product:2", stale, DEFAULT_TTL).await;

        let product = service.get_product(&ProductId::from(2)).await.unwrap();

        assert_eq!(product.price, 1.0);
        assert_eq!(catalog.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let (service, _catalog, cache) = counting_service();

        let result = service.get_product(&ProductId::from(404)).await;

        assert!(matches!(result, Err(SearchError::NotFound(_))));
        assert!(cache.is_empty(), "misses are not cached");
    }

    #[tokio::test]
    async fn test_backing_store_errors_propagate() {
        let service = ProductService::new(Arc::new(DownCatalog), Arc::new(MemoryCache::new()), DEFAULT_TTL);

        let lookup = service.get_product(&ProductId::from(1)).await;
        assert!(matches!(lookup, Err(SearchError::BackingStoreUnavailable(_))));

        let search = service.search_products("", &FilterOptions::default()).await;
        assert!(matches!(search, Err(SearchError::BackingStoreUnavailable(_))));
    }

    // ============================================================
    // SEARCH
    // ============================================================

    #[tokio::test]
    async fn test_search_does_not_touch_cache() {
        let (service, catalog, cache) = counting_service();

        let result = service
            .search_products("", &FilterOptions::default().with_category("Home"))
            .await
            .unwrap();

        assert_eq!(result.names(), vec!["Stand Mixer", "Coffee Maker"]);
        assert!(cache.is_empty());
        assert_eq!(catalog.lookups.load(Ordering::SeqCst), 0);
    }

    // ============================================================
    // PRICING
    // ============================================================

    #[test]
    fn test_apply_discount() {
        assert_eq!(apply_discount(200.0, 25.0).unwrap(), 150.0);
        assert_eq!(apply_discount(80.0, 0.0).unwrap(), 80.0);
        assert_eq!(apply_discount(80.0, 100.0).unwrap(), 0.0);
    }

    #[test]
    fn test_apply_discount_rejects_bad_input() {
        assert!(matches!(apply_discount(-5.0, 10.0), Err(SearchError::InvalidFilter(_))));
        assert!(matches!(apply_discount(10.0, 120.0), Err(SearchError::InvalidFilter(_))));
        assert!(matches!(apply_discount(10.0, f64::NAN), Err(SearchError::InvalidFilter(_))));
    }

    // ============================================================
    // HTTP
    // ============================================================

    async fn get_status(service: ProductService, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router(Arc::new(service))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_http_get_product() {
        let (service, _, _) = counting_service();
        let (status, body) = get_status(service, "/api/products/6").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "JavaScript Guide");
        assert_eq!(body["id"], "6");
    }

    #[tokio::test]
    async fn test_http_get_missing_product() {
        let (service, _, _) = counting_service();
        let (status, body) = get_status(service, "/api/products/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["kind"], "not_found");
    }

    #[tokio::test]
    async fn test_http_backing_store_down_is_503() {
        let service = ProductService::new(Arc::new(DownCatalog), Arc::new(MemoryCache::new()), DEFAULT_TTL);
        let (status, body) = get_status(service, "/api/products/search?query=lamp").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["kind"], "backing_store_unavailable");
    }
}
