//! Cache Module Tests

#[cfg(test)]
mod tests {
    use crate::cache::ProductCache;
    use crate::cache::memory::MemoryCache;
    use crate::catalog::memory::demo_products;
    use std::time::Duration;

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MemoryCache::new();
        let product = demo_products().remove(0);

        cache
            .set("product:1", product.clone(), Duration::from_secs(60))
            .await;

        assert_eq!(cache.get("product:1").await, Some(product));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_key() {
        let cache = MemoryCache::new();
        assert!(cache.get("product:404").await.is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_expired_entry_is_evicted_on_read() {
        let cache = MemoryCache::new();
        let product = demo_products().remove(1);

        cache.set("product:2", product, Duration::from_millis(20)).await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(cache.get("product:2").await.is_none());
        assert!(cache.is_empty(), "expired entry should be removed");
    }

    #[tokio::test]
    async fn test_set_overwrites_and_refreshes() {
        let cache = MemoryCache::new();
        let mut product = demo_products().remove(2);

        cache.set("product:3", product.clone(), Duration::from_secs(60)).await;
        product.stock_quantity = 9;
        cache.set("product:3", product, Duration::from_secs(60)).await;

        assert_eq!(cache.get("product:3").await.unwrap().stock_quantity, 9);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_capacity_evicts_soonest_expiry_when_nothing_expired() {
        let cache = MemoryCache::with_capacity(2);
        let products = demo_products();

        cache.set("product:1", products[0].clone(), Duration::from_secs(10)).await;
        cache.set("product:2", products[1].clone(), Duration::from_secs(600)).await;
        cache.set("product:3", products[2].clone(), Duration::from_secs(300)).await;

        assert_eq!(cache.len(), 2);
        assert!(cache.get("product:1").await.is_none());
        assert!(cache.get("product:2").await.is_some());
        assert!(cache.get("product:3").await.is_some());
    }

    #[tokio::test]
    async fn test_capacity_prefers_expired_entries() {
        let cache = MemoryCache::with_capacity(2);
        let products = demo_products();

        cache.set("product:1", products[0].clone(), Duration::from_secs(600)).await;
        cache.set("product:2", products[1].clone(), Duration::from_millis(10)).await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        cache.set("product:3", products[2].clone(), Duration::from_secs(600)).await;

        assert_eq!(cache.len(), 2);
        assert!(cache.get("product:1").await.is_some());
        assert!(cache.get("product:3").await.is_some());
    }

    #[tokio::test]
    async fn test_overwrite_at_capacity_keeps_other_entries() {
        let cache = MemoryCache::with_capacity(2);
        let products = demo_products();

        cache.set("product:1", products[0].clone(), Duration::from_secs(60)).await;
        cache.set("product:2", products[1].clone(), Duration::from_secs(60)).await;
        cache.set("product:2", products[1].clone(), Duration::from_secs(120)).await;

        assert_eq!(cache.len(), 2);
        assert!(cache.get("product:1").await.is_some());
    }

    #[tokio::test]
    async fn test_many_writes_stay_bounded() {
        let cache = MemoryCache::with_capacity(16);
        let product = demo_products().remove(0);

        for i in 0..100 {
            cache
                .set(&format!("product:{}", i), product.clone(), Duration::from_secs(60))
                .await;
        }

        assert_eq!(cache.len(), 16);
    }
}
