use super::ProductCache;
use crate::catalog::types::Product;

use async_trait::async_trait;
use dashmap::DashMap;
use std::time::{Duration, Instant};

const MAX_ENTRIES: usize = 10_000;

struct CacheEntry {
    product: Product,
    expires_at: Instant,
}

/// Process-local cache holding at most `capacity` entries. Expired entries
/// are dropped lazily on read. A write at capacity first sweeps expired
/// entries, then evicts the entry closest to expiry if the map is still full.
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
    capacity: usize,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::with_capacity(MAX_ENTRIES)
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn make_room(&self, key: &str, now: Instant) {
        if self.entries.len() < self.capacity || self.entries.contains_key(key) {
            return;
        }

        self.entries.retain(|_, entry| entry.expires_at > now);

        while self.entries.len() >= self.capacity {
            let soonest = self
                .entries
                .iter()
                .min_by_key(|entry| entry.value().expires_at)
                .map(|entry| entry.key().clone());

            match soonest {
                Some(victim) => {
                    tracing::debug!("Cache full, evicting {}", victim);
                    self.entries.remove(&victim);
                }
                None => break,
            }
        }
    }
}

#[async_trait]
impl ProductCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Product> {
        let now = Instant::now();

        if let Some(entry) = self.entries.get(key)
            && entry.expires_at > now
        {
            return Some(entry.product.clone());
        }

        self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
        None
    }

    async fn set(&self, key: &str, product: Product, ttl: Duration) {
        let now = Instant::now();
        self.make_room(key, now);

        tracing::debug!("Caching {} for {:?}", key, ttl);
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                product,
                expires_at: now + ttl,
            },
        );
    }
}
