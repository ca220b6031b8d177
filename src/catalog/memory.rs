use super::CatalogAccessor;
use super::types::{Product, ProductId};
use crate::error::SearchResult;
use crate::search::query::ProductQuery;

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory catalog. Each search scans a snapshot of the map.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    products: Arc<DashMap<ProductId, Product>>,
}

impl InMemoryCatalog {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let catalog = Self::default();
        for product in products {
            catalog.upsert(product);
        }
        catalog
    }

    /// Catalog seeded with [`demo_products`].
    pub fn demo() -> Self {
        Self::new(demo_products())
    }

    /// Inserts or replaces a product, returning the previous version.
    pub fn upsert(&self, product: Product) -> Option<Product> {
        self.products.insert(product.id.clone(), product)
    }

    pub fn remove(&self, id: &ProductId) -> Option<Product> {
        self.products.remove(id).map(|(_, product)| product)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn snapshot(&self) -> Vec<Product> {
        self.products
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}

#[async_trait]
impl CatalogAccessor for InMemoryCatalog {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn candidates(&self, query: &ProductQuery, _limit: usize) -> SearchResult<Vec<Product>> {
        let matches: Vec<Product> = self
            .snapshot()
            .into_iter()
            .filter(|product| query.matches(product))
            .collect();

        tracing::debug!("Scanned {} products, {} matched", self.len(), matches.len());
        Ok(matches)
    }

    async fn product(&self, id: &ProductId) -> SearchResult<Option<Product>> {
        Ok(self.products.get(id).map(|entry| entry.value().clone()))
    }
}

/// The eight-product demo catalog served when no search engine is configured.
pub fn demo_products() -> Vec<Product> {
    let rows: [(u64, &str, &str, f64, &str, u32, f64); 8] = [
        (1, "Wireless Headphones", "Premium noise-cancelling headphones", 199.99, "Electronics", 15, 4.5),
        (2, "Python Programming Book", "Learn Python from scratch", 49.99, "Books", 8, 4.8),
        (3, "Cotton T-Shirt", "Comfortable everyday t-shirt", 24.99, "Clothing", 0, 4.2),
        (4, "Coffee Maker", "Programmable coffee maker", 89.99, "Home", 12, 4.6),
        (5, "Smartphone", "Latest model smartphone", 699.99, "Electronics", 5, 4.7),
        (6, "JavaScript Guide", "Complete guide to modern JavaScript", 39.99, "Books", 20, 4.9),
        (7, "Running Shoes", "Lightweight running shoes", 129.99, "Clothing", 7, 4.4),
        (8, "Stand Mixer", "Professional stand mixer", 299.99, "Home", 3, 4.7),
    ];

    rows.into_iter()
        .map(
            |(id, name, description, price, category, stock_quantity, rating)| Product {
                id: ProductId::from(id),
                name: name.to_string(),
                description: description.to_string(),
                price,
                category: category.to_string(),
                stock_quantity,
                rating,
            },
        )
        .collect()
}
