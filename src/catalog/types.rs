//! Catalog Data Types
//!
//! The searchable entity and its identifier. Both backends deserialize into
//! these types, so the filter and ranking code never sees a backend-specific
//! record.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Upper bound of the rating scale. Ratings live in `0.0..=RATING_MAX`.
pub const RATING_MAX: f64 = 5.0;

/// Opaque product identifier.
///
/// Stores accept either integers or strings as ids; both are normalised to
/// their decimal/string form so that ids compare and hash uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key under which the single-entity cache stores this product.
    pub fn cache_key(&self) -> String {
        format!("product:{}", self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(id) => ProductId(id.to_string()),
            RawId::Text(id) => ProductId(id),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock_quantity: u32,
    pub rating: f64,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

/// Product body as stored in a search index, where the id lives outside the
/// document (`_id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDocument {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock_quantity: u32,
    pub rating: f64,
}

impl ProductDocument {
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            stock_quantity: self.stock_quantity,
            rating: self.rating,
        }
    }
}
