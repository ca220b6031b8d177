use crate::catalog::types::Product;
use serde::{Deserialize, Serialize};

/// Inclusive price bounds. Either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

/// Category constraint: a single label or a set of labels (match-any).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryFilter {
    One(String),
    Any(Vec<String>),
}

impl CategoryFilter {
    pub fn labels(&self) -> Vec<&str> {
        match self {
            CategoryFilter::One(label) => vec![label.as_str()],
            CategoryFilter::Any(labels) => labels.iter().map(String::as_str).collect(),
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::One(label) => label == category,
            CategoryFilter::Any(labels) => labels.iter().any(|label| label == category),
        }
    }
}

/// Structured constraints narrowing a search. Every field is independent;
/// `None` means "no constraint", never "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryFilter>,
    /// `true` keeps products in stock, `false` keeps sold-out products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
    /// Inclusive lower bound on rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
}

impl FilterOptions {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(CategoryFilter::One(category.into()));
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category = Some(CategoryFilter::Any(
            categories.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn with_availability(mut self, in_stock: bool) -> Self {
        self.availability = Some(in_stock);
        self
    }

    pub fn with_price(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price_range = Some(PriceRange { min, max });
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }
}

/// Products in rank order: rating descending, then name ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult {
    products: Vec<Product>,
}

impl RankedResult {
    pub(crate) fn from_ranked(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<Product> {
        self.products
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub filters: FilterOptions,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<Product>,
}
