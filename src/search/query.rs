//! Validated search query.
//!
//! `ProductQuery` is the single definition of search semantics. It is
//! translated two ways: [`ProductQuery::matches`] evaluates it directly
//! against a product, and [`ProductQuery::to_elastic_body`] renders the same
//! constraints as an Elasticsearch request body.
//!
//! Text matching is where the two translations differ. The direct scan does
//! case-insensitive substring containment over name and description; the
//! index does fuzzy `best_fields` matching with the name boosted. They agree
//! whenever the query is a whole token that appears verbatim in the name or
//! description (e.g. "guide" against "JavaScript Guide"). Partial-token and
//! misspelled queries may rank or match differently.
//!
//! The index sorts on `rating desc, name.keyword asc` only. Document ids are
//! kept outside `_source` and sorting on `_id` is disabled by default in
//! Elasticsearch 8, so there is no id key on the remote side. The final order
//! is unaffected because the ranker re-sorts with id as the last key, but when
//! more than `size` hits tie on both rating and name across the cut-off, the
//! index may return a different subset of those tied products than the
//! in-memory scan would.

use super::types::{CategoryFilter, FilterOptions, PriceRange};
use crate::catalog::types::{Product, RATING_MAX};
use crate::error::{SearchError, SearchResult};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    text: Option<String>,
    text_lower: Option<String>,
    filters: FilterOptions,
}

impl ProductQuery {
    /// Validates and normalises the filters.
    ///
    /// A blank query and an empty category set both mean "no constraint".
    pub fn new(query: &str, filters: &FilterOptions) -> SearchResult<Self> {
        let text = Some(query.trim())
            .filter(|q| !q.is_empty())
            .map(str::to_string);
        let text_lower = text.as_ref().map(|q| q.to_lowercase());

        Ok(Self {
            text,
            text_lower,
            filters: normalise(filters)?,
        })
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    /// Full predicate: text match followed by the structural filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product) && self.admits(product)
    }

    pub fn matches_text(&self, product: &Product) -> bool {
        match &self.text_lower {
            None => true,
            Some(needle) => {
                product.name.to_lowercase().contains(needle.as_str())
                    || product.description.to_lowercase().contains(needle.as_str())
            }
        }
    }

    /// Structural filters, in order: category, availability, price, rating.
    pub fn admits(&self, product: &Product) -> bool {
        let filters = &self.filters;

        if let Some(category) = &filters.category
            && !category.matches(&product.category)
        {
            return false;
        }

        if let Some(in_stock) = filters.availability
            && product.in_stock() != in_stock
        {
            return false;
        }

        if let Some(range) = &filters.price_range
            && !range.contains(product.price)
        {
            return false;
        }

        filters
            .min_rating
            .is_none_or(|threshold| product.rating >= threshold)
    }

    /// Renders the query as an Elasticsearch `_search` body returning at most
    /// `size` hits.
    pub fn to_elastic_body(&self, size: usize) -> Value {
        let must = match &self.text {
            Some(text) => json!({
                "multi_match": {
                    "query": text,
                    "fields": ["name^2", "description"],
                    "type": "best_fields",
                    "fuzziness": "AUTO"
                }
            }),
            None => json!({ "match_all": {} }),
        };

        json!({
            "query": {
                "bool": {
                    "must": [must],
                    "filter": self.elastic_filters()
                }
            },
            "sort": [
                { "rating": { "order": "desc" } },
                { "name.keyword": { "order": "asc" } }
            ],
            "size": size
        })
    }

    fn elastic_filters(&self) -> Vec<Value> {
        let filters = &self.filters;
        let mut clauses = Vec::new();

        match &filters.category {
            Some(CategoryFilter::One(label)) => {
                clauses.push(json!({ "term": { "category": label } }));
            }
            Some(CategoryFilter::Any(labels)) => {
                clauses.push(json!({ "terms": { "category": labels } }));
            }
            None => {}
        }

        match filters.availability {
            Some(true) => clauses.push(json!({ "range": { "stock_quantity": { "gt": 0 } } })),
            Some(false) => clauses.push(json!({ "term": { "stock_quantity": 0 } })),
            None => {}
        }

        if let Some(range) = &filters.price_range {
            let mut bounds = serde_json::Map::new();
            if let Some(min) = range.min {
                bounds.insert("gte".to_string(), json!(min));
            }
            if let Some(max) = range.max {
                bounds.insert("lte".to_string(), json!(max));
            }
            clauses.push(json!({ "range": { "price": bounds } }));
        }

        if let Some(rating) = filters.min_rating {
            clauses.push(json!({ "range": { "rating": { "gte": rating } } }));
        }

        clauses
    }
}

fn normalise(filters: &FilterOptions) -> SearchResult<FilterOptions> {
    let price_range = match filters.price_range {
        Some(range) if !range.is_open() => Some(validate_price_range(range)?),
        _ => None,
    };

    let category = match &filters.category {
        Some(CategoryFilter::One(label)) if !label.trim().is_empty() => {
            Some(CategoryFilter::One(label.clone()))
        }
        Some(CategoryFilter::Any(labels)) => {
            let mut labels: Vec<String> = labels
                .iter()
                .filter(|label| !label.trim().is_empty())
                .cloned()
                .collect();
            labels.sort();
            labels.dedup();
            if labels.is_empty() {
                None
            } else {
                Some(CategoryFilter::Any(labels))
            }
        }
        _ => None,
    };

    let min_rating = match filters.min_rating {
        Some(rating) if !rating.is_finite() || !(0.0..=RATING_MAX).contains(&rating) => {
            return Err(SearchError::InvalidFilter(format!(
                "min_rating must be between 0 and {}, got {}",
                RATING_MAX, rating
            )));
        }
        other => other,
    };

    Ok(FilterOptions {
        price_range,
        category,
        availability: filters.availability,
        min_rating,
    })
}

fn validate_price_range(range: PriceRange) -> SearchResult<PriceRange> {
    for (label, bound) in [("min_price", range.min), ("max_price", range.max)] {
        if let Some(value) = bound
            && (!value.is_finite() || value < 0.0)
        {
            return Err(SearchError::InvalidFilter(format!(
                "{} must be a non-negative number, got {}",
                label, value
            )));
        }
    }

    if let (Some(min), Some(max)) = (range.min, range.max)
        && min > max
    {
        return Err(SearchError::InvalidFilter(format!(
            "min_price ({}) is greater than max_price ({})",
            min, max
        )));
    }

    Ok(range)
}
