use super::ranking::MAX_RESULTS;
use super::types::{CategoryFilter, FilterOptions, PriceRange, SearchResponse};
use crate::error::{SearchError, SearchResult};
use crate::products::service::ProductService;

use axum::extract::Query;
use axum::{Extension, Json};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;

/// Raw query-string parameters. Everything arrives as text so that malformed
/// values become `InvalidFilter` instead of a generic extractor rejection.
/// Empty values are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    /// Single label, or comma-separated labels for match-any.
    pub category: Option<String>,
    pub availability: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_rating: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl SearchParams {
    pub fn filters(&self) -> SearchResult<FilterOptions> {
        let category = present(&self.category).map(|raw| {
            let labels: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .collect();
            match <[String; 1]>::try_from(labels) {
                Ok([label]) => CategoryFilter::One(label),
                Err(labels) => CategoryFilter::Any(labels),
            }
        });

        let availability = present(&self.availability)
            .map(parse_bool_like)
            .transpose()?;

        let min = parse_number::<f64>("min_price", &self.min_price)?;
        let max = parse_number::<f64>("max_price", &self.max_price)?;
        let price_range = (min.is_some() || max.is_some()).then_some(PriceRange { min, max });

        Ok(FilterOptions {
            price_range,
            category,
            availability,
            min_rating: parse_number::<f64>("min_rating", &self.min_rating)?,
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number<T: FromStr>(name: &str, value: &Option<String>) -> SearchResult<Option<T>> {
    present(value)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| {
                SearchError::InvalidFilter(format!("{} must be a number, got {:?}", name, raw))
            })
        })
        .transpose()
}

pub fn parse_bool_like(raw: &str) -> SearchResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(SearchError::InvalidFilter(format!(
            "availability must be true or false, got {:?}",
            raw
        ))),
    }
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(service): Extension<Arc<ProductService>>,
) -> Result<Json<SearchResponse>, SearchError> {
    let filters = params.filters()?;
    let query = params.query.clone().unwrap_or_default();
    let limit = parse_number::<usize>("limit", &params.limit)?.unwrap_or(MAX_RESULTS);
    let offset = parse_number::<usize>("offset", &params.offset)?.unwrap_or(0);

    let ranked = service
        .search_products(&query, &filters)
        .await
        .inspect_err(|e| tracing::warn!("Search for {:?} failed: {}", query, e))?;

    let total_count = ranked.len();
    let results: Vec<_> = ranked.into_vec().into_iter().skip(offset).take(limit).collect();

    Ok(Json(SearchResponse {
        query,
        filters,
        total_count,
        count: results.len(),
        results,
    }))
}
