//! Elasticsearch Catalog
//!
//! Evaluates searches inside an Elasticsearch index over its REST API.
//!
//! ## Endpoints used
//! - `POST {base}/{index}/_search` with the body built by
//!   [`ProductQuery::to_elastic_body`].
//! - `GET {base}/{index}/_doc/{id}` for single-product lookups.
//!
//! Any transport error, timeout, non-success status or undecodable body is
//! reported as `BackingStoreUnavailable`. The client never retries.

use super::CatalogAccessor;
use super::types::{Product, ProductDocument, ProductId};
use crate::error::{SearchError, SearchResult};
use crate::search::query::ProductQuery;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;

/// Index searched when none is configured.
pub const DEFAULT_INDEX: &str = "products";

pub struct ElasticCatalog {
    http_client: reqwest::Client,
    base_url: Url,
    index: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchHits {
    pub hits: HitList,
}

#[derive(Debug, Deserialize)]
pub struct HitList {
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(rename = "_source")]
    pub source: ProductDocument,
}

#[derive(Debug, Deserialize)]
struct GetDocument {
    #[serde(default)]
    found: bool,
    #[serde(rename = "_id")]
    id: ProductId,
    #[serde(rename = "_source")]
    source: Option<ProductDocument>,
}

impl ElasticCatalog {
    pub fn new(base_url: &str, index: &str, timeout: Duration) -> SearchResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            SearchError::BackingStoreUnavailable(format!("invalid search engine url {}: {}", base_url, e))
        })?;

        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url,
            index: index.to_string(),
        })
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    fn endpoint(&self, segments: &[&str]) -> SearchResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SearchError::BackingStoreUnavailable(format!(
                    "search engine url cannot be a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(&self.index)
            .extend(segments);
        Ok(url)
    }
}

/// Turns a `_search` response into products, taking each id from `_id`.
pub fn parse_hits(response: SearchHits) -> Vec<Product> {
    response
        .hits
        .hits
        .into_iter()
        .map(|hit| hit.source.into_product(hit.id))
        .collect()
}

#[async_trait]
impl CatalogAccessor for ElasticCatalog {
    fn name(&self) -> &'static str {
        "elasticsearch"
    }

    async fn candidates(&self, query: &ProductQuery, limit: usize) -> SearchResult<Vec<Product>> {
        let url = self.endpoint(&["_search"])?;
        let body = query.to_elastic_body(limit);

        tracing::debug!("POST {} body={}", url, body);

        let response = self
            .http_client
            .post(url)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!("Search engine request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Search engine answered {} for index {}", status, self.index);
            return Err(SearchError::BackingStoreUnavailable(format!(
                "search request to index {} failed with {}",
                self.index, status
            )));
        }

        let hits: SearchHits = response.json().await?;
        Ok(parse_hits(hits))
    }

    async fn product(&self, id: &ProductId) -> SearchResult<Option<Product>> {
        let url = self.endpoint(&["_doc", id.as_str()])?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .inspect_err(|e| tracing::error!("Search engine request failed: {}", e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(SearchError::BackingStoreUnavailable(format!(
                "document lookup in index {} failed with {}",
                self.index,
                response.status()
            )));
        }

        let document: GetDocument = response.json().await?;
        match (document.found, document.source) {
            (true, Some(source)) => Ok(Some(source.into_product(document.id))),
            _ => Ok(None),
        }
    }
}
