use super::query::ProductQuery;
use super::ranking::{MAX_RESULTS, rank};
use super::types::{FilterOptions, RankedResult};
use crate::catalog::CatalogAccessor;
use crate::error::SearchResult;

/// Runs a search against whichever catalog backs the service.
///
/// Filters are validated before the catalog is touched, so an invalid filter
/// never costs a round trip. Catalog failures propagate unchanged; no retries.
pub async fn search(
    query: &str,
    filters: &FilterOptions,
    catalog: &dyn CatalogAccessor,
) -> SearchResult<RankedResult> {
    let query = ProductQuery::new(query, filters)?;

    tracing::debug!(
        "Searching {} catalog: text={:?} filters={:?}",
        catalog.name(),
        query.text(),
        query.filters()
    );

    let candidates = catalog.candidates(&query, MAX_RESULTS).await?;
    let fetched = candidates.len();
    let ranked = rank(candidates, &query, MAX_RESULTS);

    tracing::debug!("Ranked {} of {} candidates", ranked.len(), fetched);

    Ok(RankedResult::from_ranked(ranked))
}
