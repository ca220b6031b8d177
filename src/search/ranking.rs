use super::query::ProductQuery;
use crate::catalog::types::Product;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Maximum number of products a single search returns.
pub const MAX_RESULTS: usize = 100;

/// Rank order: rating descending, then name ascending by byte order
/// (case-sensitive, so "Zebra" sorts before "apple"), then id ascending.
pub fn compare(a: &Product, b: &Product) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Narrows `candidates` with the structural filters of `query`, sorts them
/// into rank order, drops repeated ids and keeps the best `limit`.
///
/// Text matching is left to the accessor, since the index matches fuzzily
/// and the in-memory scan does not.
pub fn rank(mut candidates: Vec<Product>, query: &ProductQuery, limit: usize) -> Vec<Product> {
    candidates.retain(|product| query.admits(product));
    candidates.sort_by(compare);

    let mut seen = HashSet::new();
    candidates.retain(|product| seen.insert(product.id.clone()));
    candidates.truncate(limit);
    candidates
}
