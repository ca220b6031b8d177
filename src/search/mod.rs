//! Search Module
//!
//! Filter-and-rank query model for the product catalog.
//!
//! ## Overview
//! A search takes a free-text query plus [`FilterOptions`](types::FilterOptions)
//! and yields a [`RankedResult`](types::RankedResult): products sorted by
//! rating (descending), then name (ascending, byte order), capped at
//! [`MAX_RESULTS`](ranking::MAX_RESULTS). The result is the same whether the
//! catalog is scanned in memory or queried in Elasticsearch.
//!
//! ## Submodules
//! - **`query`**: Filter validation and the two translations of a query
//!   (direct predicate, Elasticsearch DSL).
//! - **`ranking`**: Ordering, de-duplication and truncation.
//! - **`engine`**: The `search` entry point tying a query to a catalog.
//! - **`handlers`**: HTTP request handler and parameter parsing.
//! - **`types`**: Filter options and response DTOs.

pub mod engine;
pub mod handlers;
pub mod query;
pub mod ranking;
pub mod types;
