//! Product Search Library
//!
//! Core of the product search API. The binary (`main.rs`) only parses
//! configuration, picks a backend and serves the router.
//!
//! ## Modules
//! - **`search`**: The filter-and-rank query model. Validates filter options,
//!   translates them into a predicate or an Elasticsearch query, and ranks
//!   results by rating then name.
//! - **`catalog`**: Backing stores behind the `CatalogAccessor` trait: an
//!   in-memory catalog and an Elasticsearch client.
//! - **`cache`**: TTL cache for single-product lookups.
//! - **`products`**: `ProductService`, combining a catalog and a cache.
//! - **`router`**: Axum routes for the HTTP API.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: `SearchError` and its HTTP mapping.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod products;
pub mod router;
pub mod search;
