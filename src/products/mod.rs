//! Products Module
//!
//! `ProductService` ties a catalog accessor to the single-product cache and
//! is what the HTTP layer talks to.
//!
//! ## Submodules
//! - **`service`**: search delegation, cached lookup by id, pricing helper.
//! - **`handlers`**: HTTP handler for `GET /api/products/:id`.

pub mod handlers;
pub mod service;

#[cfg(test)]
mod tests;
