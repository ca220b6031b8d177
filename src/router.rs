use crate::products::handlers::handle_get_product;
use crate::products::service::ProductService;
use crate::search::handlers::handle_search;

use axum::extract::Extension;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;

pub const ENDPOINT_SEARCH: &str = "/api/products/search";
pub const ENDPOINT_PRODUCT: &str = "/api/products/:id";

pub fn router(service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route(ENDPOINT_SEARCH, get(handle_search))
        .route(ENDPOINT_PRODUCT, get(handle_get_product))
        .layer(Extension(service))
}

async fn handle_index(Extension(service): Extension<Arc<ProductService>>) -> Json<Value> {
    Json(json!({
        "message": "Product Search API",
        "catalog": service.catalog_name(),
        "endpoints": [ENDPOINT_SEARCH, ENDPOINT_PRODUCT],
    }))
}
