use super::service::ProductService;
use crate::catalog::types::{Product, ProductId};
use crate::error::SearchError;

use axum::extract::Path;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_get_product(
    Path(id): Path<String>,
    Extension(service): Extension<Arc<ProductService>>,
) -> Result<Json<Product>, SearchError> {
    let id = ProductId::new(id);

    match service.get_product(&id).await {
        Ok(product) => Ok(Json(product)),
        Err(e) => {
            tracing::debug!("Lookup of product {} failed: {}", id, e);
            Err(e)
        }
    }
}
