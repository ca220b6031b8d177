use clap::Parser;
use product_search::cache::memory::MemoryCache;
use product_search::catalog::CatalogAccessor;
use product_search::catalog::elastic::ElasticCatalog;
use product_search::catalog::memory::InMemoryCatalog;
use product_search::config::{Backend, Config};
use product_search::products::service::ProductService;
use product_search::router::router;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Catalog backend:
    let catalog: Arc<dyn CatalogAccessor> = match config.backend {
        Backend::Memory => {
            let catalog = InMemoryCatalog::demo();
            tracing::info!("Serving in-memory demo catalog ({} products)", catalog.len());
            Arc::new(catalog)
        }
        Backend::Elasticsearch => {
            let catalog = ElasticCatalog::new(
                &config.elasticsearch_url,
                &config.elasticsearch_index,
                config.elasticsearch_timeout(),
            )?;
            tracing::info!(
                "Searching index '{}' at {}",
                catalog.index(),
                config.elasticsearch_url
            );
            Arc::new(catalog)
        }
    };

    // 2. Product service with single-entity cache:
    let service = Arc::new(ProductService::new(
        catalog,
        Arc::new(MemoryCache::new()),
        config.cache_ttl(),
    ));

    // 3. HTTP server:
    let app = router(service);

    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
