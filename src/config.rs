//! Runtime configuration, read from the command line with environment
//! variable fallbacks.

use crate::cache::DEFAULT_TTL;
use crate::catalog::elastic::DEFAULT_INDEX;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Demo catalog held in process memory.
    Memory,
    /// Remote Elasticsearch index.
    Elasticsearch,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "product-search", about = "Product search API", version)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "PRODUCT_SEARCH_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    #[arg(long, env = "PRODUCT_SEARCH_BACKEND", value_enum, default_value_t = Backend::Memory)]
    pub backend: Backend,

    /// Base URL of the Elasticsearch cluster.
    #[arg(long, env = "ELASTICSEARCH_URL", default_value = "http://localhost:9200")]
    pub elasticsearch_url: String,

    #[arg(long, env = "ELASTICSEARCH_INDEX", default_value = DEFAULT_INDEX)]
    pub elasticsearch_index: String,

    /// Per-request timeout against the search engine, in milliseconds.
    #[arg(long, env = "ELASTICSEARCH_TIMEOUT_MS", default_value_t = 2000)]
    pub elasticsearch_timeout_ms: u64,

    /// Lifetime of cached single-product lookups, in seconds.
    #[arg(long, env = "PRODUCT_CACHE_TTL_SECS", default_value_t = DEFAULT_TTL.as_secs())]
    pub cache_ttl_secs: u64,

    #[arg(long, env = "PRODUCT_SEARCH_LOG", default_value = "info")]
    pub log_level: tracing::Level,
}

impl Config {
    pub fn elasticsearch_timeout(&self) -> Duration {
        Duration::from_millis(self.elasticsearch_timeout_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["product-search"]).unwrap();

        assert_eq!(config.backend, Backend::Memory);
        assert_eq!(config.elasticsearch_index, "products");
        assert_eq!(config.cache_ttl(), Duration::from_secs(3600));
        assert_eq!(config.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_elasticsearch_backend_flags() {
        let config = Config::try_parse_from([
            "product-search",
            "--backend",
            "elasticsearch",
            "--elasticsearch-url",
            "http://search.internal:9200",
            "--elasticsearch-timeout-ms",
            "750",
            "--bind",
            "0.0.0.0:9000",
        ])
        .unwrap();

        assert_eq!(config.backend, Backend::Elasticsearch);
        assert_eq!(config.elasticsearch_url, "http://search.internal:9200");
        assert_eq!(config.elasticsearch_timeout(), Duration::from_millis(750));
        assert_eq!(config.bind.port(), 9000);
    }

    #[test]
    fn test_rejects_unknown_backend() {
        let result = Config::try_parse_from(["product-search", "--backend", "postgres"]);
        assert!(result.is_err());
    }
}
