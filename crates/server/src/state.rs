use std::sync::Arc;

use brands::{default_table, BrandDetector};
use cache::TtlCache;
use relevance::SearchEngine;

use crate::catalog::{CatalogSource, ShopifyCatalog};
use crate::config::ServerConfig;
use crate::format::FormattedProduct;

/// Shared application state.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,

    /// The relevance pipeline (pure, shared across requests).
    pub engine: Arc<SearchEngine>,

    /// Upstream candidate supplier.
    pub catalog: Arc<dyn CatalogSource>,

    /// Formatted-result cache keyed by normalized query.
    pub results: Arc<TtlCache<Vec<FormattedProduct>>>,
}

impl ServerState {
    /// Production state: a Shopify-backed catalog source.
    pub fn new(config: ServerConfig) -> Self {
        let catalog = Arc::new(ShopifyCatalog::new(&config.shop_domain, &config.shop_token));
        Self::with_catalog(config, catalog)
    }

    /// State with an explicit catalog source; tests inject fixtures here.
    pub fn with_catalog(config: ServerConfig, catalog: Arc<dyn CatalogSource>) -> Self {
        let detector =
            BrandDetector::new(default_table()).with_min_score(config.brand_min_score);
        let engine = SearchEngine::default().with_detector(detector);
        let results = TtlCache::new(config.cache_ttl());

        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            catalog,
            results: Arc::new(results),
        }
    }
}
