use std::net::SocketAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Server configuration.
///
/// Loaded from an optional `storesearch` config file layered under
/// `STORESEARCH__`-prefixed environment variables, so deployments can set
/// e.g. `STORESEARCH__SHOP_DOMAIN` without a file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Upstream store domain, e.g. `my-store.myshopify.com`.
    #[serde(default)]
    pub shop_domain: String,

    /// Admin API access token for the upstream catalog.
    #[serde(default)]
    pub shop_token: String,

    /// Public storefront base URL used to build product and cart links.
    #[serde(default = "default_store_base_url")]
    pub store_base_url: String,

    /// Result-cache time-to-live in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Maximum number of formatted results returned to the caller.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Minimum brand-detection score. The canonical policy is 3; the looser
    /// historical behavior ran at 2.
    #[serde(default = "default_brand_min_score")]
    pub brand_min_score: i64,

    /// Enable permissive CORS.
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level / env-filter directive.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            shop_domain: String::new(),
            shop_token: String::new(),
            store_base_url: default_store_base_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
            max_results: default_max_results(),
            brand_min_score: default_brand_min_score(),
            enable_cors: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a `storesearch` file (if present) and
    /// environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("storesearch").required(false))
            .add_source(config::Environment::with_prefix("STORESEARCH").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Socket address to bind to.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr.parse()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_store_base_url() -> String {
    "https://example-store.com".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    600
}

fn default_max_results() -> usize {
    12
}

fn default_brand_min_score() -> i64 {
    3
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.cache_ttl_secs, 600);
        assert_eq!(cfg.max_results, 12);
        assert_eq!(cfg.brand_min_score, 3);
        assert!(cfg.socket_addr().is_ok());
    }

    #[test]
    fn deserializes_from_partial_json() {
        let cfg: ServerConfig =
            serde_json::from_str(r#"{"port": 8080, "shop_domain": "demo.myshopify.com"}"#)
                .expect("partial config");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.shop_domain, "demo.myshopify.com");
        assert_eq!(cfg.max_results, 12);
    }
}
