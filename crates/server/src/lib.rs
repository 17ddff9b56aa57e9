//! Storesearch server - HTTP search surface over a remote storefront catalog.
//!
//! Thin I/O glue around the relevance core: it accepts a free-text query,
//! retrieves candidate products from the upstream catalog (brand-directed
//! vendor queries first, a general query as fallback), runs the matching and
//! ranking pipeline, shapes the survivors for display, and caches the final
//! list per normalized query.
//!
//! # Endpoints
//!
//! - `GET /` - service banner
//! - `GET /health` - liveness probe with uptime
//! - `GET /products?q=...` - ranked product search
//! - `GET /debug/vendors` - distinct vendor spellings seen upstream
//!
//! # Quick start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use catalog::{CatalogSource, ShopifyCatalog};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use format::FormattedProduct;
pub use server::{build_router, start_server};
pub use state::ServerState;
