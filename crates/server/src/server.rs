//! Server initialization and routing.
//!
//! Router construction, the middleware stack, and graceful shutdown
//! handling live here so both the binary and in-process tests share them.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{log_requests, request_id};
use crate::routes::{api_info, health, not_found, products, vendors};
use crate::state::ServerState;

/// Build the axum router with all routes and middleware.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let timeout = TimeoutLayer::new(state.config.timeout());

    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/products", get(products::search_products))
        .route("/debug/vendors", get(vendors::list_vendors))
        .fallback(not_found)
        .layer(timeout)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(request_id))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the storesearch HTTP server.
///
/// Installs tracing, builds shared state and the router, binds the
/// configured address, and serves until SIGTERM or Ctrl+C.
pub async fn start_server(config: crate::config::ServerConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with_target(false)
        .json()
        .init();

    let addr: SocketAddr = config.socket_addr()?;
    let state = Arc::new(ServerState::new(config));
    let app = build_router(state.clone());

    tracing::info!(
        %addr,
        store = %state.config.shop_domain,
        cache_ttl_secs = state.config.cache_ttl_secs,
        max_results = state.config.max_results,
        "starting storesearch server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
