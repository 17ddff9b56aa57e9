//! API route handlers.
//!
//! - `health`: liveness probe
//! - `products`: the ranked product search endpoint
//! - `vendors`: debug listing of vendor spellings for alias curation

pub mod health;
pub mod products;
pub mod vendors;

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::ServerError;

/// Service banner (GET /).
pub async fn api_info() -> impl IntoResponse {
    Json(json!({
        "name": "storesearch",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/products", "/debug/vendors", "/health"],
    }))
}

/// 404 handler for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
