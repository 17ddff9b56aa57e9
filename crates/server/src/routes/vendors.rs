use std::collections::BTreeSet;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::error::ServerResult;
use crate::state::ServerState;

/// Debug listing of distinct vendor spellings (GET /debug/vendors).
///
/// Exists to validate how vendors are literally written upstream when
/// curating the brand alias table.
pub async fn list_vendors(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<Json<serde_json::Value>> {
    let products = state.catalog.all_products().await?;

    let vendors: BTreeSet<String> = products
        .into_iter()
        .map(|p| p.vendor)
        .filter(|v| !v.is_empty())
        .collect();

    let vendors: Vec<String> = vendors.into_iter().collect();
    Ok(Json(json!({
        "count": vendors.len(),
        "vendors": vendors,
    })))
}
