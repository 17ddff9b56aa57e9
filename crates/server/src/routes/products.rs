use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use relevance::CatalogEntry;
use serde::{Deserialize, Serialize};

use crate::error::ServerResult;
use crate::format::{format_results, FormattedProduct};
use crate::state::ServerState;

/// Query-string parameters for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Search response body: a plain array of results, or an informational
/// payload when there is nothing to show. The message form distinguishes
/// "searched, found nothing" from a transport-level empty response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Results(Vec<FormattedProduct>),
    Notice { message: String },
}

impl SearchResponse {
    fn notice(message: &str) -> Self {
        SearchResponse::Notice {
            message: message.to_string(),
        }
    }

    fn from_results(results: Vec<FormattedProduct>) -> Self {
        if results.is_empty() {
            SearchResponse::notice("No results")
        } else {
            SearchResponse::Results(results)
        }
    }
}

/// Ranked product search (GET /products?q=...).
///
/// A blank query is a caller precondition violation and short-circuits with
/// guidance before the core is ever invoked. Otherwise: consult the result
/// cache, retrieve candidates on a miss (brand-directed vendor queries
/// first, the general catalog slice as fallback), run the relevance
/// pipeline, shape the survivors, and cache the final list.
pub async fn search_products(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchParams>,
) -> ServerResult<Json<SearchResponse>> {
    let raw_query = params.q.unwrap_or_default();
    if raw_query.trim().is_empty() {
        return Ok(Json(SearchResponse::notice(
            "Please provide a ?q= search parameter",
        )));
    }

    let cache_key = cache::query_key(&raw_query);
    if let Some(cached) = state.results.get(&cache_key) {
        tracing::debug!(query = %raw_query, "result cache hit");
        return Ok(Json(SearchResponse::from_results(cached)));
    }

    let candidates = retrieve_candidates(&state, &raw_query).await?;
    let outcome = state.engine.search(&raw_query, candidates);
    let formatted = format_results(
        &outcome.hits,
        &state.config.store_base_url,
        state.config.max_results,
    );

    state.results.put(cache_key, formatted.clone());

    tracing::info!(
        query = %raw_query,
        brand = outcome.detected_brand.as_deref(),
        results = formatted.len(),
        "search served"
    );

    Ok(Json(SearchResponse::from_results(formatted)))
}

/// Brand-directed retrieval first: when the query names a known brand, each
/// recorded vendor spelling is tried as an exact upstream vendor filter.
/// Any failure or an empty union falls through to the general catalog slice.
async fn retrieve_candidates(
    state: &ServerState,
    raw_query: &str,
) -> ServerResult<Vec<CatalogEntry>> {
    if let Some(brand) = state.engine.detect_brand(raw_query) {
        let spellings: Vec<String> = state
            .engine
            .vendor_spellings(brand)
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        let mut candidates = Vec::new();
        for vendor in &spellings {
            let batch = state.catalog.products_by_vendor(vendor).await?;
            candidates.extend(batch);
        }

        if !candidates.is_empty() {
            return Ok(candidates);
        }
        tracing::debug!(brand, "brand-directed retrieval empty, falling back");
    }

    state.catalog.all_products().await
}
