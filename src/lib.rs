//! Workspace umbrella crate for storesearch.
//!
//! This crate stitches together the pure relevance core (normalization,
//! token similarity, brand detection, matching, ranking, and the result
//! cache) behind a single API entry point. The HTTP surface lives in the
//! separate `storesearch-server` crate; everything re-exported here is
//! synchronous, I/O-free, and safe to call from any runtime.

pub use brands::{default_table, BrandAlias, BrandDetector, BrandTable};
pub use cache::{query_key, TtlCache, DEFAULT_TTL, MATCH_REVISION};
pub use canonical::{normalize, tokenize};
pub use fuzzy::{contains_or_similar, edit_distance, is_similar, Tolerance};
pub use relevance::{
    has_stock, matches, score, searchable_text, CatalogEntry, RankWeights, ScoredEntry,
    SearchEngine, SearchOutcome, Variant,
};

/// Runs the full relevance pipeline with default configuration: the
/// production brand table, the canonical tolerance bands, and the canonical
/// rank weights.
///
/// Callers that need alternate alias tables, tolerances, or weights build a
/// [`SearchEngine`] directly.
pub fn search_catalog(raw_query: &str, candidates: Vec<CatalogEntry>) -> SearchOutcome {
    SearchEngine::default().search(raw_query, candidates)
}
