//! Storesearch relevance layer.
//!
//! Consumes an already-retrieved list of catalog entries plus a raw query and
//! produces the ranked survivors. Sits on top of `canonical` (text
//! normalization), `fuzzy` (token similarity), and `brands` (brand-intent
//! detection); performs no I/O of its own.
//!
//! The [`SearchEngine`] runs the whole decision pipeline: tokenize, detect
//! brand, restrict to the brand's vendors when one was detected (falling back
//! to the full set if that empties the list), drop out-of-stock entries,
//! keep entries satisfying every query token, and sort by descending
//! relevance score. Ties keep retrieval order.

pub mod engine;
pub mod matcher;
pub mod ranker;
pub mod types;

pub use crate::engine::{SearchEngine, SearchOutcome};
pub use crate::matcher::{has_stock, matches, searchable_text};
pub use crate::ranker::{score, RankWeights};
pub use crate::types::{CatalogEntry, ScoredEntry, Variant};
