use canonical::normalize;
use fuzzy::{is_similar, Tolerance};
use serde::{Deserialize, Serialize};

use crate::types::CatalogEntry;

/// Per-field scoring weights.
///
/// Vendor is weighted highest: brand intent dominates search behavior in
/// this domain. The brand bonus is added on top when a brand was detected in
/// the query and the entry's vendor agrees with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankWeights {
    pub vendor: i64,
    pub title: i64,
    pub category: i64,
    pub brand_bonus: i64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            vendor: 4,
            title: 2,
            category: 1,
            brand_bonus: 3,
        }
    }
}

/// Relevance score for `entry` against the query tokens; higher is better.
///
/// Each query token contributes the field weight for every searchable field
/// that contains it. When `detected_brand` is set and the entry's vendor
/// contains or is similar to that key, the flat brand bonus is added once.
pub fn score(
    entry: &CatalogEntry,
    query_tokens: &[String],
    detected_brand: Option<&str>,
    weights: &RankWeights,
    tolerance: &Tolerance,
) -> i64 {
    let title = normalize(&entry.title);
    let vendor = normalize(&entry.vendor);
    let category = normalize(&entry.category);

    let mut total = 0i64;
    for token in query_tokens {
        if vendor.contains(token.as_str()) {
            total += weights.vendor;
        }
        if title.contains(token.as_str()) {
            total += weights.title;
        }
        if category.contains(token.as_str()) {
            total += weights.category;
        }
    }

    if let Some(brand) = detected_brand {
        if vendor.contains(brand) || is_similar(&vendor, brand, tolerance) {
            total += weights.brand_bonus;
        }
    }

    total
}
