use canonical::normalize;
use fuzzy::{contains_or_similar, Tolerance};

use crate::types::CatalogEntry;

/// Normalized concatenation of an entry's searchable fields: title, vendor,
/// and category. Absent fields contribute nothing.
pub fn searchable_text(entry: &CatalogEntry) -> String {
    normalize(&format!(
        "{} {} {}",
        entry.title, entry.vendor, entry.category
    ))
}

/// Hard availability precondition: aggregate stock must be positive and at
/// least one variant independently purchasable. Entries failing this are
/// never suggested, no matter how well their text matches.
pub fn has_stock(entry: &CatalogEntry) -> bool {
    entry.total_inventory > 0 && entry.variants.iter().any(|v| v.purchasable())
}

/// Whether `entry` satisfies every query token.
///
/// A token is satisfied when the searchable blob contains it as a substring,
/// or when any blob token is containment- or similarity-related to it.
/// AND over tokens, OR over fields: the query is a conjunction of
/// requirements, each satisfiable by any field.
pub fn matches(entry: &CatalogEntry, query_tokens: &[String], tolerance: &Tolerance) -> bool {
    let blob = searchable_text(entry);
    let blob_tokens: Vec<&str> = blob.split_whitespace().collect();

    query_tokens.iter().all(|token| {
        blob.contains(token.as_str())
            || blob_tokens
                .iter()
                .any(|blob_token| contains_or_similar(blob_token, token, tolerance))
    })
}
