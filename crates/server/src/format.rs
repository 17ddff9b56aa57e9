//! Result shaping: scored entries to display-ready records.
//!
//! Sibling concern to the ranking core: it shares the result-shaping stage
//! but carries no relevance logic of its own.

use once_cell::sync::Lazy;
use regex::Regex;
use relevance::{ScoredEntry, Variant};
use serde::{Deserialize, Serialize};

/// Thumbnail dimension suffix inserted before the image extension.
const THUMB_SUFFIX: &str = "_200x200";

/// A prior size suffix (`_WxH`, `_small`, `_medium`, `_large`) sitting right
/// before the extension, with an optional query string.
static SIZE_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(_\d+x\d+|_small|_medium|_large)?(\.(?:png|jpe?g|webp))(\?.*)?$")
        .expect("size-suffix regex is valid")
});

/// The image extension plus optional query string, for suffix insertion.
static EXTENSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\.(?:png|jpe?g|webp))(\?.*)?$").expect("extension regex is valid")
});

/// Display-ready search result record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedProduct {
    pub id: String,
    pub variant_id: Option<String>,
    pub title: String,
    pub brand: String,
    pub category: String,
    pub price: String,
    pub image: Option<String>,
    pub url: String,
    pub add_to_cart: Option<String>,
}

/// Shapes the top `max_results` scored entries for display.
pub fn format_results(
    hits: &[ScoredEntry],
    store_base_url: &str,
    max_results: usize,
) -> Vec<FormattedProduct> {
    hits.iter()
        .take(max_results)
        .map(|hit| format_entry(hit, store_base_url))
        .collect()
}

fn format_entry(hit: &ScoredEntry, store_base_url: &str) -> FormattedProduct {
    let entry = &hit.entry;
    let variant = pick_variant(&entry.variants);
    let variant_id = variant.and_then(|v| short_variant_id(&v.id));

    FormattedProduct {
        id: entry.id.clone(),
        variant_id: variant_id.clone(),
        title: entry.title.clone(),
        brand: entry.vendor.clone(),
        category: entry.category.clone(),
        price: variant
            .and_then(|v| v.price.clone())
            .unwrap_or_else(|| "N/A".to_string()),
        image: entry.image_url.as_deref().map(thumbnail),
        url: format!("{store_base_url}/products/{}", entry.handle),
        add_to_cart: variant_id.map(|id| format!("{store_base_url}/cart/{id}:1")),
    }
}

/// First purchasable variant, else the first variant at all. The price shown
/// should belong to something the shopper can actually add to the cart.
fn pick_variant(variants: &[Variant]) -> Option<&Variant> {
    variants
        .iter()
        .find(|v| v.purchasable())
        .or_else(|| variants.first())
}

/// Trailing segment of a `gid://` variant handle, as used by cart links.
fn short_variant_id(id: &str) -> Option<String> {
    let tail = id.rsplit('/').next().unwrap_or(id);
    if tail.is_empty() {
        None
    } else {
        Some(tail.to_string())
    }
}

/// Rewrites a full-resolution image URL into the fixed small-thumbnail form:
/// any prior size suffix is stripped, then `_200x200` is inserted before the
/// extension. Query strings survive the rewrite.
pub fn thumbnail(url: &str) -> String {
    let cleaned = SIZE_SUFFIX_RE.replace(url, "${2}${3}");
    EXTENSION_RE
        .replace(&cleaned, format!("{THUMB_SUFFIX}${{1}}${{2}}"))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relevance::CatalogEntry;

    #[test]
    fn inserts_thumbnail_suffix_before_extension() {
        assert_eq!(
            thumbnail("https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a_200x200.jpg"
        );
        assert_eq!(
            thumbnail("https://cdn.example.com/a.PNG"),
            "https://cdn.example.com/a_200x200.PNG"
        );
    }

    #[test]
    fn strips_prior_size_suffixes() {
        assert_eq!(
            thumbnail("https://cdn.example.com/a_600x600.jpg"),
            "https://cdn.example.com/a_200x200.jpg"
        );
        assert_eq!(
            thumbnail("https://cdn.example.com/a_small.webp"),
            "https://cdn.example.com/a_200x200.webp"
        );
        assert_eq!(
            thumbnail("https://cdn.example.com/a_large.jpeg"),
            "https://cdn.example.com/a_200x200.jpeg"
        );
    }

    #[test]
    fn preserves_query_strings() {
        assert_eq!(
            thumbnail("https://cdn.example.com/a_medium.jpg?v=173"),
            "https://cdn.example.com/a_200x200.jpg?v=173"
        );
    }

    #[test]
    fn leaves_unrecognized_urls_alone() {
        assert_eq!(
            thumbnail("https://cdn.example.com/a.svg"),
            "https://cdn.example.com/a.svg"
        );
    }

    fn scored(entry: CatalogEntry) -> ScoredEntry {
        ScoredEntry { entry, score: 1 }
    }

    fn base_entry() -> CatalogEntry {
        CatalogEntry {
            id: "gid://shopify/Product/1".into(),
            title: "Color Extend Shampoo".into(),
            vendor: "Redken".into(),
            category: "Shampoo".into(),
            total_inventory: 7,
            image_url: Some("https://cdn.example.com/a_600x600.jpg?v=9".into()),
            handle: "color-extend-shampoo".into(),
            variants: vec![
                Variant {
                    id: "gid://shopify/ProductVariant/10".into(),
                    price: Some("31.00".into()),
                    available_for_sale: false,
                    inventory_quantity: Some(0),
                },
                Variant {
                    id: "gid://shopify/ProductVariant/11".into(),
                    price: Some("24.50".into()),
                    available_for_sale: true,
                    inventory_quantity: Some(7),
                },
            ],
        }
    }

    #[test]
    fn formats_a_scored_entry_for_display() {
        let hits = vec![scored(base_entry())];
        let out = format_results(&hits, "https://example-store.com", 12);
        assert_eq!(out.len(), 1);
        let p = &out[0];
        assert_eq!(p.variant_id.as_deref(), Some("11"));
        assert_eq!(p.price, "24.50");
        assert_eq!(
            p.image.as_deref(),
            Some("https://cdn.example.com/a_200x200.jpg?v=9")
        );
        assert_eq!(p.url, "https://example-store.com/products/color-extend-shampoo");
        assert_eq!(
            p.add_to_cart.as_deref(),
            Some("https://example-store.com/cart/11:1")
        );
    }

    #[test]
    fn falls_back_to_first_variant_when_none_purchasable() {
        let mut entry = base_entry();
        entry.variants[1].available_for_sale = false;
        let out = format_results(&[scored(entry)], "https://example-store.com", 12);
        assert_eq!(out[0].variant_id.as_deref(), Some("10"));
        assert_eq!(out[0].price, "31.00");
    }

    #[test]
    fn missing_variants_and_price_degrade_to_markers() {
        let mut entry = base_entry();
        entry.variants.clear();
        entry.image_url = None;
        let out = format_results(&[scored(entry)], "https://example-store.com", 12);
        let p = &out[0];
        assert_eq!(p.variant_id, None);
        assert_eq!(p.price, "N/A");
        assert_eq!(p.image, None);
        assert_eq!(p.add_to_cart, None);
    }

    #[test]
    fn caps_at_max_results() {
        let hits: Vec<ScoredEntry> = (0..20).map(|_| scored(base_entry())).collect();
        assert_eq!(format_results(&hits, "https://example-store.com", 12).len(), 12);
    }
}
