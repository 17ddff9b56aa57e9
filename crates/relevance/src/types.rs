use serde::{Deserialize, Serialize};

/// A purchasable variant of a catalog entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Upstream variant identifier (often a `gid://` handle).
    pub id: String,
    /// Display price, as the catalog reports it.
    #[serde(default)]
    pub price: Option<String>,
    /// Whether the catalog marks the variant sellable.
    #[serde(default)]
    pub available_for_sale: bool,
    /// Per-variant stock count. Absent means the catalog does not track
    /// quantity for this variant, which counts as in-stock.
    #[serde(default)]
    pub inventory_quantity: Option<i64>,
}

impl Variant {
    /// A variant is purchasable when it is marked sellable and its tracked
    /// quantity, if any, is positive.
    pub fn purchasable(&self) -> bool {
        self.available_for_sale && self.inventory_quantity.unwrap_or(1) > 0
    }
}

/// A catalog entry as supplied by the external retrieval step.
///
/// Read-only to this crate: nothing here mutates an entry. Text fields may
/// arrive empty when the upstream record is partially populated; matching
/// and scoring degrade gracefully rather than fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Upstream entry identifier.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Vendor / brand name.
    #[serde(default)]
    pub vendor: String,
    /// Category label (product type).
    #[serde(default)]
    pub category: String,
    /// Aggregate stock across variants.
    #[serde(default)]
    pub total_inventory: i64,
    /// Primary full-resolution image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Canonical detail-page handle.
    #[serde(default)]
    pub handle: String,
    /// Purchasable variants.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// A matched entry together with its relevance score. Higher sorts first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredEntry {
    pub entry: CatalogEntry,
    pub score: i64,
}
