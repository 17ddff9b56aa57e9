use canonical::normalize;
use serde::{Deserialize, Serialize};

/// One known brand: a canonical key plus the literal vendor-name spellings
/// under which it appears in catalog data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandAlias {
    /// Canonical brand key, stored normalized (one or more tokens).
    pub key: String,
    /// Vendor spellings exactly as the catalog may carry them.
    pub vendors: Vec<String>,
}

impl BrandAlias {
    pub fn new<I, S>(key: &str, vendors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: normalize(key),
            vendors: vendors.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered collection of brand aliases.
///
/// Iteration order is stable and observable: when two keys tie on detection
/// score, the earlier entry wins. Construct via [`BrandTable::from_aliases`]
/// or deserialize from configuration; the table is never mutated at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct BrandTable {
    aliases: Vec<BrandAlias>,
}

impl BrandTable {
    /// Builds a table, normalizing every key on the way in.
    pub fn from_aliases(aliases: Vec<BrandAlias>) -> Self {
        let aliases = aliases
            .into_iter()
            .map(|mut alias| {
                alias.key = normalize(&alias.key);
                alias
            })
            .collect();
        Self { aliases }
    }

    pub fn iter(&self) -> impl Iterator<Item = &BrandAlias> {
        self.aliases.iter()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Literal vendor spellings recorded for `key`, if the key is known.
    pub fn vendors_for(&self, key: &str) -> Option<&[String]> {
        self.aliases
            .iter()
            .find(|alias| alias.key == key)
            .map(|alias| alias.vendors.as_slice())
    }
}

/// The alias table observed in production catalog data.
///
/// IGORA maps to Schwarzkopf as well: it is a Schwarzkopf line, not a vendor
/// of its own.
pub fn default_table() -> BrandTable {
    BrandTable::from_aliases(vec![
        BrandAlias::new(
            "kerastase",
            ["Kérastase", "KERASTASE", "KÉRASTASE", "Kerastase"],
        ),
        BrandAlias::new(
            "loreal professionnel",
            [
                "L'Oréal Professionnel",
                "L'OREAL PROFESSIONNEL",
                "L'Oreal Professionnel",
                "LOREAL PROFESSIONNEL",
            ],
        ),
        BrandAlias::new("redken", ["Redken", "REDKEN"]),
        BrandAlias::new("schwarzkopf", ["Schwarzkopf", "SCHWARZKOPF"]),
        BrandAlias::new("igora", ["IGORA", "Schwarzkopf"]),
        BrandAlias::new("sebastian", ["Sebastian Professional", "SEBASTIAN", "Sebastian"]),
        BrandAlias::new("alfaparf", ["Alfaparf", "ALFAPARF"]),
        BrandAlias::new("moroccanoil", ["Moroccanoil", "MOROCCANOIL"]),
        BrandAlias::new("olaplex", ["Olaplex", "OLAPLEX"]),
        BrandAlias::new("revlon", ["Revlon", "REVLON"]),
        BrandAlias::new("fanola", ["Fanola", "FANOLA"]),
        BrandAlias::new("lakme", ["Lakmé", "LAKMÉ", "Lakme", "LAKME"]),
    ])
}
