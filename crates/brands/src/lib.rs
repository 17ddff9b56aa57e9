//! Storesearch brand detection.
//!
//! Free-text queries frequently carry brand intent ("kerastase shampoo",
//! "redken 300ml"), and vendors spell their own names inconsistently in
//! catalog data. This crate scores a query's tokens against a fixed
//! [`BrandTable`] of known aliases and, when confident enough, names the
//! brand the shopper meant.
//!
//! The table is an explicitly constructed value injected into the
//! [`BrandDetector`], never a hidden global, so tests and deployments can
//! swap in alternate alias sets.

mod detector;
mod table;

pub use crate::detector::BrandDetector;
pub use crate::table::{default_table, BrandAlias, BrandTable};

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> BrandDetector {
        BrandDetector::new(default_table())
    }

    #[test]
    fn detects_exact_brand_token() {
        let tokens = canonical::tokenize("kerastase shampoo");
        assert_eq!(detector().detect(&tokens), Some("kerastase"));
    }

    #[test]
    fn detection_is_deterministic() {
        let d = detector();
        let tokens = canonical::tokenize("kerastase shampoo");
        for _ in 0..10 {
            assert_eq!(d.detect(&tokens), Some("kerastase"));
        }
    }

    #[test]
    fn similarity_alone_stays_below_the_canonical_threshold() {
        // A lone typo'd brand token scores 2 via similarity: not enough at
        // the canonical threshold of 3.
        let tokens = canonical::tokenize("kerastse nutritive");
        assert_eq!(detector().detect(&tokens), None);
    }

    #[test]
    fn loose_threshold_tolerates_a_typo_in_the_brand_token() {
        let d = BrandDetector::new(default_table()).with_min_score(2);
        let tokens = canonical::tokenize("kerastse nutritive");
        assert_eq!(d.detect(&tokens), Some("kerastase"));
    }

    #[test]
    fn accented_spelling_resolves_to_the_same_key() {
        let tokens = canonical::tokenize("Kérastase");
        assert_eq!(detector().detect(&tokens), Some("kerastase"));
    }

    #[test]
    fn no_brand_in_query_yields_none() {
        let tokens = canonical::tokenize("blue shampoo 300ml");
        assert_eq!(detector().detect(&tokens), None);
    }

    #[test]
    fn empty_tokens_yield_none() {
        assert_eq!(detector().detect(&[]), None);
    }

    #[test]
    fn multi_token_key_accumulates_across_tokens() {
        let tokens = canonical::tokenize("loreal professionnel serum");
        assert_eq!(detector().detect(&tokens), Some("loreal professionnel"));
    }

    #[test]
    fn first_key_wins_on_tied_scores() {
        let table = BrandTable::from_aliases(vec![
            BrandAlias::new("alpha", ["Alpha"]),
            BrandAlias::new("alpha pro", ["Alpha Pro"]),
        ]);
        let d = BrandDetector::new(table);
        // "alpha" scores 3 on both keys; table order breaks the tie.
        assert_eq!(d.detect(&["alpha".to_string()]), Some("alpha"));
    }

    #[test]
    fn threshold_is_configurable() {
        let table = BrandTable::from_aliases(vec![BrandAlias::new("redken", ["Redken"])]);
        // Containment alone scores 2: below the canonical threshold of 3,
        // enough under the looser observed variant.
        let strict = BrandDetector::new(table.clone());
        let loose = BrandDetector::new(table).with_min_score(2);
        let tokens = vec!["redk".to_string()];
        assert_eq!(strict.detect(&tokens), None);
        assert_eq!(loose.detect(&tokens), Some("redken"));
    }

    #[test]
    fn table_round_trips_through_serde() {
        let table = default_table();
        let json = serde_json::to_string(&table).expect("serialize");
        let back: BrandTable = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(table, back);
    }
}
