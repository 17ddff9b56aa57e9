use fuzzy::{is_similar, Tolerance};

use crate::table::BrandTable;

/// Score for an exact token match against a brand-key token.
const EXACT_WEIGHT: i64 = 3;
/// Score for containment in either direction.
const CONTAINS_WEIGHT: i64 = 2;
/// Score for a similarity hit when neither exact nor containment matched.
const SIMILAR_WEIGHT: i64 = 2;

/// Minimum accumulated score before a brand is reported.
pub const DEFAULT_MIN_SCORE: i64 = 3;

/// Scores query tokens against a [`BrandTable`] to recognize brand intent.
#[derive(Debug, Clone)]
pub struct BrandDetector {
    table: BrandTable,
    tolerance: Tolerance,
    min_score: i64,
}

impl BrandDetector {
    pub fn new(table: BrandTable) -> Self {
        Self {
            table,
            tolerance: Tolerance::default(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }

    /// Overrides the similarity tolerance used for token comparison.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Overrides the detection threshold. Catalog data with short brand
    /// names sometimes runs at 2 where the canonical policy is 3.
    pub fn with_min_score(mut self, min_score: i64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn table(&self) -> &BrandTable {
        &self.table
    }

    /// Returns the brand key best supported by `query_tokens`, or `None`
    /// when no key reaches the threshold.
    ///
    /// Every query token is compared against every token of every key:
    /// exact equality scores highest, containment next, similarity last and
    /// only when the cheaper checks missed. The first key to reach the
    /// maximum score in table order wins ties.
    pub fn detect(&self, query_tokens: &[String]) -> Option<&str> {
        let mut best: Option<(&str, i64)> = None;

        for alias in self.table.iter() {
            let key_tokens: Vec<&str> = alias.key.split(' ').collect();
            let mut score = 0i64;

            for token in query_tokens {
                for key_token in &key_tokens {
                    if token == key_token {
                        score += EXACT_WEIGHT;
                    } else if token.contains(key_token) || key_token.contains(token.as_str()) {
                        score += CONTAINS_WEIGHT;
                    } else if is_similar(token, key_token, &self.tolerance) {
                        score += SIMILAR_WEIGHT;
                    }
                }
            }

            match best {
                Some((_, top)) if score <= top => {}
                _ if score > 0 => best = Some((alias.key.as_str(), score)),
                _ => {}
            }
        }

        best.filter(|&(_, score)| score >= self.min_score)
            .map(|(key, _)| key)
    }
}
