use brands::{default_table, BrandDetector, BrandTable};
use canonical::tokenize;
use fuzzy::{is_similar, Tolerance};

use crate::matcher::{has_stock, matches};
use crate::ranker::{score, RankWeights};
use crate::types::{CatalogEntry, ScoredEntry};


/// Outcome of a search run: the brand the query was understood to carry, if
/// any, and the ranked surviving entries.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub detected_brand: Option<String>,
    pub hits: Vec<ScoredEntry>,
}

/// The relevance pipeline, fully configured.
///
/// Pure and synchronous: candidates are handed in by the caller after the
/// external retrieval step completes, and the engine runs to completion
/// without blocking on anything. Stateless apart from its configuration, so
/// a single instance can serve any number of concurrent requests.
pub struct SearchEngine {
    detector: BrandDetector,
    tolerance: Tolerance,
    weights: RankWeights,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(default_table())
    }
}

impl SearchEngine {
    pub fn new(table: BrandTable) -> Self {
        Self {
            detector: BrandDetector::new(table),
            tolerance: Tolerance::default(),
            weights: RankWeights::default(),
        }
    }

    pub fn with_detector(mut self, detector: BrandDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_weights(mut self, weights: RankWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn detector(&self) -> &BrandDetector {
        &self.detector
    }

    /// Brand key detected in `raw_query`, if any. Exposed separately so the
    /// retrieval step can issue brand-directed upstream queries before the
    /// ranking run.
    pub fn detect_brand(&self, raw_query: &str) -> Option<&str> {
        self.detector.detect(&tokenize(raw_query))
    }

    /// Vendor spellings recorded for a detected brand key.
    pub fn vendor_spellings(&self, brand_key: &str) -> Option<&[String]> {
        self.detector.table().vendors_for(brand_key)
    }

    /// Filters and ranks `candidates` against `raw_query`.
    ///
    /// Steps: tokenize; detect brand; restrict to entries whose vendor
    /// agrees with the detected brand, falling back to the unrestricted set
    /// when the restriction empties the list; drop entries without stock;
    /// keep entries satisfying every token; sort by descending score. The
    /// sort is stable, so equal scores keep retrieval order.
    pub fn search(&self, raw_query: &str, candidates: Vec<CatalogEntry>) -> SearchOutcome {
        let query_tokens = tokenize(raw_query);
        let detected_brand = self.detector.detect(&query_tokens).map(str::to_string);

        tracing::debug!(
            query = raw_query,
            tokens = query_tokens.len(),
            brand = detected_brand.as_deref(),
            candidates = candidates.len(),
            "relevance pipeline start"
        );

        let candidates = match detected_brand.as_deref() {
            Some(brand) => self.restrict_to_brand(candidates, brand),
            None => candidates,
        };

        let mut hits: Vec<ScoredEntry> = candidates
            .into_iter()
            .filter(has_stock)
            .filter(|entry| matches(entry, &query_tokens, &self.tolerance))
            .map(|entry| {
                let score = score(
                    &entry,
                    &query_tokens,
                    detected_brand.as_deref(),
                    &self.weights,
                    &self.tolerance,
                );
                ScoredEntry { entry, score }
            })
            .collect();

        // Stable sort keeps equal scores in retrieval order.
        hits.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(hits = hits.len(), "relevance pipeline done");

        SearchOutcome {
            detected_brand,
            hits,
        }
    }

    /// Keeps entries whose vendor contains or is similar to the brand key.
    /// Alias data does not always cover a vendor's literal spelling, so an
    /// empty restriction falls back to the full candidate set rather than
    /// returning nothing.
    fn restrict_to_brand(
        &self,
        candidates: Vec<CatalogEntry>,
        brand: &str,
    ) -> Vec<CatalogEntry> {
        let restricted: Vec<CatalogEntry> = candidates
            .iter()
            .filter(|entry| self.vendor_carries_brand(&entry.vendor, brand))
            .cloned()
            .collect();

        if restricted.is_empty() {
            candidates
        } else {
            restricted
        }
    }

    fn vendor_carries_brand(&self, vendor: &str, brand: &str) -> bool {
        let vendor = canonical::normalize(vendor);
        vendor.contains(brand) || is_similar(&vendor, brand, &self.tolerance)
    }
}
