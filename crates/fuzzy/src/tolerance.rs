use serde::{Deserialize, Serialize};

/// Length-scaled edit-distance allowance.
///
/// The band is chosen by the longer of the two compared tokens. The default
/// table keeps false positives low for short tokens while tolerating
/// realistic typos in longer ones:
///
/// | longer length | max distance |
/// |---------------|--------------|
/// | <= 4          | 1            |
/// | <= 6          | 1            |
/// | <= 10         | 2            |
/// | > 10          | 3            |
///
/// Serde-friendly so stricter or looser variants can be supplied through
/// configuration instead of silently hard-coding one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tolerance {
    /// Allowance for tokens of length 4 or less.
    pub short: usize,
    /// Allowance for tokens of length 5 to 6.
    pub medium: usize,
    /// Allowance for tokens of length 7 to 10.
    pub long: usize,
    /// Allowance for anything longer.
    pub very_long: usize,
}

impl Tolerance {
    /// Maximum edit distance allowed for a comparison whose longer side has
    /// `len` chars.
    pub fn max_distance(&self, len: usize) -> usize {
        match len {
            0..=4 => self.short,
            5..=6 => self.medium,
            7..=10 => self.long,
            _ => self.very_long,
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            short: 1,
            medium: 1,
            long: 2,
            very_long: 3,
        }
    }
}
