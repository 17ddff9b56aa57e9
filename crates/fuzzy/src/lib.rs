//! Storesearch similarity engine.
//!
//! Decides when two already-normalized tokens are "close enough" to count as
//! the same word. The building blocks, from cheapest to dearest:
//!
//! - [`edit_distance`]: classic Levenshtein over chars
//! - [`is_similar`]: distance within a length-scaled [`Tolerance`]
//! - [`contains_or_similar`]: substring containment first, similarity second
//!
//! An absolute distance threshold would be unfair across token lengths: one
//! edit in a three-letter word is a different word, while one edit in a
//! ten-letter word is a typo. Tolerance therefore scales with the longer of
//! the two inputs.
//!
//! Inputs are expected to come out of `canonical::normalize`; none of these
//! functions normalize on their own.

mod distance;
mod tolerance;

pub use crate::distance::edit_distance;
pub use crate::tolerance::Tolerance;

/// True when the edit distance between `a` and `b` is within the tolerance
/// keyed by the longer input's char length.
pub fn is_similar(a: &str, b: &str, tolerance: &Tolerance) -> bool {
    let len = a.chars().count().max(b.chars().count());
    edit_distance(a, b) <= tolerance.max_distance(len)
}

/// True when either token contains the other as a substring, or the two are
/// similar under `tolerance`.
///
/// Containment is checked first: it is cheap and catches prefix/suffix
/// relationships (plurals, compound words) that edit distance alone would
/// penalize.
pub fn contains_or_similar(a: &str, b: &str, tolerance: &Tolerance) -> bool {
    if a.contains(b) || b.contains(a) {
        return true;
    }
    is_similar(a, b, tolerance)
}
