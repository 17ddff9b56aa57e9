use crate::normalize::normalize;

/// Normalizes `text` and splits it into whitespace-delimited tokens.
///
/// Empty tokens are discarded. Token order follows the input, although
/// matching and scoring treat the result as a set.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
