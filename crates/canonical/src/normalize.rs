use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes free text into the comparable form used by all matching.
///
/// Transformation order: lowercase, NFD decomposition with combining marks
/// dropped ("é" becomes "e"), anything outside `[a-z0-9 ]` treated as a
/// delimiter, consecutive delimiters collapsed to one space, edges trimmed.
///
/// Total over all inputs; an empty or symbol-only string yields `""`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Delimiters are buffered rather than pushed so that runs collapse and
    // leading/trailing ones vanish without a second pass.
    let mut pending_space = false;

    for decomposed in text.nfd() {
        if is_combining_mark(decomposed) {
            continue;
        }
        for ch in decomposed.to_lowercase() {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(ch);
            } else {
                pending_space = true;
            }
        }
    }

    out
}
