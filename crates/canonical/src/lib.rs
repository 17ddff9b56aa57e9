//! Storesearch canonical text layer.
//!
//! Every string that takes part in matching (the caller's query and the
//! searchable fields of a catalog entry) goes through [`normalize`] first so
//! that all downstream comparisons operate over the same alphabet.
//!
//! ## What we do
//!
//! - Lowercasing
//! - Accent stripping (NFD decomposition, combining marks dropped)
//! - Everything outside `[a-z0-9 ]` becomes a single space
//! - Whitespace collapsed and trimmed
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same input, same output, on
//! any machine. Normalization is idempotent: feeding the output back in
//! returns it unchanged.

mod normalize;
mod token;

pub use crate::normalize::normalize;
pub use crate::token::tokenize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Redken Shampoo  "), "redken shampoo");
    }

    #[test]
    fn strips_accents() {
        assert_eq!(normalize("Kérastase"), "kerastase");
        assert_eq!(normalize("Lakmé"), "lakme");
        assert_eq!(normalize("Kérastase"), normalize("Kerastase"));
    }

    #[test]
    fn collapses_non_alphanumeric_to_spaces() {
        assert_eq!(normalize("L'Oréal Professionnel"), "l oreal professionnel");
        assert_eq!(normalize("shampoo-300ml (new!)"), "shampoo 300ml new");
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(normalize("hello \t\n  world"), "hello world");
    }

    #[test]
    fn idempotent() {
        for s in ["Kérastase  Résist!", "  plain  ", "", "a-b_c.d"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn empty_and_symbol_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  !!! ??? "), "");
    }

    #[test]
    fn tokenize_discards_empties_and_preserves_order() {
        assert_eq!(
            tokenize("  Redken,  Shampoo 300ml "),
            vec!["redken", "shampoo", "300ml"]
        );
        assert!(tokenize("  ***  ").is_empty());
    }
}
