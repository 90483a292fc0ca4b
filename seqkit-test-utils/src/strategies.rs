//! Proptest strategies for sequences, patterns and repeat counts
//!
//! Element values are drawn from a small alphabet so that patterns actually
//! occur in the generated sequences.

use proptest::collection::vec;
use proptest::prelude::*;

/// Largest element value produced by the small-alphabet strategies
pub const ALPHABET: u8 = 4;

/// Sequence of small-alphabet elements with length in `0..max_len`
pub fn sequence(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    vec(0..ALPHABET, 0..max_len)
}

/// Non-empty sequence of small-alphabet elements
pub fn non_empty_sequence(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    vec(0..ALPHABET, 1..max_len.max(2))
}

/// Non-empty pattern of one to three elements
pub fn pattern() -> impl Strategy<Value = Vec<u8>> {
    vec(0..ALPHABET, 1..4)
}

/// One to three non-empty patterns
pub fn patterns() -> impl Strategy<Value = Vec<Vec<u8>>> {
    vec(pattern(), 1..4)
}

/// Repeat count with a fractional part, including negatives
pub fn repeat_count() -> impl Strategy<Value = f64> {
    -3.0f64..12.0
}

/// Printable ASCII words separated by single spaces
pub fn words() -> impl Strategy<Value = String> {
    vec("[a-zA-Z]{1,12}", 1..24).prop_map(|words| words.join(" "))
}

/// Text made of letters, blanks and tabs
pub fn blank_padded_text() -> impl Strategy<Value = String> {
    "[ \t]{0,4}[a-z ]{0,16}[ \t]{0,4}"
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn sequences_stay_in_alphabet(items in sequence(32)) {
            prop_assert!(items.len() < 32);
            prop_assert!(items.iter().all(|item| *item < ALPHABET));
        }

        #[test]
        fn patterns_are_never_empty(patterns in patterns()) {
            prop_assert!(patterns.iter().all(|pattern| !pattern.is_empty()));
        }

        #[test]
        fn words_have_no_double_blanks(text in words()) {
            prop_assert!(!text.contains("  "));
            prop_assert!(!text.starts_with(' '));
        }
    }
}
