//! Reference-text and property tests for seqkit text

use proptest::prelude::*;
use seqkit_core::algorithms;
use seqkit_test_utils::{assertions::assert_segments_eq, strategies, Fixtures};
use seqkit_text::{
    filter_out_seq, repeat, split, split_occ_seq, split_seq, to_string, trim, trim_left,
    trim_right, word_wrap, FormatSpec, StrOps, WrapOptions, DEFAULT_DELIMITERS,
};

#[test]
fn wraps_reference_paragraph() {
    let lines = word_wrap(Fixtures::long_paragraph(), &WrapOptions::with_width(40));
    assert_segments_eq(&lines, &Fixtures::long_paragraph_wrapped(), "word_wrap");
}

#[test]
fn force_wraps_reference_paragraph() {
    let options = WrapOptions {
        force: true,
        ..WrapOptions::with_width(40)
    };
    let lines = word_wrap(Fixtures::long_paragraph(), &options);
    assert_segments_eq(&lines, &Fixtures::long_paragraph_force_wrapped(), "forced word_wrap");
}

#[test]
fn splits_reference_text_on_pattern() {
    let segments = split_seq(Fixtures::the_text(), "the ");
    assert_segments_eq(&segments, &Fixtures::the_text_segments(), "split_seq");
}

#[test]
fn splits_reference_text_on_blank() {
    let words = split(Fixtures::the_text(), ' ');
    assert_eq!(words.len(), 34);
    assert_eq!(words.first().map(String::as_str), Some("This"));
    assert_eq!(words.last().map(String::as_str), Some("text"));
    assert_eq!(words.iter().filter(|w| *w == "the").count(), 8);
}

#[test]
fn trims_padded_text() {
    let padded = Fixtures::padded_text();
    assert_eq!(trim_left(padded, DEFAULT_DELIMITERS), "Ayo word \t");
    assert_eq!(trim_right(padded, DEFAULT_DELIMITERS), " \tAyo word");
    assert_eq!(trim(padded, DEFAULT_DELIMITERS), "Ayo word");
}

#[test]
fn repeats_spam() {
    let spam = "Spam. ";
    assert_eq!(repeat(spam, 10usize), spam.repeat(10));
    let almost_ten = 10.0 - 1.0 / 6.0 + f64::from(f32::EPSILON);
    assert_eq!(
        spam.repeated(almost_ten),
        "Spam. Spam. Spam. Spam. Spam. Spam. Spam. Spam. Spam. Spam."
    );
}

#[test]
fn filters_pattern_from_reference_text() {
    let filtered = filter_out_seq(Fixtures::the_text(), "the ");
    assert!(!filtered.contains("the "));
    assert_eq!(filtered, Fixtures::the_text_segments().concat());
}

#[test]
fn formats_split_output_from_spec() {
    let options = FormatSpec::parse("e'|' p'<' s'>'").unwrap();
    let segments = split_occ_seq("a::b->c", &["::", "->"]);
    assert_eq!(to_string(&segments, &options), "<a>|<b>|<c>");
}

proptest! {
    #[test]
    fn text_split_agrees_with_core_on_chars(
        text in strategies::words(),
        pattern in "[a-c ]{1,2}",
    ) {
        let chars: Vec<char> = text.chars().collect();
        let pattern_chars: Vec<char> = pattern.chars().collect();
        let core: Vec<String> = algorithms::split_seq(&chars, &pattern_chars)
            .into_iter()
            .map(String::from_iter)
            .collect();
        prop_assert_eq!(split_seq(&text, &pattern), core);
    }

    #[test]
    fn forced_lines_fit_width(text in strategies::words(), width in 1usize..30) {
        let lines = word_wrap(&text, &WrapOptions { force: true, ..WrapOptions::with_width(width) });
        for line in &lines {
            prop_assert!(line.chars().count() <= width + 1);
        }
        // Only the consumed blanks are missing.
        let rejoined: usize = lines.iter().map(|line| line.chars().count()).sum();
        prop_assert!(rejoined <= text.chars().count());
    }

    #[test]
    fn trim_is_idempotent(text in strategies::blank_padded_text()) {
        let once = trim(&text, DEFAULT_DELIMITERS);
        prop_assert_eq!(trim(once, DEFAULT_DELIMITERS), once);
        prop_assert!(!once.starts_with([' ', '\t']));
        prop_assert!(!once.ends_with([' ', '\t']));
    }
}
