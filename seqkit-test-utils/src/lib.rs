//! seqkit Test Utilities
//!
//! This crate provides shared fixtures, proptest strategies and assertion
//! helpers for the seqkit test suites. It depends on no other seqkit crate,
//! so every crate can use it as a dev-dependency.

use serde_json::Value;

pub mod strategies;

/// Reference inputs and expected outputs shared across test suites
pub struct Fixtures;

impl Fixtures {
    /// `1..=10`
    pub fn one_to_ten() -> Vec<i32> {
        (1..=10).collect()
    }

    /// `1..=10` with 3 and 8 doubled
    pub fn doubled_threes_and_eights() -> Vec<i32> {
        vec![1, 2, 3, 3, 4, 5, 6, 7, 8, 8, 9, 10]
    }

    /// `1..=10` with 4 and 7 doubled
    pub fn doubled_fours_and_sevens() -> Vec<i32> {
        vec![1, 2, 3, 4, 4, 5, 6, 7, 7, 8, 9, 10]
    }

    /// Sentence with many occurrences of `"the "`
    pub fn the_text() -> &'static str {
        "This is the text with the once again a lot of the words in the text \
         as of the day I am writing the text as this is the way to test the text"
    }

    /// `the_text` split on `"the "`
    pub fn the_text_segments() -> Vec<&'static str> {
        vec![
            "This is ",
            "text with ",
            "once again a lot of ",
            "words in ",
            "text as of ",
            "day I am writing ",
            "text as this is ",
            "way to test ",
            "text",
        ]
    }

    /// Text padded with blanks and tabs on both sides
    pub fn padded_text() -> &'static str {
        " \tAyo word \t"
    }

    /// Paragraph containing one word longer than any reasonable width
    pub fn long_paragraph() -> &'static str {
        "Never gonna give you up, Never gonna let you down, \
         Never gonna run around and desert you. Never gonna make you cry, \
         Never gonna say Lopadotemachoselachogaleokranioleipsanodrimhypotrimmatosilphioparaomelitokatakechymenokichlepikossyphophattoperisteralektryonoptekephalliokigklopeleiolagoiosiraiobaphetraganopterygon, \
         Never gonna tell a lie and hurt you."
    }

    /// `long_paragraph` wrapped at width 40
    pub fn long_paragraph_wrapped() -> Vec<&'static str> {
        vec![
            "Never gonna give you up, Never gonna let",
            "you down, Never gonna run around and",
            "desert you. Never gonna make you cry,",
            "Never gonna say",
            "Lopadotemachoselachogaleokranioleipsanodrimhypotrimmatosilphioparaomelitokatakechymenokichlepikossyphophattoperisteralektryonoptekephalliokigklopeleiolagoiosiraiobaphetraganopterygon,",
            "Never gonna tell a lie and hurt you.",
        ]
    }

    /// `long_paragraph` wrapped at width 40 with long words cut
    pub fn long_paragraph_force_wrapped() -> Vec<&'static str> {
        vec![
            "Never gonna give you up, Never gonna let",
            "you down, Never gonna run around and",
            "desert you. Never gonna make you cry,",
            "Never gonna say",
            "Lopadotemachoselachogaleokranioleipsanod",
            "rimhypotrimmatosilphioparaomelitokatakec",
            "hymenokichlepikossyphophattoperisteralek",
            "tryonoptekephalliokigklopeleiolagoiosira",
            "iobaphetraganopterygon, Never gonna tell",
            "a lie and hurt you.",
        ]
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use super::Value;
    use std::fmt::Debug;

    /// Assert that two JSON values are semantically equal (ignoring formatting)
    pub fn assert_json_equal(actual: &Value, expected: &Value, context: &str) {
        if actual != expected {
            panic!(
                "JSON assertion failed in {}:\nExpected: {}\nActual: {}",
                context, expected, actual
            );
        }
    }

    /// Assert that two nested sequences match, reporting the first differing segment
    pub fn assert_segments_eq<A, E>(actual: &[A], expected: &[E], context: &str)
    where
        A: PartialEq<E> + Debug,
        E: Debug,
    {
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            if a != e {
                panic!(
                    "Segment {} differs in {}:\nExpected: {:?}\nActual: {:?}",
                    i, context, e, a
                );
            }
        }
        if actual.len() != expected.len() {
            panic!(
                "Segment count differs in {}: expected {}, got {}",
                context,
                expected.len(),
                actual.len()
            );
        }
    }
}
