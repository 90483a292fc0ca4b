//! String forms of the core sequence algorithms
//!
//! Text is processed as a sequence of `char`s (Unicode scalar values), so
//! patterns never match across or inside a multi-byte character and
//! fractional repeat counts are measured in characters.

use std::borrow::Borrow;

use seqkit_core::{algorithms, RepeatCount};

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Collect characters into a string
pub fn chars_to_string<I>(chars: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<char>,
{
    chars.into_iter().map(|c| *c.borrow()).collect()
}

fn collect_segments(segments: Vec<Vec<char>>) -> Vec<String> {
    segments.into_iter().map(String::from_iter).collect()
}

fn pattern_chars<P: AsRef<str>>(patterns: &[P]) -> Vec<Vec<char>> {
    patterns.iter().map(|pattern| chars(pattern.as_ref())).collect()
}

/// Remove every non-overlapping occurrence of `pattern`
pub fn filter_out_seq(text: &str, pattern: &str) -> String {
    String::from_iter(algorithms::filter_out_seq(&chars(text), &chars(pattern)))
}

/// Remove every character that occurs in `characters`
pub fn filter_out_occ(text: &str, characters: &str) -> String {
    String::from_iter(algorithms::filter_out_occ(&chars(text), &chars(characters)))
}

/// Remove each pattern in turn
pub fn filter_out_occ_seq<P: AsRef<str>>(text: &str, patterns: &[P]) -> String {
    String::from_iter(algorithms::filter_out_occ_seq(
        &chars(text),
        &pattern_chars(patterns),
    ))
}

/// Remove every occurrence of `character`
pub fn filter_out(text: &str, character: char) -> String {
    text.chars().filter(|c| *c != character).collect()
}

/// Repeat `text` `n` times; a fractional count appends a character prefix
pub fn repeat<N: RepeatCount>(text: &str, n: N) -> String {
    String::from_iter(algorithms::repeat(&chars(text), n))
}

/// Split around non-overlapping occurrences of `pattern`
pub fn split_seq(text: &str, pattern: &str) -> Vec<String> {
    collect_segments(algorithms::split_seq(&chars(text), &chars(pattern)))
}

/// Split at every character that occurs in `characters`
pub fn split_occ(text: &str, characters: &str) -> Vec<String> {
    collect_segments(algorithms::split_occ(&chars(text), &chars(characters)))
}

/// Split at the earliest occurrence of any pattern
pub fn split_occ_seq<P: AsRef<str>>(text: &str, patterns: &[P]) -> Vec<String> {
    collect_segments(algorithms::split_occ_seq(
        &chars(text),
        &pattern_chars(patterns),
    ))
}

/// Split around every occurrence of `character`
pub fn split(text: &str, character: char) -> Vec<String> {
    collect_segments(algorithms::split(&chars(text), &character))
}
