//! Method-call forms of the string utilities

use seqkit_core::RepeatCount;

use crate::manipulators;
use crate::trim;
use crate::wrap::{self, WrapOptions};

/// String utilities as methods on `str`.
///
/// Names that `str` already uses (`repeat`, `split`, `trim`) get a distinct
/// spelling so the inherent methods are never shadowed.
pub trait StrOps {
    /// See [`manipulators::filter_out_seq`]
    fn filter_out_seq(&self, pattern: &str) -> String;
    /// See [`manipulators::filter_out_occ`]
    fn filter_out_occ(&self, characters: &str) -> String;
    /// See [`manipulators::filter_out_occ_seq`]
    fn filter_out_occ_seq<P: AsRef<str>>(&self, patterns: &[P]) -> String;
    /// See [`manipulators::filter_out`]
    fn filter_out(&self, character: char) -> String;
    /// See [`manipulators::repeat`]
    fn repeated<N: RepeatCount>(&self, n: N) -> String;
    /// See [`manipulators::split_seq`]
    fn split_seq(&self, pattern: &str) -> Vec<String>;
    /// See [`manipulators::split_occ`]
    fn split_occ(&self, characters: &str) -> Vec<String>;
    /// See [`manipulators::split_occ_seq`]
    fn split_occ_seq<P: AsRef<str>>(&self, patterns: &[P]) -> Vec<String>;
    /// See [`manipulators::split`]
    fn split_on(&self, character: char) -> Vec<String>;
    /// See [`wrap::word_wrap`]
    fn word_wrap(&self, options: &WrapOptions) -> Vec<String>;
    /// See [`trim::trim_left`]
    fn trim_left_with(&self, delimiters: &str) -> &str;
    /// See [`trim::trim_right`]
    fn trim_right_with(&self, delimiters: &str) -> &str;
    /// See [`trim::trim`]
    fn trim_with(&self, delimiters: &str) -> &str;
    /// See [`trim::to_upper`]
    fn to_upper(&self) -> String;
    /// See [`trim::to_lower`]
    fn to_lower(&self) -> String;
    /// See [`trim::eq_ignore_case`]
    fn eq_ignore_case(&self, other: &str) -> bool;
}

impl StrOps for str {
    fn filter_out_seq(&self, pattern: &str) -> String {
        manipulators::filter_out_seq(self, pattern)
    }

    fn filter_out_occ(&self, characters: &str) -> String {
        manipulators::filter_out_occ(self, characters)
    }

    fn filter_out_occ_seq<P: AsRef<str>>(&self, patterns: &[P]) -> String {
        manipulators::filter_out_occ_seq(self, patterns)
    }

    fn filter_out(&self, character: char) -> String {
        manipulators::filter_out(self, character)
    }

    fn repeated<N: RepeatCount>(&self, n: N) -> String {
        manipulators::repeat(self, n)
    }

    fn split_seq(&self, pattern: &str) -> Vec<String> {
        manipulators::split_seq(self, pattern)
    }

    fn split_occ(&self, characters: &str) -> Vec<String> {
        manipulators::split_occ(self, characters)
    }

    fn split_occ_seq<P: AsRef<str>>(&self, patterns: &[P]) -> Vec<String> {
        manipulators::split_occ_seq(self, patterns)
    }

    fn split_on(&self, character: char) -> Vec<String> {
        manipulators::split(self, character)
    }

    fn word_wrap(&self, options: &WrapOptions) -> Vec<String> {
        wrap::word_wrap(self, options)
    }

    fn trim_left_with(&self, delimiters: &str) -> &str {
        trim::trim_left(self, delimiters)
    }

    fn trim_right_with(&self, delimiters: &str) -> &str {
        trim::trim_right(self, delimiters)
    }

    fn trim_with(&self, delimiters: &str) -> &str {
        trim::trim(self, delimiters)
    }

    fn to_upper(&self) -> String {
        trim::to_upper(self)
    }

    fn to_lower(&self) -> String {
        trim::to_lower(self)
    }

    fn eq_ignore_case(&self, other: &str) -> bool {
        trim::eq_ignore_case(self, other)
    }
}
