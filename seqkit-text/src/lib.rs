//! seqkit Text - String algorithms, word wrapping and formatting
//!
//! This crate builds on seqkit core's sequence algorithms:
//!
//! - Character-level filter / repeat / split over `&str`
//! - Greedy word wrapping with optional forced breaks
//! - Trimming with custom delimiter sets and ASCII case utilities
//! - A configurable sequence formatter with a compact spec syntax
//! - ANSI escape codes for styled terminal output
//! - The [`StrOps`] extension trait

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod ansi;
pub mod error;
pub mod ext;
pub mod format;
pub mod manipulators;
pub mod trim;
pub mod wrap;

// Re-export commonly used types
pub use ansi::Style;
pub use error::{FormatError, Result};
pub use ext::StrOps;
pub use format::{
    char_to_string, to_string, to_string_with, Align, ElementFormat, FormatOptions, FormatSpec,
    Joined,
};
pub use manipulators::{
    chars_to_string, filter_out, filter_out_occ, filter_out_occ_seq, filter_out_seq, repeat,
    split, split_occ, split_occ_seq, split_seq,
};
pub use trim::{
    eq_ignore_case, eq_ignore_case_char, to_lower, to_upper, trim, trim_left, trim_right,
    DEFAULT_DELIMITERS,
};
pub use wrap::{word_wrap, WrapOptions};
