//! Error types for seqkit text

use thiserror::Error;

/// Errors raised while parsing a format specification or style list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A key was not followed by an opening quote
    #[error("Expected ' after key '{key}' at offset {offset}")]
    ExpectedQuote {
        /// The key character
        key: char,
        /// Byte offset of the key in the specification
        offset: usize,
    },

    /// A quoted value was never closed
    #[error("Unterminated value for key '{key}'")]
    UnterminatedQuote {
        /// The key character
        key: char,
    },

    /// A key other than `e`, `p`, `s` or `f`
    #[error("Unknown format key '{key}' at offset {offset}")]
    UnknownKey {
        /// The offending character
        key: char,
        /// Byte offset of the key in the specification
        offset: usize,
    },

    /// The element format is not `[[fill]align][width][.precision]`
    #[error("Invalid element format: {0}")]
    InvalidElementFormat(String),

    /// A style name that [`crate::ansi::Style::from_name`] does not know
    #[error("Unknown style '{0}'")]
    UnknownStyle(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FormatError>;
