//! Error types for seqkit core
//!
//! Out-of-range reads, negative repeat counts and empty patterns are not
//! errors anywhere in this crate; they are defined away by defaulting and
//! clamping. The fallible operations are run-time constructions that
//! cannot be checked statically and repeats too large to allocate.

use thiserror::Error;

/// seqkit core error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A fixed-length container was built from input of the wrong length.
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Length required by the container
        expected: usize,
        /// Length of the supplied input
        actual: usize,
    },

    /// A repeat count would produce more elements than a vector can hold.
    #[error("Repeat count too large for a sequence of {len} elements")]
    RepeatOverflow {
        /// Length of the repeated sequence
        len: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SeqError>;
