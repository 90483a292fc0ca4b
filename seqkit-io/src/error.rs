//! Error types for chunk I/O

use thiserror::Error;

/// Chunk I/O error types
#[derive(Debug, Error)]
pub enum ChunkError {
    /// I/O operation failed while reading or writing data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Chunk length does not match the size of the requested type.
    #[error("Chunk size ({actual}) does not match type size ({expected})")]
    SizeMismatch {
        /// Size of the requested type (or a multiple of it)
        expected: usize,
        /// Length of the chunk
        actual: usize,
    },
    /// A configured limit was exceeded.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
    /// Input ended inside a length prefix or a chunk body.
    #[error("Unexpected end of file")]
    UnexpectedEof,
    /// File content is not valid UTF-8.
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ChunkError>;
