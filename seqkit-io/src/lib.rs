//! seqkit I/O - Binary chunks and file helpers
//!
//! This crate provides the byte-level persistence layer for seqkit:
//!
//! - A length-prefixed chunk format (`u64` little-endian length, then data)
//! - Conversions between plain (`Pod`) values and chunk bodies
//! - Streaming chunk writers and readers with read limits
//! - Whole-file text reading

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod chunk;
pub mod error;
pub mod stream;

// Re-export commonly used types
pub use chunk::{
    decode_chunk, encode_chunk, from_chunk, read_all, read_chunk, read_data, slice_from_chunk,
    slice_to_chunk, to_chunk, write_chunk, write_data, ChunkLimits, LEN_PREFIX_SIZE,
};
pub use error::{ChunkError, Result};
pub use stream::{ChunkReader, ChunkWriter, Chunks};
