//! seqkit Core - Bounds-safe containers and generic sequence algorithms
//!
//! This crate provides the container primitives and algorithms shared by
//! every other seqkit crate, with no I/O dependencies. It includes:
//!
//! - The [`Sequence`] capability trait over contiguous, random-access data
//! - Default-on-out-of-range access ([`access`])
//! - Bounded vector, array, slice, string and string-view wrappers
//! - Arrays indexed by an enumerator instead of an integer
//! - Combine / filter / repeat / split algorithms
//! - Operator sugar over the algorithms
//! - Reactive properties (getter/setter interception)
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod access;
pub mod algorithms;
pub mod containers;
pub mod enum_array;
pub mod error;
pub mod ops;
pub mod property;
pub mod repeat;
pub mod sequence;
pub mod strings;

// Re-export commonly used types
pub use access::{BoundedRead, BoundedWrite};
pub use algorithms::{
    combine, combine_value, filter_out, filter_out_occ, filter_out_occ_seq, filter_out_seq,
    find_subsequence, repeat, repeat_len, split, split_occ, split_occ_seq, split_seq,
    subordinate, try_repeat, SequenceExt,
};
pub use containers::{BoundedArray, BoundedSlice, BoundedVec};
pub use enum_array::{EnumArray, IndexEnum};
pub use error::{Result, SeqError};
pub use property::{Observable, Property, ReadOnly};
pub use repeat::RepeatCount;
pub use sequence::Sequence;
pub use strings::{BoundedStr, BoundedString};

/// Owned output of every single-sequence algorithm.
pub type ResultSeq<T> = Vec<T>;

/// Owned output of every splitting algorithm.
pub type ResultSeqNested<T> = Vec<Vec<T>>;
