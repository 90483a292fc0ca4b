//! The `Sequence` capability shared by all algorithms
//!
//! A sequence is anything that exposes its elements as one contiguous,
//! finite, random-access slice of a known element type. Algorithms are
//! generic over this trait instead of over concrete containers.

use smallvec::SmallVec;

/// Contiguous, finite, random-access storage of `Item`s.
pub trait Sequence {
    /// Element type
    type Item;

    /// View the elements as a slice, in order
    fn as_slice(&self) -> &[Self::Item];

    /// Number of elements
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the sequence has no elements
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<A: smallvec::Array> Sequence for SmallVec<A> {
    type Item = A::Item;

    fn as_slice(&self) -> &[A::Item] {
        self
    }
}

/// Strings are sequences of their UTF-8 bytes.
impl Sequence for str {
    type Item = u8;

    fn as_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Sequence for String {
    type Item = u8;

    fn as_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn as_slice(&self) -> &[S::Item] {
        (**self).as_slice()
    }
}
