//! Bounded vector, array and slice wrappers
//!
//! Each wrapper behaves exactly like the container it wraps (through
//! `Deref`) except that `[]`, `at`, `front` and `back` never fault: past the
//! end they yield the element type's default, and mutable access past the
//! end hands out a scratch slot owned by the instance.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::access::{BoundedRead, BoundedWrite};
use crate::sequence::Sequence;

/// Growable vector with default-on-out-of-range indexing.
#[derive(Clone, Default)]
pub struct BoundedVec<T> {
    items: Vec<T>,
    fallback: T,
    scratch: T,
}

impl<T: Default> BoundedVec<T> {
    /// Create an empty vector
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create an empty vector with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Wrap an existing vector
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items,
            fallback: T::default(),
            scratch: T::default(),
        }
    }

    /// Unwrap into the plain vector
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Borrow as a non-owning bounded slice
    pub fn as_bounded_slice(&self) -> BoundedSlice<'_, T> {
        BoundedSlice::new(&self.items)
    }
}

impl<T> Sequence for BoundedVec<T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> BoundedRead for BoundedVec<T> {
    fn fallback(&self) -> &T {
        &self.fallback
    }
}

impl<T: Default> BoundedWrite for BoundedVec<T> {
    fn storage_and_scratch(&mut self) -> (&mut [T], &mut T) {
        (&mut self.items, &mut self.scratch)
    }
}

impl<T> Deref for BoundedVec<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.items
    }
}

impl<T> DerefMut for BoundedVec<T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }
}

impl<T> Index<usize> for BoundedVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T: Default> IndexMut<usize> for BoundedVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index)
    }
}

impl<T: Default> From<Vec<T>> for BoundedVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Default + Clone> From<&[T]> for BoundedVec<T> {
    fn from(items: &[T]) -> Self {
        Self::from_vec(items.to_vec())
    }
}

impl<T: Default, const N: usize> From<[T; N]> for BoundedVec<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_vec(Vec::from(items))
    }
}

impl<T> From<BoundedVec<T>> for Vec<T> {
    fn from(vec: BoundedVec<T>) -> Self {
        vec.items
    }
}

impl<T: Default> FromIterator<T> for BoundedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for BoundedVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BoundedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BoundedVec<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoundedVec").field(&self.items).finish()
    }
}

// Equality and hashing only look at the stored elements.
impl<T: PartialEq> PartialEq for BoundedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for BoundedVec<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for BoundedVec<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.items == other
    }
}

impl<T: PartialEq> PartialEq<[T]> for BoundedVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for BoundedVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items == other
    }
}

impl<T: Hash> Hash for BoundedVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

/// Create a [`BoundedVec`] with the same syntax as `vec!`.
#[macro_export]
macro_rules! bounded_vec {
    () => {
        $crate::containers::BoundedVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::containers::BoundedVec::from_vec(::std::vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::containers::BoundedVec::from_vec(::std::vec![$($x),+])
    };
}

/// Fixed-size array with default-on-out-of-range indexing.
#[derive(Clone)]
pub struct BoundedArray<T, const N: usize> {
    items: [T; N],
    fallback: T,
    scratch: T,
}

impl<T: Default, const N: usize> BoundedArray<T, N> {
    /// Wrap an existing array
    pub fn new(items: [T; N]) -> Self {
        Self {
            items,
            fallback: T::default(),
            scratch: T::default(),
        }
    }

    /// Unwrap into the plain array
    pub fn into_inner(self) -> [T; N] {
        self.items
    }

    /// Borrow as a non-owning bounded slice
    pub fn as_bounded_slice(&self) -> BoundedSlice<'_, T> {
        BoundedSlice::new(&self.items)
    }
}

impl<T: Default, const N: usize> Default for BoundedArray<T, N> {
    fn default() -> Self {
        Self::new(std::array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize> Sequence for BoundedArray<T, N> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T, const N: usize> BoundedRead for BoundedArray<T, N> {
    fn fallback(&self) -> &T {
        &self.fallback
    }
}

impl<T: Default, const N: usize> BoundedWrite for BoundedArray<T, N> {
    fn storage_and_scratch(&mut self) -> (&mut [T], &mut T) {
        (&mut self.items, &mut self.scratch)
    }
}

impl<T, const N: usize> Deref for BoundedArray<T, N> {
    type Target = [T; N];

    fn deref(&self) -> &[T; N] {
        &self.items
    }
}

impl<T, const N: usize> DerefMut for BoundedArray<T, N> {
    fn deref_mut(&mut self) -> &mut [T; N] {
        &mut self.items
    }
}

impl<T, const N: usize> Index<usize> for BoundedArray<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T: Default, const N: usize> IndexMut<usize> for BoundedArray<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index)
    }
}

impl<T: Default, const N: usize> From<[T; N]> for BoundedArray<T, N> {
    fn from(items: [T; N]) -> Self {
        Self::new(items)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedArray<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoundedArray").field(&self.items).finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for BoundedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for BoundedArray<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items == *other
    }
}

/// Non-owning, read-only view with default-on-out-of-range indexing.
#[derive(Clone)]
pub struct BoundedSlice<'a, T> {
    items: &'a [T],
    fallback: T,
}

impl<'a, T: Default> BoundedSlice<'a, T> {
    /// View an existing slice
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            fallback: T::default(),
        }
    }

    /// The viewed slice, with the original lifetime
    pub fn as_inner(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Sequence for BoundedSlice<'_, T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self.items
    }
}

impl<T> BoundedRead for BoundedSlice<'_, T> {
    fn fallback(&self) -> &T {
        &self.fallback
    }
}

impl<T> Deref for BoundedSlice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items
    }
}

impl<T> Index<usize> for BoundedSlice<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<'a, T: Default> From<&'a [T]> for BoundedSlice<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T: Default> From<&'a Vec<T>> for BoundedSlice<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<'a, T: Default> From<&'a BoundedVec<T>> for BoundedSlice<'a, T> {
    fn from(vec: &'a BoundedVec<T>) -> Self {
        Self::new(&vec.items)
    }
}

impl<'a, T> IntoIterator for &'a BoundedSlice<'_, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedSlice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoundedSlice").field(&self.items).finish()
    }
}

impl<T: PartialEq> PartialEq for BoundedSlice<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_indexing() {
        let values = bounded_vec![1, 2, 3, 4, 5];
        for i in 0..values.len() {
            assert_eq!(values[i], i as i32 + 1);
        }
        for i in values.len()..values.len() * 2 {
            assert_eq!(values[i], 0);
            assert_eq!(*values.at(i), 0);
        }
    }

    #[test]
    fn test_vec_front_back() {
        let values = bounded_vec![3, 4, 5];
        assert_eq!(*values.front(), 3);
        assert_eq!(*values.back(), 5);

        let empty: BoundedVec<i32> = BoundedVec::new();
        assert_eq!(*empty.front(), 0);
        assert_eq!(*empty.back(), 0);
    }

    #[test]
    fn test_vec_invalid_write_is_noop() {
        let mut values = bounded_vec![1, 2, 3];
        values[10] = 42;
        assert_eq!(values, vec![1, 2, 3]);
        // The scratch slot is reset before it is handed out again.
        assert_eq!(values[11], 0);
        assert_eq!(*values.at_mut(12), 0);
    }

    #[test]
    fn test_vec_write_after_invalid_write_does_not_leak() {
        let mut values = bounded_vec![1, 2, 3];
        values[7] = 5;
        // A read through the shared path never sees the scratch slot.
        assert_eq!(values[7], 0);
        assert_eq!(values.value_at(7), 0);
    }

    #[test]
    fn test_vec_valid_write() {
        let mut values = bounded_vec![1, 2, 3];
        values[1] = 20;
        *values.back_mut() += 1;
        *values.front_mut() -= 1;
        assert_eq!(values, vec![0, 20, 4]);
    }

    #[test]
    fn test_vec_empty_back_mut_is_scratch() {
        let mut empty: BoundedVec<String> = BoundedVec::new();
        empty.back_mut().push_str("lost");
        assert!(empty.is_empty());
        assert_eq!(empty.back(), "");
    }

    #[test]
    fn test_vec_delegates_to_vec() {
        let mut values: BoundedVec<i32> = BoundedVec::with_capacity(4);
        values.push(1);
        values.extend([2, 3]);
        assert_eq!(values.len(), 3);
        assert_eq!(values.iter().sum::<i32>(), 6);
        let plain: Vec<i32> = values.into_vec();
        assert_eq!(plain, vec![1, 2, 3]);
    }

    #[test]
    fn test_vec_equality_ignores_scratch() {
        let mut a = bounded_vec![1, 2];
        let b = bounded_vec![1, 2];
        a[5] = 9;
        assert_eq!(a, b);
    }

    #[test]
    fn test_array_indexing() {
        let mut values = BoundedArray::new([1, 2, 3, 4, 5]);
        assert_eq!(values[4], 5);
        assert_eq!(values[5], 0);
        values[5] = 6;
        assert_eq!(values, [1, 2, 3, 4, 5]);
        values[0] = 10;
        assert_eq!(*values.front(), 10);
        assert_eq!(*values.back(), 5);
    }

    #[test]
    fn test_empty_array() {
        let values: BoundedArray<u8, 0> = BoundedArray::default();
        assert_eq!(*values.front(), 0);
        assert_eq!(*values.back(), 0);
    }

    #[test]
    fn test_slice_is_read_only_view() {
        let vec = bounded_vec![1, 2, 3, 4, 5];
        let view = vec.as_bounded_slice();
        assert_eq!(view.len(), 5);
        assert_eq!(view[2], 3);
        assert_eq!(view[5], 0);
        assert_eq!(*view.back(), 5);

        let empty: BoundedSlice<'_, i32> = BoundedSlice::new(&[]);
        assert_eq!(*empty.front(), 0);
        assert_eq!(*empty.back(), 0);
    }

    #[test]
    fn test_macro_forms() {
        let empty: BoundedVec<i32> = bounded_vec![];
        let repeated: BoundedVec<i32> = bounded_vec![7; 3];
        assert!(empty.is_empty());
        assert_eq!(repeated, vec![7, 7, 7]);
    }
}
