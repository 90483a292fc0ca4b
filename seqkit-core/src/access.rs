//! Default-on-out-of-range element access
//!
//! Every bounded container routes its indexing through these functions.
//! Reads past the end yield `T::default()`. Writes past the end land in a
//! caller-owned scratch slot that is reset to `T::default()` on every such
//! access, so nothing written there is ever observed again and the real
//! storage is never touched.

use crate::sequence::Sequence;

/// Return a copy of the element at `index`, or `T::default()` if `index`
/// is past the end.
pub fn bounded_get<S>(seq: &S, index: usize) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Default + Clone,
{
    seq.as_slice().get(index).cloned().unwrap_or_default()
}

/// Return a reference to the element at `index`, or `fallback` if `index`
/// is past the end.
pub fn bounded_ref<'a, T>(items: &'a [T], fallback: &'a T, index: usize) -> &'a T {
    items.get(index).unwrap_or(fallback)
}

/// Return a mutable reference to the element at `index`.
///
/// Past the end, `scratch` is reset to `T::default()` and returned instead.
/// A value written through that reference does not survive the next
/// out-of-range access.
pub fn bounded_get_mut<'a, T: Default>(
    items: &'a mut [T],
    scratch: &'a mut T,
    index: usize,
) -> &'a mut T {
    match items.get_mut(index) {
        Some(item) => item,
        None => {
            *scratch = T::default();
            scratch
        }
    }
}

/// Index of the last element, `None` for an empty sequence.
///
/// `back()` on an empty container must not compute `len - 1`.
pub fn last_index(len: usize) -> Option<usize> {
    len.checked_sub(1)
}

/// Copy of the first element, or the default for an empty sequence.
pub fn bounded_front<S>(seq: &S) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Default + Clone,
{
    bounded_get(seq, 0)
}

/// Copy of the last element, or the default for an empty sequence.
pub fn bounded_back<S>(seq: &S) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Default + Clone,
{
    last_index(seq.len())
        .map(|index| bounded_get(seq, index))
        .unwrap_or_default()
}

/// Bounded read access for containers that own a default fallback.
///
/// Implementors only supply the fallback element; indexing, `front` and
/// `back` are derived from it.
pub trait BoundedRead: Sequence {
    /// Element returned for every out-of-range read
    fn fallback(&self) -> &Self::Item;

    /// Element at `index`, or the fallback past the end
    fn at(&self, index: usize) -> &Self::Item {
        bounded_ref(self.as_slice(), self.fallback(), index)
    }

    /// Copy of the element at `index`, or the default past the end
    fn value_at(&self, index: usize) -> Self::Item
    where
        Self::Item: Clone,
    {
        self.at(index).clone()
    }

    /// First element, or the fallback when empty
    fn front(&self) -> &Self::Item {
        self.at(0)
    }

    /// Last element, or the fallback when empty
    fn back(&self) -> &Self::Item {
        let len = self.len();
        self.at(last_index(len).unwrap_or(len))
    }
}

/// Bounded write access for owning containers.
pub trait BoundedWrite: BoundedRead
where
    Self::Item: Default,
{
    /// Split borrow of the real storage and the scratch slot
    fn storage_and_scratch(&mut self) -> (&mut [Self::Item], &mut Self::Item);

    /// Mutable element at `index`, or the freshly reset scratch slot
    fn at_mut(&mut self, index: usize) -> &mut Self::Item {
        let (items, scratch) = self.storage_and_scratch();
        bounded_get_mut(items, scratch, index)
    }

    /// Mutable first element, or the scratch slot when empty
    fn front_mut(&mut self) -> &mut Self::Item {
        self.at_mut(0)
    }

    /// Mutable last element, or the scratch slot when empty
    fn back_mut(&mut self) -> &mut Self::Item {
        let len = self.len();
        self.at_mut(last_index(len).unwrap_or(len))
    }
}
