//! Fixed-length arrays indexed by an enumerator

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use crate::error::{Result, SeqError};
use crate::sequence::Sequence;

/// A fieldless enum usable as an array index.
///
/// The enum must declare a sentinel member whose integer value is the
/// number of real members. Enums without that member cannot implement this
/// trait, so they cannot index an [`EnumArray`]. Use [`impl_index_enum!`]
/// rather than implementing it by hand.
pub trait IndexEnum: Copy {
    /// The sentinel member
    const MAX: Self;
    /// Integer value of the sentinel, i.e. the array length
    const COUNT: usize;

    /// Integer value of this enumerator
    fn to_index(self) -> usize;
}

/// Implement [`IndexEnum`] for a fieldless enum.
///
/// Every real member is listed, followed by the sentinel after `=>`. The
/// list must be exhaustive and the sentinel must have the largest value;
/// anything else fails to compile.
///
/// ```
/// use seqkit_core::{impl_index_enum, EnumArray};
///
/// #[derive(Clone, Copy)]
/// enum Channel { Red, Green, Blue, Max }
/// impl_index_enum!(Channel { Red, Green, Blue } => Max);
///
/// let mut levels: EnumArray<Channel, u8> = EnumArray::default();
/// levels[Channel::Green] = 200;
/// assert_eq!(levels[Channel::Green], 200);
/// assert_eq!(levels.len(), 3);
/// ```
///
/// A sentinel that is not the last member is rejected:
///
/// ```compile_fail
/// use seqkit_core::impl_index_enum;
///
/// #[derive(Clone, Copy)]
/// enum Channel { Red, Green, Blue, Max }
/// impl_index_enum!(Channel { Red, Blue, Max } => Green);
/// ```
///
/// So is a member list that leaves a member out:
///
/// ```compile_fail
/// use seqkit_core::impl_index_enum;
///
/// #[derive(Clone, Copy)]
/// enum Channel { Red, Green, Blue, Max }
/// impl_index_enum!(Channel { Red, Green } => Max);
/// ```
#[macro_export]
macro_rules! impl_index_enum {
    ($enum:ident { $($variant:ident),* $(,)? } => $max:ident) => {
        const _: () = {
            // The match is exhaustive, so every member has to be listed.
            const fn below_sentinel(member: $enum) -> bool {
                match member {
                    $( $enum::$variant => ($enum::$variant as usize) < ($enum::$max as usize), )*
                    $enum::$max => true,
                }
            }
            $(
                assert!(
                    below_sentinel($enum::$variant),
                    "the sentinel must be the enum's last member"
                );
            )*
        };

        impl $crate::enum_array::IndexEnum for $enum {
            const MAX: Self = $enum::$max;
            const COUNT: usize = $enum::$max as usize;

            fn to_index(self) -> usize {
                self as usize
            }
        }
    };
}

/// Array of `E::COUNT` elements addressed by enumerators of `E`.
pub struct EnumArray<E: IndexEnum, T> {
    items: Box<[T]>,
    _index: PhantomData<E>,
}

impl<E: IndexEnum, T> EnumArray<E, T> {
    /// Build from an array whose length must equal `E::COUNT`.
    ///
    /// A mismatched length fails to compile:
    ///
    /// ```compile_fail
    /// use seqkit_core::{impl_index_enum, EnumArray};
    ///
    /// #[derive(Clone, Copy)]
    /// enum Channel { Red, Green, Blue, Max }
    /// impl_index_enum!(Channel { Red, Green, Blue } => Max);
    ///
    /// let levels: EnumArray<Channel, u8> = EnumArray::new([1, 2]);
    /// ```
    pub fn new<const N: usize>(items: [T; N]) -> Self {
        const { assert!(N == E::COUNT, "array length must equal the enum's sentinel value") };
        Self {
            items: Box::new(items),
            _index: PhantomData,
        }
    }

    /// Build from a vector, checking its length at run time
    pub fn try_from_vec(items: Vec<T>) -> Result<Self> {
        if items.len() != E::COUNT {
            return Err(SeqError::LengthMismatch {
                expected: E::COUNT,
                actual: items.len(),
            });
        }
        Ok(Self {
            items: items.into_boxed_slice(),
            _index: PhantomData,
        })
    }

    /// Element for `index`
    pub fn at(&self, index: E) -> &T {
        &self.items[index.to_index()]
    }

    /// Mutable element for `index`
    pub fn at_mut(&mut self, index: E) -> &mut T {
        &mut self.items[index.to_index()]
    }

    /// Number of elements, always `E::COUNT`
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the enum has no real members
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in enumerator order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate mutably in enumerator order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Elements as a plain slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<E: IndexEnum, T: Default> Default for EnumArray<E, T> {
    fn default() -> Self {
        Self {
            items: (0..E::COUNT).map(|_| T::default()).collect(),
            _index: PhantomData,
        }
    }
}

impl<E: IndexEnum, T: Clone> Clone for EnumArray<E, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            _index: PhantomData,
        }
    }
}

impl<E: IndexEnum, T: PartialEq> PartialEq for EnumArray<E, T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<E: IndexEnum, T: fmt::Debug> fmt::Debug for EnumArray<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<E: IndexEnum, T> Sequence for EnumArray<E, T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<E: IndexEnum, T> Index<E> for EnumArray<E, T> {
    type Output = T;

    fn index(&self, index: E) -> &T {
        self.at(index)
    }
}

impl<E: IndexEnum, T> IndexMut<E> for EnumArray<E, T> {
    fn index_mut(&mut self, index: E) -> &mut T {
        self.at_mut(index)
    }
}

impl<'a, E: IndexEnum, T> IntoIterator for &'a EnumArray<E, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, E: IndexEnum, T> IntoIterator for &'a mut EnumArray<E, T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
