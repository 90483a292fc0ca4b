//! Bounded string and string-view wrappers
//!
//! Both index the UTF-8 bytes of the text. Out-of-range byte reads yield
//! `0` and out-of-range character reads yield `'\0'`. Neither wrapper hands
//! out mutable byte references; an owned string is edited through the
//! `String` API reached via `DerefMut`.

use std::fmt;
use std::ops::{Deref, DerefMut, Index};

use crate::access::BoundedRead;
use crate::sequence::Sequence;

/// Fallback byte for both string wrappers.
static NUL: u8 = 0;

fn char_at(text: &str, index: usize) -> char {
    text.chars().nth(index).unwrap_or('\0')
}

/// Owned string with default-on-out-of-range byte indexing.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedString {
    inner: String,
}

impl BoundedString {
    /// Create an empty string
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing string
    pub fn from_string(inner: String) -> Self {
        Self { inner }
    }

    /// Unwrap into the plain string
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Character (Unicode scalar value) at `index`, or `'\0'` past the end
    pub fn char_at(&self, index: usize) -> char {
        char_at(&self.inner, index)
    }

    /// Borrow as a non-owning bounded view
    pub fn as_bounded_str(&self) -> BoundedStr<'_> {
        BoundedStr::new(&self.inner)
    }
}

impl Sequence for BoundedString {
    type Item = u8;

    fn as_slice(&self) -> &[u8] {
        self.inner.as_bytes()
    }
}

impl BoundedRead for BoundedString {
    fn fallback(&self) -> &u8 {
        &NUL
    }
}

impl Deref for BoundedString {
    type Target = String;

    fn deref(&self) -> &String {
        &self.inner
    }
}

impl DerefMut for BoundedString {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.inner
    }
}

impl Index<usize> for BoundedString {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        self.at(index)
    }
}

impl From<String> for BoundedString {
    fn from(inner: String) -> Self {
        Self { inner }
    }
}

impl From<&str> for BoundedString {
    fn from(text: &str) -> Self {
        Self {
            inner: text.to_owned(),
        }
    }
}

impl From<BoundedString> for String {
    fn from(text: BoundedString) -> Self {
        text.inner
    }
}

impl PartialEq<str> for BoundedString {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for BoundedString {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl fmt::Debug for BoundedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for BoundedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

/// Borrowed string view with default-on-out-of-range byte indexing.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedStr<'a> {
    inner: &'a str,
}

impl<'a> BoundedStr<'a> {
    /// View an existing string slice
    pub fn new(inner: &'a str) -> Self {
        Self { inner }
    }

    /// The viewed text, with the original lifetime
    pub fn as_inner(&self) -> &'a str {
        self.inner
    }

    /// Character (Unicode scalar value) at `index`, or `'\0'` past the end
    pub fn char_at(&self, index: usize) -> char {
        char_at(self.inner, index)
    }
}

impl Sequence for BoundedStr<'_> {
    type Item = u8;

    fn as_slice(&self) -> &[u8] {
        self.inner.as_bytes()
    }
}

impl BoundedRead for BoundedStr<'_> {
    fn fallback(&self) -> &u8 {
        &NUL
    }
}

impl Deref for BoundedStr<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.inner
    }
}

impl Index<usize> for BoundedStr<'_> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        self.at(index)
    }
}

impl<'a> From<&'a str> for BoundedStr<'a> {
    fn from(inner: &'a str) -> Self {
        Self { inner }
    }
}

impl<'a> From<&'a String> for BoundedStr<'a> {
    fn from(inner: &'a String) -> Self {
        Self { inner }
    }
}

impl<'a> From<&'a BoundedString> for BoundedStr<'a> {
    fn from(text: &'a BoundedString) -> Self {
        text.as_bounded_str()
    }
}

impl PartialEq<str> for BoundedStr<'_> {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for BoundedStr<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl fmt::Debug for BoundedStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner, f)
    }
}

impl fmt::Display for BoundedStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner)
    }
}
