//! Combine, filter, repeat and split algorithms over any [`Sequence`]
//!
//! Every operation is pure: inputs are only read, and the result is a
//! freshly allocated vector (nested for the splitting family) whose elements
//! are copies of input elements in their original relative order.
//!
//! An empty pattern never matches. Filtering by it is a no-op and splitting
//! by it yields the input as a single segment.

use tracing::{trace, warn};

use crate::error::{Result, SeqError};
use crate::repeat::RepeatCount;
use crate::sequence::Sequence;
use crate::{ResultSeq, ResultSeqNested};

/// Leftmost occurrence of `pattern` in `seq` starting at or after `from`.
///
/// Returns `None` when there is no match, when `pattern` is empty, or when
/// `from` is past the end.
pub fn find_subsequence<T: PartialEq>(seq: &[T], pattern: &[T], from: usize) -> Option<usize> {
    if pattern.is_empty() {
        return None;
    }
    seq.get(from..)?
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|offset| offset + from)
}

/// Copy of the half-open range `[first, last)`.
///
/// # Panics
///
/// Panics unless `first <= last <= seq.len()`. The range is never clamped.
pub fn subordinate<S>(seq: &S, first: usize, last: usize) -> ResultSeq<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let items = seq.as_slice();
    debug_assert!(
        first <= last && last <= items.len(),
        "subordinate range {first}..{last} out of bounds for length {}",
        items.len()
    );
    items[first..last].to_vec()
}

/// Elements of `a` followed by elements of `b`.
pub fn combine<A, B, T>(a: &A, b: &B) -> ResultSeq<T>
where
    A: Sequence<Item = T> + ?Sized,
    B: Sequence<Item = T> + ?Sized,
    T: Clone,
{
    let (a, b) = (a.as_slice(), b.as_slice());
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

/// Elements of `seq` followed by `value`.
pub fn combine_value<S, T>(seq: &S, value: T) -> ResultSeq<T>
where
    S: Sequence<Item = T> + ?Sized,
    T: Clone,
{
    let items = seq.as_slice();
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(items);
    out.push(value);
    out
}

/// `seq` with every non-overlapping occurrence of `pattern` removed,
/// scanning left to right.
pub fn filter_out_seq<S, P, T>(seq: &S, pattern: &P) -> ResultSeq<T>
where
    S: Sequence<Item = T> + ?Sized,
    P: Sequence<Item = T> + ?Sized,
    T: Clone + PartialEq,
{
    let (items, pattern) = (seq.as_slice(), pattern.as_slice());
    let mut out = Vec::with_capacity(items.len());
    let mut start = 0;
    while let Some(pos) = find_subsequence(items, pattern, start) {
        out.extend_from_slice(&items[start..pos]);
        start = pos + pattern.len();
    }
    out.extend_from_slice(&items[start..]);
    out
}

/// `seq` without any element that occurs in `values`.
pub fn filter_out_occ<S, V, T>(seq: &S, values: &V) -> ResultSeq<T>
where
    S: Sequence<Item = T> + ?Sized,
    V: Sequence<Item = T> + ?Sized,
    T: Clone + PartialEq,
{
    let values = values.as_slice();
    seq.as_slice()
        .iter()
        .filter(|item| !values.contains(item))
        .cloned()
        .collect()
}

/// Apply [`filter_out_seq`] once per pattern, in the order given.
///
/// Removing one pattern can join elements that then form a later pattern.
pub fn filter_out_occ_seq<S, P, Q, T>(seq: &S, patterns: &P) -> ResultSeq<T>
where
    S: Sequence<Item = T> + ?Sized,
    P: Sequence<Item = Q> + ?Sized,
    Q: Sequence<Item = T>,
    T: Clone + PartialEq,
{
    patterns
        .as_slice()
        .iter()
        .fold(seq.as_slice().to_vec(), |acc, pattern| {
            filter_out_seq(&acc, pattern)
        })
}

/// `seq` with every occurrence of `value` removed.
pub fn filter_out<S, T>(seq: &S, value: &T) -> ResultSeq<T>
where
    S: Sequence<Item = T> + ?Sized,
    T: Clone + PartialEq,
{
    filter_out_seq(seq, std::slice::from_ref(value))
}

/// Length of `repeat(seq, n)` for a sequence of `len` elements of `T`.
///
/// Returns `None` when that many elements cannot be held in a `Vec<T>`.
pub fn repeat_len<T, N: RepeatCount>(len: usize, n: N) -> Option<usize> {
    let (whole, _) = n.whole_and_fraction();
    let total = whole.checked_mul(len)?.checked_add(n.partial_len(len))?;
    let max_len = isize::MAX as usize / std::mem::size_of::<T>().max(1);
    (total <= max_len).then_some(total)
}

/// Repeat `seq` `n` times, failing when the result cannot be allocated.
///
/// Returns [`SeqError::RepeatOverflow`] for counts such as `f64::INFINITY`
/// or `u64::MAX` on a non-empty sequence.
pub fn try_repeat<S, N>(seq: &S, n: N) -> Result<ResultSeq<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    N: RepeatCount,
{
    let items = seq.as_slice();
    let total = repeat_len::<S::Item, N>(items.len(), n)
        .ok_or(SeqError::RepeatOverflow { len: items.len() })?;
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let (whole, _) = n.whole_and_fraction();
    let partial = n.partial_len(items.len());

    let mut out = Vec::with_capacity(total);
    for _ in 0..whole {
        out.extend_from_slice(items);
    }
    out.extend_from_slice(&items[..partial]);
    Ok(out)
}

/// Repeat `seq` `n` times.
///
/// A fractional `n` appends the first `floor(frac(n) * len)` elements after
/// `floor(n)` whole copies. Negative and NaN counts give an empty result, as
/// do counts whose result could not be allocated (see [`try_repeat`]).
pub fn repeat<S, N>(seq: &S, n: N) -> ResultSeq<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    N: RepeatCount,
{
    try_repeat(seq, n).unwrap_or_else(|err| {
        warn!(%err, "repeat result too large, returning an empty sequence");
        Vec::new()
    })
}

/// Segments of `seq` between non-overlapping occurrences of `pattern`.
///
/// A match at either end yields an empty boundary segment, so the result
/// has one more segment than there are matches. Empty input yields no
/// segments.
pub fn split_seq<S, P, T>(seq: &S, pattern: &P) -> ResultSeqNested<T>
where
    S: Sequence<Item = T> + ?Sized,
    P: Sequence<Item = T> + ?Sized,
    T: Clone + PartialEq,
{
    let (items, pattern) = (seq.as_slice(), pattern.as_slice());
    if items.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut start = 0;
    while let Some(pos) = find_subsequence(items, pattern, start) {
        trace!(pos, "split_seq match");
        out.push(items[start..pos].to_vec());
        start = pos + pattern.len();
    }
    out.push(items[start..].to_vec());
    out
}

/// Segments of `seq` between elements that occur in `values`.
///
/// Adjacent delimiters produce empty segments. A delimiter at the very end
/// does not produce a trailing empty segment.
pub fn split_occ<S, V, T>(seq: &S, values: &V) -> ResultSeqNested<T>
where
    S: Sequence<Item = T> + ?Sized,
    V: Sequence<Item = T> + ?Sized,
    T: Clone + PartialEq,
{
    let (items, values) = (seq.as_slice(), values.as_slice());
    let mut out = Vec::new();
    let mut start = 0;
    while start < items.len() {
        let end = items[start..]
            .iter()
            .position(|item| values.contains(item))
            .map_or(items.len(), |offset| start + offset);
        out.push(items[start..end].to_vec());
        start = end + 1;
    }
    out
}

/// Segments of `seq` between occurrences of any of `patterns`.
///
/// At each step the match starting earliest wins; on a tie the pattern
/// listed first wins. The winning pattern's length is skipped. A match
/// ending the input does not produce a trailing empty segment.
pub fn split_occ_seq<S, P, Q, T>(seq: &S, patterns: &P) -> ResultSeqNested<T>
where
    S: Sequence<Item = T> + ?Sized,
    P: Sequence<Item = Q> + ?Sized,
    Q: Sequence<Item = T>,
    T: Clone + PartialEq,
{
    let items = seq.as_slice();
    let patterns = patterns.as_slice();
    let mut out = Vec::new();
    let mut start = 0;
    while start < items.len() {
        let mut best: Option<(usize, usize)> = None;
        for pattern in patterns {
            let pattern = pattern.as_slice();
            if let Some(pos) = find_subsequence(items, pattern, start) {
                if best.map_or(true, |(best_pos, _)| pos < best_pos) {
                    best = Some((pos, pattern.len()));
                }
            }
        }
        match best {
            Some((pos, len)) => {
                trace!(pos, len, "split_occ_seq match");
                out.push(items[start..pos].to_vec());
                start = pos + len;
            }
            None => {
                out.push(items[start..].to_vec());
                break;
            }
        }
    }
    out
}

/// Segments of `seq` between occurrences of `value`.
pub fn split<S, T>(seq: &S, value: &T) -> ResultSeqNested<T>
where
    S: Sequence<Item = T> + ?Sized,
    T: Clone + PartialEq,
{
    split_seq(seq, std::slice::from_ref(value))
}

/// Method-call forms of the free functions in this module.
///
/// `repeated` and `split_on` are named so they do not shadow the slice
/// methods `repeat` and `split`.
pub trait SequenceExt: Sequence
where
    Self::Item: Clone + PartialEq,
{
    /// See [`subordinate`]
    fn subordinate(&self, first: usize, last: usize) -> ResultSeq<Self::Item> {
        subordinate(self, first, last)
    }

    /// See [`combine`]
    fn combine<B>(&self, other: &B) -> ResultSeq<Self::Item>
    where
        B: Sequence<Item = Self::Item> + ?Sized,
    {
        combine(self, other)
    }

    /// See [`combine_value`]
    fn combine_value(&self, value: Self::Item) -> ResultSeq<Self::Item> {
        combine_value(self, value)
    }

    /// See [`filter_out_seq`]
    fn filter_out_seq<P>(&self, pattern: &P) -> ResultSeq<Self::Item>
    where
        P: Sequence<Item = Self::Item> + ?Sized,
    {
        filter_out_seq(self, pattern)
    }

    /// See [`filter_out_occ`]
    fn filter_out_occ<V>(&self, values: &V) -> ResultSeq<Self::Item>
    where
        V: Sequence<Item = Self::Item> + ?Sized,
    {
        filter_out_occ(self, values)
    }

    /// See [`filter_out_occ_seq`]
    fn filter_out_occ_seq<P, Q>(&self, patterns: &P) -> ResultSeq<Self::Item>
    where
        P: Sequence<Item = Q> + ?Sized,
        Q: Sequence<Item = Self::Item>,
    {
        filter_out_occ_seq(self, patterns)
    }

    /// See [`filter_out`]
    fn filter_out(&self, value: &Self::Item) -> ResultSeq<Self::Item> {
        filter_out(self, value)
    }

    /// See [`repeat`]
    fn repeated<N: RepeatCount>(&self, n: N) -> ResultSeq<Self::Item> {
        repeat(self, n)
    }

    /// See [`split_seq`]
    fn split_seq<P>(&self, pattern: &P) -> ResultSeqNested<Self::Item>
    where
        P: Sequence<Item = Self::Item> + ?Sized,
    {
        split_seq(self, pattern)
    }

    /// See [`split_occ`]
    fn split_occ<V>(&self, values: &V) -> ResultSeqNested<Self::Item>
    where
        V: Sequence<Item = Self::Item> + ?Sized,
    {
        split_occ(self, values)
    }

    /// See [`split_occ_seq`]
    fn split_occ_seq<P, Q>(&self, patterns: &P) -> ResultSeqNested<Self::Item>
    where
        P: Sequence<Item = Q> + ?Sized,
        Q: Sequence<Item = Self::Item>,
    {
        split_occ_seq(self, patterns)
    }

    /// See [`split`]
    fn split_on(&self, value: &Self::Item) -> ResultSeqNested<Self::Item> {
        split(self, value)
    }
}

impl<S> SequenceExt for S
where
    S: Sequence + ?Sized,
    S::Item: Clone + PartialEq,
{
}
