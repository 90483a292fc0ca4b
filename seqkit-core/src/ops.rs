//! Operator forms of the sequence algorithms on [`BoundedVec`] and
//! [`BoundedString`]
//!
//! | operator      | algorithm          |
//! |---------------|--------------------|
//! | `&a + &b`     | [`combine`]        |
//! | `&a - &p`     | [`filter_out_seq`] |
//! | `&a * n`      | [`repeat`]         |
//! | `&a / &p`     | [`split_seq`]      |
//!
//! A single value is passed as a one-element array, e.g. `&v - &[3]`.
//! The compound forms `+=`, `-=` and `*=` replace the left operand with
//! the result of the plain operator.
//!
//! The string forms take a `&str` right-hand side and work on characters,
//! so `&s * 1.5` measures the fractional part in characters and `&s / ","`
//! yields owned segments.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

use crate::algorithms::{combine, filter_out_seq, repeat, split_seq};
use crate::containers::BoundedVec;
use crate::repeat::RepeatCount;
use crate::sequence::Sequence;
use crate::strings::BoundedString;
use crate::ResultSeqNested;

impl<T, S> Add<&S> for &BoundedVec<T>
where
    T: Clone + Default,
    S: Sequence<Item = T> + ?Sized,
{
    type Output = BoundedVec<T>;

    fn add(self, rhs: &S) -> BoundedVec<T> {
        BoundedVec::from_vec(combine(self, rhs))
    }
}

impl<T, S> Sub<&S> for &BoundedVec<T>
where
    T: Clone + Default + PartialEq,
    S: Sequence<Item = T> + ?Sized,
{
    type Output = BoundedVec<T>;

    fn sub(self, rhs: &S) -> BoundedVec<T> {
        BoundedVec::from_vec(filter_out_seq(self, rhs))
    }
}

impl<T, N> Mul<N> for &BoundedVec<T>
where
    T: Clone + Default,
    N: RepeatCount,
{
    type Output = BoundedVec<T>;

    fn mul(self, n: N) -> BoundedVec<T> {
        BoundedVec::from_vec(repeat(self, n))
    }
}

impl<T, S> Div<&S> for &BoundedVec<T>
where
    T: Clone + PartialEq,
    S: Sequence<Item = T> + ?Sized,
{
    type Output = ResultSeqNested<T>;

    fn div(self, rhs: &S) -> ResultSeqNested<T> {
        split_seq(self, rhs)
    }
}

impl<T, S> AddAssign<&S> for BoundedVec<T>
where
    T: Clone + Default,
    S: Sequence<Item = T> + ?Sized,
{
    fn add_assign(&mut self, rhs: &S) {
        self.extend_from_slice(rhs.as_slice());
    }
}

impl<T, S> SubAssign<&S> for BoundedVec<T>
where
    T: Clone + Default + PartialEq,
    S: Sequence<Item = T> + ?Sized,
{
    fn sub_assign(&mut self, rhs: &S) {
        *self = &*self - rhs;
    }
}

impl<T, N> MulAssign<N> for BoundedVec<T>
where
    T: Clone + Default,
    N: RepeatCount,
{
    fn mul_assign(&mut self, n: N) {
        *self = &*self * n;
    }
}

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

impl Add<&str> for &BoundedString {
    type Output = BoundedString;

    fn add(self, rhs: &str) -> BoundedString {
        BoundedString::from_string([self.as_str(), rhs].concat())
    }
}

impl Sub<&str> for &BoundedString {
    type Output = BoundedString;

    fn sub(self, rhs: &str) -> BoundedString {
        let kept = filter_out_seq(&chars(self), &chars(rhs));
        BoundedString::from_string(kept.into_iter().collect())
    }
}

impl<N: RepeatCount> Mul<N> for &BoundedString {
    type Output = BoundedString;

    fn mul(self, n: N) -> BoundedString {
        BoundedString::from_string(repeat(&chars(self), n).into_iter().collect())
    }
}

impl Div<&str> for &BoundedString {
    type Output = Vec<String>;

    fn div(self, rhs: &str) -> Vec<String> {
        split_seq(&chars(self), &chars(rhs))
            .into_iter()
            .map(String::from_iter)
            .collect()
    }
}

impl AddAssign<&str> for BoundedString {
    fn add_assign(&mut self, rhs: &str) {
        self.push_str(rhs);
    }
}

impl SubAssign<&str> for BoundedString {
    fn sub_assign(&mut self, rhs: &str) {
        *self = &*self - rhs;
    }
}

impl<N: RepeatCount> MulAssign<N> for BoundedString {
    fn mul_assign(&mut self, n: N) {
        *self = &*self * n;
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::{combine_value, filter_out, split};
    use crate::bounded_vec;
    use crate::containers::BoundedVec;
    use crate::strings::BoundedString;

    fn one_to_ten() -> BoundedVec<i32> {
        (1..=10).collect()
    }

    #[test]
    fn test_add() {
        let a = bounded_vec![1, 2];
        let b = bounded_vec![3];
        assert_eq!(&a + &b, vec![1, 2, 3]);
        assert_eq!(&a + &[4, 5], vec![1, 2, 4, 5]);
        assert_eq!(&a + &[9], combine_value(&a, 9));
    }

    #[test]
    fn test_sub() {
        let values = one_to_ten();
        assert_eq!(&values - &[4, 5, 6], vec![1, 2, 3, 7, 8, 9, 10]);
        assert_eq!(&values - &[3], filter_out(&values, &3));
    }

    #[test]
    fn test_mul() {
        let values = bounded_vec![1, 2, 3, 4, 5];
        assert_eq!((&values * 2).len(), 10);
        assert_eq!(&values * 1.6, vec![1, 2, 3, 4, 5, 1, 2, 3]);
        assert!((&values * -3).is_empty());
        assert!((&values * f64::INFINITY).is_empty());
    }

    #[test]
    fn test_div() {
        let values = one_to_ten();
        assert_eq!(
            &values / &[5, 6, 7],
            vec![vec![1, 2, 3, 4], vec![8, 9, 10]]
        );
        assert_eq!(&values / &[5], split(&values, &5));
    }

    #[test]
    fn test_compound_assignment() {
        let mut values = bounded_vec![1, 2, 3];
        values += &[4, 3];
        assert_eq!(values, vec![1, 2, 3, 4, 3]);
        values -= &[3];
        assert_eq!(values, vec![1, 2, 4]);
        values *= 2u32;
        assert_eq!(values, vec![1, 2, 4, 1, 2, 4]);
        // Out-of-range indexing still defaults after reassignment.
        assert_eq!(values[6], 0);
    }

    #[test]
    fn test_string_operators() {
        let list = BoundedString::from("a,b,,c");
        assert_eq!(&list - ",", "abc");
        assert_eq!(&list / ",", vec!["a", "b", "", "c"]);
        assert_eq!(&list + ",d", "a,b,,c,d");

        let ab = BoundedString::from("ab");
        assert_eq!(&ab * 2.5, "ababa");
        assert_eq!(&ab * -1, "");
        assert_eq!(&ab * f64::INFINITY, "");
        assert_eq!(&BoundedString::from("αβ") * 1.5, "αβα");
    }

    #[test]
    fn test_string_compound_assignment() {
        let mut text = BoundedString::from("x-y");
        text -= "-";
        text += "!";
        text *= 2;
        assert_eq!(text, "xy!xy!");
        assert_eq!(text.char_at(2), '!');
        assert_eq!(text.char_at(99), '\0');
    }
}
