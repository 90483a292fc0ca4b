//! Repeat counts for the repeat algorithm
//!
//! A count is split into a whole number of copies and a fractional part
//! that selects a prefix of one more copy. Negative counts and NaN clamp to
//! zero; counts beyond `usize` saturate.

/// Numeric types accepted as a repeat count.
pub trait RepeatCount: Copy {
    /// Whole copies and the fractional remainder in `[0, 1)`.
    fn whole_and_fraction(self) -> (usize, f64);

    /// Number of leading elements of a sequence of length `len` to append
    /// after the whole copies.
    fn partial_len(self, len: usize) -> usize {
        let (_, fraction) = self.whole_and_fraction();
        let partial = (fraction * len as f64).floor() as usize;
        partial.min(len)
    }
}

macro_rules! impl_repeat_count_int {
    ($($t:ty),*) => {
        $(
            impl RepeatCount for $t {
                #[allow(unused_comparisons)]
                fn whole_and_fraction(self) -> (usize, f64) {
                    if self <= 0 {
                        return (0, 0.0);
                    }
                    (usize::try_from(self).unwrap_or(usize::MAX), 0.0)
                }
            }
        )*
    };
}

macro_rules! impl_repeat_count_float {
    ($($t:ty),*) => {
        $(
            impl RepeatCount for $t {
                fn whole_and_fraction(self) -> (usize, f64) {
                    let n = f64::from(self);
                    if n.is_nan() || n <= 0.0 {
                        return (0, 0.0);
                    }
                    let whole = n.trunc();
                    // `as` saturates, so infinity becomes usize::MAX.
                    (whole as usize, n - whole)
                }
            }
        )*
    };
}

impl_repeat_count_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_repeat_count_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(3i32.whole_and_fraction(), (3, 0.0));
        assert_eq!(0u8.whole_and_fraction(), (0, 0.0));
        assert_eq!((-4i64).whole_and_fraction(), (0, 0.0));
        assert_eq!(u128::MAX.whole_and_fraction(), (usize::MAX, 0.0));
        assert_eq!(7usize.partial_len(5), 0);
    }

    #[test]
    fn test_floats() {
        let (whole, fraction) = 3.6f64.whole_and_fraction();
        assert_eq!(whole, 3);
        assert!((fraction - 0.6).abs() < 1e-9);
        assert_eq!(3.6f64.partial_len(5), 3);
        assert_eq!(2.0f32.partial_len(5), 0);
    }

    #[test]
    fn test_float_clamping() {
        assert_eq!((-1.5f64).whole_and_fraction(), (0, 0.0));
        assert_eq!(f64::NAN.whole_and_fraction(), (0, 0.0));
        assert_eq!(f32::NEG_INFINITY.whole_and_fraction(), (0, 0.0));
        assert_eq!((-0.5f32).partial_len(10), 0);
    }

    #[test]
    fn test_fraction_only() {
        assert_eq!(0.5f64.whole_and_fraction(), (0, 0.5));
        assert_eq!(0.5f64.partial_len(4), 2);
        assert_eq!(0.99f64.partial_len(0), 0);
    }
}
