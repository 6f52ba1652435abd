//! Core trait definitions for site revenues.
//!
//! The selector is generic over the numeric type carried by each site. To use
//! your own number type, implement [`Revenue`] for it.
//!
//! The trait encodes exactly what the recurrence needs:
//! - an additive identity (the value of selecting nothing),
//! - addition (extending a selection by one site),
//! - a partial order (comparing "skip" against "take"),
//! - a finiteness test, so floating-point inputs can be screened up front.

use std::fmt::Debug;
use std::ops::Add;

/// Numeric value attached to a candidate site.
///
/// Semantics:
/// - `ZERO` is the revenue of the empty selection.
/// - `a + b` must be exact for integer types; for floats, the crate only ever
///   sums in ascending site order, so results are reproducible bit-for-bit.
/// - Comparisons only use `>` on values that are not NaN when inputs are
///   validated; unvalidated NaNs yield unspecified (but non-panicking) output.
pub trait Revenue: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// Additive identity.
    const ZERO: Self;

    /// Returns false for NaN or infinite values.
    ///
    /// Integer types are always finite.
    #[inline]
    fn is_finite_revenue(self) -> bool {
        true
    }

    /// Larger of `self` and `other`, preferring `self` on ties and on
    /// incomparable values.
    #[inline]
    fn max_revenue(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// True when the sum of `values` is not greater than zero.
    ///
    /// The default never forms a partial sum outside the range of the inputs,
    /// so integer totals are classified correctly even when the plain sum
    /// would overflow.
    #[inline]
    fn total_at_most_zero(values: &[Self]) -> bool {
        !balanced_total_is_positive(values)
    }
}

macro_rules! impl_int_revenue {
    ($($t:ty),* $(,)?) => {
        $(
            impl Revenue for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

macro_rules! impl_float_revenue {
    ($($t:ty),* $(,)?) => {
        $(
            impl Revenue for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn is_finite_revenue(self) -> bool {
                    self.is_finite()
                }

                #[inline]
                fn total_at_most_zero(values: &[Self]) -> bool {
                    sum_revenues(values.iter().copied()) <= Self::ZERO
                }
            }
        )*
    };
}

impl_int_revenue!(i8, i16, i32, i64, i128, isize);
impl_float_revenue!(f32, f64);

/// Sum a sequence of revenues left to right, starting from [`Revenue::ZERO`].
pub fn sum_revenues<R, I>(values: I) -> R
where
    R: Revenue,
    I: IntoIterator<Item = R>,
{
    values.into_iter().fold(R::ZERO, |acc, v| acc + v)
}

/// Sign of the total, found by adding a loss while the running sum is
/// positive and a gain otherwise.
///
/// Each step adds terms of opposite sign (or starts from zero), so the running
/// sum stays between the smallest and largest input.
fn balanced_total_is_positive<R: Revenue>(values: &[R]) -> bool {
    let mut gains = values.iter().copied().filter(|&v| v > R::ZERO);
    let mut losses = values.iter().copied().filter(|&v| v < R::ZERO);
    let mut acc = R::ZERO;
    loop {
        let next = if acc > R::ZERO {
            losses.next()
        } else {
            gains.next()
        };
        match next {
            Some(v) => acc = acc + v,
            None => return acc > R::ZERO,
        }
    }
}
