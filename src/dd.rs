//! Double-double arithmetic.
//!
//! A [`DoubleDouble`] carries a value as the unevaluated sum `hi + lo` with
//! `|lo| <= ulp(hi) / 2`, giving roughly 106 bits of precision. Only the few
//! error-free transforms needed by the trigonometric reduction are provided.

use std::hint::black_box;

use crate::tables::trig::SPLIT;

/// An unevaluated sum `hi + lo`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DoubleDouble {
    pub hi: f64,
    pub lo: f64,
}

impl DoubleDouble {
    pub const fn new(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    /// Exact sum of two doubles (Knuth two-sum).
    #[inline]
    pub fn from_exact_add(a: f64, b: f64) -> Self {
        let hi = a + b;
        let bv = hi - a;
        let av = hi - bv;
        let lo = (a - av) + (b - bv);
        Self { hi, lo }
    }

    /// Rounds to the nearest double.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }
}

/// Dekker split of `x` into a 26-bit `hi` and the exact remainder `lo`.
///
/// `hi + lo == x` exactly and `hi` has its low 27 mantissa bits clear, so the
/// product of two halves is exact. The barrier stops the compiler from fusing
/// `x * SPLIT - (x * SPLIT - x)` into something that no longer rounds.
#[inline]
pub fn split_accurate(x: f64) -> DoubleDouble {
    let t = black_box(x * SPLIT);
    let hi = t - (t - x);
    let lo = x - hi;
    DoubleDouble { hi, lo }
}

/// Dekker split with a shorter dependency chain.
///
/// Same contract as [`split_accurate`] for the magnitudes the reducer feeds
/// it, without the optimisation barrier.
#[inline]
pub fn split_fast(x: f64) -> DoubleDouble {
    let t = x * SPLIT - x;
    let hi = x * SPLIT - t;
    let lo = x - hi;
    DoubleDouble { hi, lo }
}

/// `a · b` as a double-double, plus a low-order `correction`.
///
/// The high part is the rounded product `a · b`. Its error is recovered from
/// the split of `a` against `b_hi + b_lo`, a second rounding of `b` whose
/// halves each fit in 27 bits. Using a different rounding of `b` for the
/// split terms keeps `a_hi · b_hi - a · b` from cancelling to zero.
#[inline]
pub fn dd_multiply(a: f64, b: f64, b_hi: f64, b_lo: f64, correction: f64) -> DoubleDouble {
    let a_split = split_fast(a);
    let prod_hi = a * b;
    let prod_lo = (a_split.hi * b_hi - prod_hi)
        + a_split.hi * b_lo
        + a_split.lo * b_hi
        + a_split.lo * b_lo
        + correction;
    let hi = prod_hi + prod_lo;
    let lo = (prod_hi - hi) + prod_lo;
    DoubleDouble { hi, lo }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_is_exact() {
        for &x in &[1.0, std::f64::consts::PI, -1.234_567_890_123e300, 3.0e-300] {
            let s = split_accurate(x);
            assert_eq!(s.hi + s.lo, x);
            assert_eq!(s.hi.to_bits() & ((1 << 27) - 1), 0, "hi of {x} not split");

            let f = split_fast(x);
            assert_eq!(f.hi + f.lo, x);
        }
    }

    #[test]
    fn test_split_products_are_exact() {
        let a = split_accurate(1.0 / 3.0);
        let b = split_accurate(std::f64::consts::E);
        // A 26-bit by 26-bit product has no rounding error.
        for (x, y) in [(a.hi, b.hi), (a.hi, b.lo), (a.lo, b.hi), (a.lo, b.lo)] {
            assert_eq!(x.mul_add(y, -(x * y)), 0.0);
        }
    }

    #[test]
    fn test_from_exact_add() {
        let s = DoubleDouble::from_exact_add(1.0, 1e-20);
        assert_eq!(s.hi, 1.0);
        assert_eq!(s.lo, 1e-20);
        assert_eq!(s.to_f64(), 1.0);
    }

    #[test]
    fn test_dd_multiply_renormalises() {
        let r = dd_multiply(0.75, 2.0, 2.0, 0.0, 0.0);
        assert_eq!(r.hi, 1.5);
        assert_eq!(r.lo, 0.0);

        let r = dd_multiply(1.0, 1.0, 1.0, 2f64.powi(-60), 0.0);
        assert_eq!(r.hi, 1.0);
        assert_eq!(r.lo, 2f64.powi(-60));

        let r = dd_multiply(3.0, 1.5, 1.5, 0.0, 2f64.powi(-70));
        assert_eq!(r.hi, 4.5);
        assert_eq!(r.lo, 2f64.powi(-70));
    }

    #[test]
    fn test_dd_multiply_high_part_is_rounded_product() {
        use crate::tables::trig::{HP0, MP0, MP1};
        for &s in &[0.3, -0.49, 0.125, 1e-10] {
            let r = dd_multiply(s, HP0, MP0, MP1, 0.0);
            assert!((r.hi - s * HP0).abs() <= (s * HP0).abs() * f64::EPSILON);
            assert!(r.lo.abs() <= r.hi.abs() * f64::EPSILON);
        }
    }
}
