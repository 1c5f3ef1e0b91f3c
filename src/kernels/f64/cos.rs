use crate::fallback::call_f64;
use crate::reduction::large::cos_fallback;
use crate::reduction::subtract_pi_multiple;
use crate::simd::{SimdBits, SimdF64};
use crate::special::{abs_ge_f64, any};
use crate::tables::trig::{INV_PI, LARGE_BOUND};

use super::sin::sin_poly;

/// Fast path, valid for `|x| < 2^23`.
#[inline(always)]
pub(crate) fn cos_fast<V: SimdF64>(x: V) -> V {
    // cos(x) = sin(x + π/2), so reduce by n = round(x/π + 1/2) - 1/2.
    let n = x.mul_add(V::splat(INV_PI), V::splat(0.5)).round();
    let odd = n.to_int().shl::<63>();
    let n = n - V::splat(0.5);
    let r = subtract_pi_multiple(x, n);
    V::from_bits(sin_poly(r).to_bits() ^ odd)
}

/// Cosine of every lane.
///
/// Shares the sine polynomial: the reduction is shifted by half a period.
/// Lanes with `|x| >= 2^23`, infinities and NaN go through the
/// extended-precision reduction. Maximum error 2.78 ULP.
#[inline]
pub fn cos<V: SimdF64>(x: V) -> V {
    let cmp = abs_ge_f64(x, LARGE_BOUND);
    let y = cos_fast(x);
    if any(cmp) {
        return call_f64("cos", cos_fallback, x, y, cmp);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::F64x2;

    #[test]
    fn test_cos_values() {
        let x = F64x2::from_fn(|i| [0.0, -1.0][i]);
        let y = cos(x);
        // cos(0) is reached through sin(-π/2), so only the error bound holds.
        assert!((y.extract(0) - 1.0).abs() <= 3.0 * f64::EPSILON);
        assert!((y.extract(1) - 1f64.cos()).abs() < 1e-15);
    }

    #[test]
    fn test_cos_large_argument() {
        let x = f64::from_bits(0x7550_808d_08f2_4a99);
        let want = f64::from_bits(0xbfcf_e675_0826_31cf);
        let y = cos(F64x2::from_fn(|i| [x, 2.0][i]));
        assert!((y.extract(0) - want).abs() <= 3.0 * f64::EPSILON * 0.125);
        assert!((y.extract(1) - 2f64.cos()).abs() < 1e-15);
    }

    #[test]
    fn test_cos_nan() {
        let y = cos(F64x2::from_fn(|i| [f64::NAN, f64::NEG_INFINITY][i]));
        assert!(y.extract(0).is_nan());
        assert!(y.extract(1).is_nan());
    }
}
