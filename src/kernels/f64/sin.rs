use crate::fallback::call_f64;
use crate::poly::pairwise_horner;
use crate::reduction::large::sin_fallback;
use crate::reduction::reduce_pi;
use crate::simd::{SimdBits, SimdF64};
use crate::special::{abs_ge_f64, any, sign_f64};
use crate::tables::trig::{LARGE_BOUND, SIN_POLY};

/// `r + r^3 P(r^2)`, the odd polynomial for `sin` on `[-π/2, π/2]`.
#[inline(always)]
pub(crate) fn sin_poly<V: SimdF64>(r: V) -> V {
    let r2 = r * r;
    let r3 = r2 * r;
    let r4 = r2 * r2;
    r3.mul_add(pairwise_horner(r2, r4, &SIN_POLY), r)
}

/// Fast path, valid for `|x| < 2^23`.
#[inline(always)]
pub(crate) fn sin_fast<V: SimdF64>(x: V) -> V {
    // Reduce |x| and restore the sign last, so -0 stays -0.
    let (n, r) = reduce_pi(x.abs());
    // sin(x) = (-1)^n sin(x - n π)
    let odd = n.to_int().shl::<63>() ^ sign_f64(x);
    V::from_bits(sin_poly(r).to_bits() ^ odd)
}

/// Sine of every lane.
///
/// # Algorithm Overview
/// 1. `n = round(|x| / π)`, `r = |x| - n π` with a 3-part π, so `|r| <= π/2`.
/// 2. `sin(r) ≈ r + r^3 P(r^2)` with a degree-6 `P` in pairwise Horner form.
/// 3. The sign flips for odd `n` and for negative `x`, applied as one xor.
/// 4. Lanes with `|x| >= 2^23`, infinities and NaN are recomputed by the
///    extended-precision reduction.
///
/// # Special Values
/// | Input | Output |
/// |-------|--------|
/// | ±0 | ±0 |
/// | ±∞ | NaN |
/// | NaN | NaN |
///
/// Maximum error 2.73 ULP.
#[inline]
pub fn sin<V: SimdF64>(x: V) -> V {
    let cmp = abs_ge_f64(x, LARGE_BOUND);
    let y = sin_fast(x);
    if any(cmp) {
        return call_f64("sin", sin_fallback, x, y, cmp);
    }
    y
}
