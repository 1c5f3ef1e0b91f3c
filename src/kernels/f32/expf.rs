use crate::reduction::{reduce_ln2_f32, Ln2Split};
use crate::rescale::{compose, expf_special};
use crate::simd::{SimdBits, SimdF32};
use crate::special::any;

pub(crate) const LN2: Ln2Split<f32> = Ln2Split {
    inv_ln2: f32::from_bits(0x3fb8_aa3b),
    ln2_hi: f32::from_bits(0x3f31_7200),
    ln2_lo: f32::from_bits(0x35bf_be8e),
};

/// `exp(r) - 1 ≈ C4 r + r^2 ((C3 + C2 r) + r^2 (C1 + C0 r))`.
const C: [f32; 5] = [
    f32::from_bits(0x3c07_2010),
    f32::from_bits(0x3d2b_9f17),
    f32::from_bits(0x3e2a_af33),
    f32::from_bits(0x3eff_fedb),
    f32::from_bits(0x3f7f_fff6),
];

pub(crate) const EXPONENT_BIAS: u32 = 0x3f80_0000;

/// `|n|` past which `2^n` leaves the normal range.
const SPECIAL_BOUND: f32 = 126.0;

/// Single-precision `e^x` of every lane.
///
/// # Algorithm Overview
/// 1. `n = round(x / ln2)`, `r = x - n ln2` with a two-part ln2, so
///    `|r| <= ln2 / 2`.
/// 2. `scale = 2^n` built by adding `n << 23` to the bits of 1.0.
/// 3. `exp(r) - 1` from a degree-5 polynomial.
/// 4. `exp(x) = scale + scale * poly`.
///
/// Lanes with `|n| > 126` split the scale in two so the final product
/// overflows or underflows correctly, which also covers ±∞ and NaN.
///
/// # Special Values
/// | Input | Output |
/// |-------|--------|
/// | +∞ | +∞ |
/// | -∞ | +0 |
/// | NaN | NaN |
///
/// Maximum error 1.49 ULP, plus 0.5 ULP for the final rounding.
#[inline]
pub fn expf<V: SimdF32>(x: V) -> V {
    let (n, r) = reduce_ln2_f32(x, &LN2);
    let e = n.to_int().shl::<23>();
    let scale = V::from_bits(e + V::Bits::splat(EXPONENT_BIAS));

    let cmp = n.abs().simd_gt(V::splat(SPECIAL_BOUND));

    let r2 = r * r;
    let p = r.mul_add(V::splat(C[0]), V::splat(C[1]));
    let q = r.mul_add(V::splat(C[2]), V::splat(C[3]));
    let q = p.mul_add(r2, q);
    let p = V::splat(C[4]) * r;
    let poly = q.mul_add(r2, p);

    if any(cmp) {
        return expf_special(poly, n, e, cmp, scale);
    }
    compose(poly, scale)
}
