use crate::reduction::reduce_ln2_f32;
use crate::rescale::{compose_minus_one, expf_special};
use crate::simd::{SimdBits, SimdF32};
use crate::special::{any, blend_f32};

use super::expf::{EXPONENT_BIAS, LN2};

/// `(expm1(r) - r) / r^2 ≈ C0 + C1 r + C2 r^2 + C3 r^3 + C4 r^4`.
const C: [f32; 5] = [
    f32::from_bits(0x3eff_ffff),
    f32::from_bits(0x3e2a_aa57),
    f32::from_bits(0x3d2a_ab9b),
    f32::from_bits(0x3c09_143e),
    f32::from_bits(0x3ab5_aad1),
];

/// `|x|` at which `2^n` stops being a normal float (≈ 88.3763). A little
/// below the true overflow bound, so some lanes are corrected needlessly.
const SPECIAL_BOUND: f32 = f32::from_bits(0x42a6_c0a6);

/// Reduced pieces of `e^x - 1`: `poly ≈ expm1(r)`, the integer `n`, its
/// exponent field `e = n << 23` and `scale = 2^n`.
pub(crate) struct Expm1fParts<V: SimdF32> {
    pub poly: V,
    pub n: V,
    pub e: V::Bits,
    pub scale: V,
}

#[inline(always)]
pub(crate) fn expm1f_parts<V: SimdF32>(x: V) -> Expm1fParts<V> {
    let (n, r) = reduce_ln2_f32(x, &LN2);
    let e = n.to_int().shl::<23>();
    let scale = V::from_bits(e + V::Bits::splat(EXPONENT_BIAS));

    let r2 = r * r;
    let r4 = r2 * r2;
    let p01 = r.mul_add(V::splat(C[1]), V::splat(C[0]));
    let p23 = r.mul_add(V::splat(C[3]), V::splat(C[2]));
    let poly = r2.mul_add(p23, p01);
    let poly = r4.mul_add(V::splat(C[4]), poly);
    let poly = r2.mul_add(poly, r);

    Expm1fParts { poly, n, e, scale }
}

/// Single-precision `e^x - 1` of every lane.
///
/// Same reduction as [`expf`](super::expf), with the final step
/// `expm1(x) = (scale - 1) + poly * scale` keeping the small-`x` accuracy.
/// Lanes with `|x| >= 88.38` and infinities take the split-scale path and
/// subtract one afterwards. Maximum error 1.13 ULP.
#[inline]
pub fn expm1f<V: SimdF32>(x: V) -> V {
    let Expm1fParts { poly, n, e, scale } = expm1f_parts(x);
    let y = compose_minus_one(poly, scale);

    let cmp = x.abs().simd_ge(V::splat(SPECIAL_BOUND));
    if any(cmp) {
        let special = expf_special(poly, n, e, cmp, scale) - V::splat(1.0);
        return blend_f32(cmp, special, y);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::F32x4;

    #[test]
    fn test_expm1f_values() {
        let inputs = [1e-3f32, -2.0, 10.0, 1e-7];
        let y = expm1f(F32x4::from_fn(|i| inputs[i]));
        for (lane, &v) in inputs.iter().enumerate() {
            let want = (v as f64).exp_m1();
            assert!((y.extract(lane) as f64 - want).abs() <= 2.0 * f32::EPSILON as f64 * want.abs());
        }
    }

    #[test]
    fn test_expm1f_special_lanes() {
        let y = expm1f(F32x4::from_fn(|i| [f32::INFINITY, f32::NEG_INFINITY, f32::NAN, -100.0][i]));
        assert_eq!(y.extract(0), f32::INFINITY);
        assert_eq!(y.extract(1), -1.0);
        assert!(y.extract(2).is_nan());
        assert_eq!(y.extract(3), -1.0);
    }
}
