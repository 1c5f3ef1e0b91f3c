use crate::rescale::compose_minus_one;
use crate::simd::{SimdBits, SimdF32};
use crate::special::{any, blend_f32, sign_f32};

use super::expm1f::{expm1f_parts, Expm1fParts};

/// Past this `tanhf(|x|)` rounds to 1.
const SPECIAL_BOUND: f32 = f32::from_bits(0x4110_2cb3); // 9.01

const ONE_BITS: u32 = 0x3f80_0000;

/// Single-precision hyperbolic tangent of every lane.
///
/// `tanh(x) = q / (q + 2)` with `q = e^(2x) - 1` from the `expm1f`
/// reduction. Lanes with `|x| > 9.01` return `±1`. Maximum error 2.09 ULP.
#[inline]
pub fn tanhf<V: SimdF32>(x: V) -> V {
    let Expm1fParts { poly, scale, .. } = expm1f_parts(x + x);
    let q = compose_minus_one(poly, scale);
    let y = q / (q + V::splat(2.0));

    let special = x.abs().simd_gt(V::splat(SPECIAL_BOUND));
    if any(special) {
        let one = V::from_bits(sign_f32(x) | V::Bits::splat(ONE_BITS));
        return blend_f32(special, one, y);
    }
    y
}
