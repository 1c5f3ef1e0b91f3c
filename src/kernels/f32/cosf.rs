use crate::fallback::call_f32;
use crate::simd::{SimdBits, SimdF32};
use crate::special::{any, mask_special_f32};

use super::sinf::{sinf_poly, subtract_pi_multiple, RANGE_VAL};

const INV_PI: f32 = f32::from_bits(0x3ea2_f983);
const HALF_PI: f32 = f32::from_bits(0x3fc9_0fdb);

/// Single-precision cosine of every lane.
///
/// `cos(x) = sin(|x| + π/2)`: with `n = round((|x| + π/2) / π) - 0.5` the
/// remainder `|x| - n π` lands in `[-π/2, π/2]` and shares the `sinf`
/// polynomial. Lanes with `|x| >= 2^20`, infinities and NaN go to
/// `libm::cosf`. Maximum error 1.89 ULP.
#[inline]
pub fn cosf<V: SimdF32>(x: V) -> V {
    let cmp = x.abs().to_bits().simd_ge(V::Bits::splat(RANGE_VAL));
    let r = mask_special_f32(x.abs(), cmp, 1.0);

    let n = ((r + V::splat(HALF_PI)) * V::splat(INV_PI)).round();
    let odd = n.to_int().shl::<31>();
    let n = n - V::splat(0.5);

    let r = subtract_pi_multiple(r, n);
    let y = V::from_bits(sinf_poly(r).to_bits() ^ odd);

    if any(cmp) {
        return call_f32("cosf", libm::cosf, x, y, cmp);
    }
    y
}
