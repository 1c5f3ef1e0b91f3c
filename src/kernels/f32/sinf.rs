use crate::config::WANT_SIMD_EXCEPT;
use crate::fallback::call_f32;
use crate::poly::horner;
use crate::simd::{SimdBits, SimdF32};
use crate::special::{any, outside_range, sign_f32};

const INV_PI: f32 = f32::from_bits(0x3ea2_f983);
const PI_1: f32 = f32::from_bits(0x4049_0fdb);
const PI_2: f32 = f32::from_bits(0xb3bb_bd2e);
const PI_3: f32 = f32::from_bits(0xa777_2ced);

/// Odd coefficients `A3..A9` of `sin(r)` on `[-π/2, π/2]`.
pub(crate) const POLY: [f32; 4] = [
    f32::from_bits(0xbe2a_aaa4),
    f32::from_bits(0x3c08_86fa),
    f32::from_bits(0xb94f_a175),
    f32::from_bits(0x362d_973b),
];

/// `2^20`, where the 3-part π stops giving a usable remainder.
pub(crate) const RANGE_VAL: u32 = 0x4980_0000;
const TINY_BOUND: u32 = 0x2100_0000; // 0x1p-61

/// `r - n π` with the 3-part π.
#[inline(always)]
pub(crate) fn subtract_pi_multiple<V: SimdF32>(r: V, n: V) -> V {
    let r = n.nmul_add(V::splat(PI_1), r);
    let r = n.nmul_add(V::splat(PI_2), r);
    n.nmul_add(V::splat(PI_3), r)
}

/// `r + r^3 P(r^2)`.
#[inline(always)]
pub(crate) fn sinf_poly<V: SimdF32>(r: V) -> V {
    let r2 = r * r;
    let y = horner(r2, &POLY);
    (y * r2).mul_add(r, r)
}

/// Fast path for `|x| < 2^20`, with the sign of `x` folded into `sign`.
#[inline(always)]
fn sinf_fast<V: SimdF32>(r: V, sign: V::Bits) -> V {
    let n = (r * V::splat(INV_PI)).round();
    let odd = n.to_int().shl::<31>();
    let r = subtract_pi_multiple(r, n);
    V::from_bits(sinf_poly(r).to_bits() ^ sign ^ odd)
}

/// Single-precision sine of every lane.
///
/// # Algorithm Overview
/// 1. `sin(x) = sign(x) sin(|x|)`, so only `r = |x|` is reduced.
/// 2. `n = round(r / π)`, `r -= n π` with π split in three floats.
/// 3. `sin(r) ≈ r + r^3 (A3 + A5 r^2 + A7 r^4 + A9 r^6)`.
/// 4. The sign of `x` and the parity of `n` are xor'ed into the result.
///
/// Lanes with `|x| >= 2^20`, infinities and NaN go to `libm::sinf`.
/// Maximum error 1.89 ULP.
#[inline]
pub fn sinf<V: SimdF32>(x: V) -> V {
    let sign = sign_f32(x);
    let ir = x.to_bits() & V::Bits::splat(!0x8000_0000);
    let mut r = V::from_bits(ir);

    let cmp = if WANT_SIMD_EXCEPT {
        // Tiny lanes are flagged too so the fallback raises underflow.
        let cmp = outside_range(ir, TINY_BOUND, RANGE_VAL);
        r = V::select(cmp, V::splat(1.0), r);
        cmp
    } else {
        ir.simd_ge(V::Bits::splat(RANGE_VAL))
    };

    let y = sinf_fast(r, sign);
    if any(cmp) {
        return call_f32("sinf", libm::sinf, x, y, cmp);
    }
    y
}
