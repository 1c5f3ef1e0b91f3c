//! Table-driven `2^n` scaling for the exponential family.
//!
//! The fast paths build `2^(n/N)` by integer addition into a table entry's
//! exponent field. That stops working once the exponent leaves the normal
//! range; the `*_special` routines split the scale in two so both factors
//! stay representable and let the final multiply overflow or underflow
//! correctly.

use crate::simd::{FloatOps, SimdBits, SimdF32, SimdF64};
use crate::tables::exp::{EXP_TABLE, EXP_TABLE_LEN};

const SPECIAL_OFFSET: u64 = 0x6000_0000_0000_0000; // 0x1p513
const SPECIAL_BIAS1: u64 = 0x7000_0000_0000_0000; // 0x1p769
const SPECIAL_BIAS2: u64 = 0x3010_0000_0000_0000; // 0x1p-254

const SPECIALF_OFFSET: u32 = 0x8200_0000;
const SPECIALF_BIAS: u32 = 0x7f00_0000;

/// `|n|` above which the single-precision scale overflows even when split.
pub const SPECIALF_SCALE_BOUND: f32 = 192.0;

/// `2^(u / N)` where `u` is the shift-trick integer and `e = u << 45`.
///
/// The index is `u mod N`. The coarse exponent in `e` is added straight
/// into the table bits, which is exact while the result stays normal.
#[inline(always)]
pub fn table_scale<V: SimdF64>(u: V::Bits, e: V::Bits) -> V {
    let idx = u & V::Bits::splat(EXP_TABLE_LEN as u64 - 1);
    V::from_bits(V::Bits::gather(&EXP_TABLE, idx) + e)
}

/// `scale + poly * scale`, i.e. `scale (1 + poly)`.
#[inline(always)]
pub fn compose<T: FloatOps>(poly: T, scale: T) -> T {
    poly.mul_add(scale, scale)
}

/// `(scale - 1) + poly * scale`, i.e. `scale (1 + poly) - 1`.
#[inline(always)]
pub fn compose_minus_one<T: FloatOps>(poly: T, scale: T) -> T {
    poly.mul_add(scale, scale - T::splat(num::one()))
}

/// `2^n (1 + poly)` for lanes whose scale over- or underflows.
///
/// For `|n| > scale_bound` the result saturates to `inf` or `0` through
/// `s1 * s1`. `n` is in the units of the caller's table (`N` per octave).
#[inline]
pub fn exp_special<V: SimdF64>(poly: V, n: V, scale: V, scale_bound: V) -> V {
    let b = n.simd_le(V::splat(0.0)) & V::Bits::splat(SPECIAL_OFFSET);
    let s1 = V::from_bits(V::Bits::splat(SPECIAL_BIAS1) - b);
    let s2 = V::from_bits(scale.to_bits() - V::Bits::splat(SPECIAL_BIAS2) + b);
    let cmp2 = n.abs().simd_gt(scale_bound);
    let r1 = s1 * s1;
    let r2 = s2.mul_add(poly, s2) * s1;
    V::select(cmp2, r1, r2)
}

/// Single-precision counterpart of [`exp_special`].
///
/// `e` is `n << 23` and `special` flags the lanes that need the split.
/// Unflagged lanes are returned as `scale + poly * scale`.
#[inline]
pub fn expf_special<V: SimdF32>(poly: V, n: V, e: V::Bits, special: V::Bits, scale: V) -> V {
    let b = n.simd_le(V::splat(0.0)) & V::Bits::splat(SPECIALF_OFFSET);
    let s1 = V::from_bits(b + V::Bits::splat(SPECIALF_BIAS));
    let s2 = V::from_bits(e - b);
    let cmp2 = n.abs().simd_gt(V::splat(SPECIALF_SCALE_BOUND));
    let r2 = s1 * s1;
    let r1 = s2.mul_add(poly, s2) * s1;
    let r0 = compose(poly, scale);
    V::select(cmp2, r2, V::select(special, r1, r0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{F32x4, F64x2};

    #[test]
    fn test_table_scale_is_power_of_two() {
        // u = 3 * 128 + 0 gives 2^3; u = 128 + 64 gives 2^1.5.
        let u = <F64x2 as SimdF64>::Bits::from_fn(|i| [384u64, 192][i]);
        let v: F64x2 = table_scale(u, u.shl::<45>());
        assert_eq!(v.extract(0), 8.0);
        assert!((v.extract(1) - 2f64.powf(1.5)).abs() < 1e-15);
    }

    #[test]
    fn test_exp_special_saturates() {
        let poly = F64x2::splat(0.0);
        let n = F64x2::from_fn(|i| [200_000.0, -200_000.0][i]);
        let scale = F64x2::splat(1.0);
        let r = exp_special(poly, n, scale, F64x2::splat(163_840.0));
        assert_eq!(r.extract(0), f64::INFINITY);
        assert_eq!(r.extract(1), 0.0);
    }

    #[test]
    fn test_exp_special_splits_large_scale() {
        // 2^-1060 wraps the exponent field of the direct scale, s1 * s2
        // still lands on the subnormal exactly.
        let n = F64x2::from_fn(|i| [1023.0 * 128.0, -1060.0 * 128.0][i]);
        let u = <F64x2 as SimdF64>::Bits::from_fn(|i| n.extract(i) as i64 as u64);
        let scale: F64x2 = table_scale(u, u.shl::<45>());
        let r = exp_special(F64x2::splat(0.0), n, scale, F64x2::splat(163_840.0));
        assert_eq!(r.extract(0), 2f64.powi(1023));
        assert_eq!(r.extract(1), f64::from_bits(1 << 14));
    }

    #[test]
    fn test_expf_special_blends_unflagged_lanes() {
        let n = F32x4::from_fn(|i| [1.0, 200.0, -200.0, 130.0][i]);
        let e = n.to_int().shl::<23>();
        let scale = F32x4::from_bits(e + <F32x4 as SimdF32>::Bits::splat(0x3f80_0000));
        let special = <F32x4 as SimdF32>::Bits::from_fn(|i| if i == 0 { 0 } else { u32::MAX });
        let r = expf_special(F32x4::splat(0.0), n, e, special, scale);
        assert_eq!(r.extract(0), 2.0);
        assert_eq!(r.extract(1), f32::INFINITY);
        assert_eq!(r.extract(2), 0.0);
        assert_eq!(r.extract(3), f32::INFINITY);
    }
}
