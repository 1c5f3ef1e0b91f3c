//! Special-lane classification and blending.
//!
//! Every kernel splits its input into lanes the fast path handles and lanes
//! that need a correction (overflow, underflow, NaN, infinities, arguments
//! too large for the cheap reduction). Classification works on raw bit
//! patterns where it can: an unsigned compare on `bits & !sign` is an
//! absolute-value compare that also catches NaN, and a biased subtraction
//! turns a two-sided range check into a single unsigned compare.

use crate::config::WANT_SIMD_EXCEPT;
use crate::simd::{SimdBits, SimdF32, SimdF64};

const SIGN_MASK_64: u64 = 0x8000_0000_0000_0000;
const SIGN_MASK_32: u32 = 0x8000_0000;

/// `(bits - lo) >= (hi - lo)` with wrap-around.
///
/// True exactly when `bits` lies outside `[lo, hi)`.
#[inline(always)]
pub fn outside_range<B: SimdBits>(bits: B, lo: B::Scalar, hi: B::Scalar) -> B {
    (bits - B::splat(lo)).simd_ge(B::splat(hi - lo))
}

/// `|x| >= bound` for double lanes, on bit patterns.
///
/// NaN lanes compare above `bits(inf)`, so they are flagged too.
#[inline(always)]
pub fn abs_ge_f64<V: SimdF64>(x: V, bound: f64) -> V::Bits {
    (x.to_bits() & V::Bits::splat(!SIGN_MASK_64)).simd_ge(V::Bits::splat(bound.to_bits()))
}

/// Sign bit of each lane.
#[inline(always)]
pub fn sign_f64<V: SimdF64>(x: V) -> V::Bits {
    x.to_bits() & V::Bits::splat(SIGN_MASK_64)
}

#[inline(always)]
pub fn sign_f32<V: SimdF32>(x: V) -> V::Bits {
    x.to_bits() & V::Bits::splat(SIGN_MASK_32)
}

/// Per-lane `mask ? corrected : fast`.
///
/// Lanes with a clear mask come back bit-identical to `fast`.
#[inline(always)]
pub fn blend<V: SimdF64>(mask: V::Bits, corrected: V, fast: V) -> V {
    V::select(mask, corrected, fast)
}

#[inline(always)]
pub fn blend_f32<V: SimdF32>(mask: V::Bits, corrected: V, fast: V) -> V {
    V::select(mask, corrected, fast)
}

/// True when any lane is flagged.
#[inline(always)]
pub fn any<B: SimdBits>(mask: B) -> bool {
    mask.any()
}

/// Replaces flagged lanes with `benign` when exception behaviour matters.
///
/// With the `simd-except` feature the fast path must not see arguments that
/// would raise spurious overflow, underflow or invalid flags; the original
/// values are recomputed by the scalar fallback. Without the feature this is
/// the identity.
#[inline(always)]
pub fn mask_special<V: SimdF64>(x: V, special: V::Bits, benign: f64) -> V {
    if WANT_SIMD_EXCEPT && special.any() {
        V::select(special, V::splat(benign), x)
    } else {
        x
    }
}

/// Single-precision form of [`mask_special`].
#[inline(always)]
pub fn mask_special_f32<V: SimdF32>(x: V, special: V::Bits, benign: f32) -> V {
    if WANT_SIMD_EXCEPT && special.any() {
        V::select(special, V::splat(benign), x)
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{F32x4, F64x2, FloatOps};

    #[test]
    fn test_abs_ge_flags_nan_and_large() {
        let x = F64x2::from_fn(|i| [f64::NAN, -3.0][i]);
        let m = abs_ge_f64(x, 2.0);
        assert_eq!(m.extract(0), u64::MAX);
        assert_eq!(m.extract(1), u64::MAX);

        let x = F64x2::from_fn(|i| [-1.0, 1.999][i]);
        assert!(!any(abs_ge_f64(x, 2.0)));
    }

    #[test]
    fn test_outside_range() {
        let lo = 0x0010_0000_0000_0000u64;
        let hi = 0x7ff0_0000_0000_0000u64;
        let bits = F64x2::from_fn(|i| [0.0, 1.0][i]).to_bits();
        let m = outside_range(bits, lo, hi);
        assert_eq!(m.extract(0), u64::MAX);
        assert_eq!(m.extract(1), 0);

        let bits = F64x2::from_fn(|i| [-1.0, f64::INFINITY][i]).to_bits();
        let m = outside_range(bits, lo, hi);
        assert_eq!(m.extract(0), u64::MAX);
        assert_eq!(m.extract(1), u64::MAX);
    }

    #[test]
    fn test_blend_preserves_unflagged_bits() {
        let fast = F32x4::from_fn(|i| [-0.0, f32::NAN, 1.5, f32::MIN_POSITIVE][i]);
        let corrected = F32x4::splat(7.0);
        let mask = <F32x4 as SimdF32>::Bits::from_fn(|i| if i == 2 { u32::MAX } else { 0 });
        let out = blend_f32(mask, corrected, fast);
        for lane in [0, 1, 3] {
            assert_eq!(out.extract(lane).to_bits(), fast.extract(lane).to_bits());
        }
        assert_eq!(out.extract(2), 7.0);
    }

    #[test]
    fn test_sign_extraction() {
        let x = F64x2::from_fn(|i| [-0.0, 2.0][i]);
        let s = sign_f64(x);
        assert_eq!(s.extract(0), 0x8000_0000_0000_0000);
        assert_eq!(s.extract(1), 0);
    }

    #[test]
    fn test_mask_special_matches_feature() {
        let x = F64x2::from_fn(|i| [1e300, 0.5][i]);
        let special = abs_ge_f64(x, 1e10);
        let masked = mask_special(x, special, 1.0);
        if WANT_SIMD_EXCEPT {
            assert_eq!(masked.extract(0), 1.0);
        } else {
            assert_eq!(masked.extract(0), 1e300);
        }
        assert_eq!(masked.extract(1), 0.5);
    }
}
