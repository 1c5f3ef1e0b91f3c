//! Portable lane arrays.
//!
//! Every operation is a loop over a fixed-size array, which the optimiser
//! usually turns into whatever vector instructions the target offers. These
//! types back `F64x2`/`F32x4` on targets without a native backend and always
//! back the 4-wide `F64x4`.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use super::traits::{FloatOps, SimdBits, SimdF32, SimdF64};

/// `L` double-precision lanes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct F64xN<const L: usize>(pub [f64; L]);

/// `L` unsigned 64-bit lanes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct U64xN<const L: usize>(pub [u64; L]);

/// `L` single-precision lanes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct F32xN<const L: usize>(pub [f32; L]);

/// `L` unsigned 32-bit lanes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct U32xN<const L: usize>(pub [u32; L]);

#[inline(always)]
fn mask64(cond: bool) -> u64 {
    if cond {
        u64::MAX
    } else {
        0
    }
}

#[inline(always)]
fn mask32(cond: bool) -> u32 {
    if cond {
        u32::MAX
    } else {
        0
    }
}

macro_rules! lanewise_binop {
    ($ty:ident, $trait:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl<const L: usize> $trait for $ty<L> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                let mut out = self.0;
                for (lane, &$b) in out.iter_mut().zip(rhs.0.iter()) {
                    let $a = *lane;
                    *lane = $body;
                }
                Self(out)
            }
        }
    };
}

lanewise_binop!(F64xN, Add, add, |a, b| a + b);
lanewise_binop!(F64xN, Sub, sub, |a, b| a - b);
lanewise_binop!(F64xN, Mul, mul, |a, b| a * b);
lanewise_binop!(F64xN, Div, div, |a, b| a / b);
lanewise_binop!(F32xN, Add, add, |a, b| a + b);
lanewise_binop!(F32xN, Sub, sub, |a, b| a - b);
lanewise_binop!(F32xN, Mul, mul, |a, b| a * b);
lanewise_binop!(F32xN, Div, div, |a, b| a / b);
lanewise_binop!(U64xN, BitAnd, bitand, |a, b| a & b);
lanewise_binop!(U64xN, BitOr, bitor, |a, b| a | b);
lanewise_binop!(U64xN, BitXor, bitxor, |a, b| a ^ b);
lanewise_binop!(U64xN, Add, add, |a, b| a.wrapping_add(b));
lanewise_binop!(U64xN, Sub, sub, |a, b| a.wrapping_sub(b));
lanewise_binop!(U32xN, BitAnd, bitand, |a, b| a & b);
lanewise_binop!(U32xN, BitOr, bitor, |a, b| a | b);
lanewise_binop!(U32xN, BitXor, bitxor, |a, b| a ^ b);
lanewise_binop!(U32xN, Add, add, |a, b| a.wrapping_add(b));
lanewise_binop!(U32xN, Sub, sub, |a, b| a.wrapping_sub(b));

impl<const L: usize> Neg for F64xN<L> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(self.0.map(|a| -a))
    }
}

impl<const L: usize> Neg for F32xN<L> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(self.0.map(|a| -a))
    }
}

impl<const L: usize> Not for U64xN<L> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(self.0.map(|a| !a))
    }
}

impl<const L: usize> Not for U32xN<L> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(self.0.map(|a| !a))
    }
}

macro_rules! impl_bits {
    ($ty:ident, $scalar:ty, $signed:ty, $mask:ident) => {
        impl<const L: usize> SimdBits for $ty<L> {
            type Scalar = $scalar;

            const LANES: usize = L;

            #[inline(always)]
            fn splat(value: $scalar) -> Self {
                Self([value; L])
            }

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> $scalar>(f: F) -> Self {
                Self(std::array::from_fn(f))
            }

            #[inline(always)]
            fn extract(self, lane: usize) -> $scalar {
                self.0[lane]
            }

            #[inline(always)]
            fn shl<const S: i32>(self) -> Self {
                Self(self.0.map(|a| a << S))
            }

            #[inline(always)]
            fn shr<const S: i32>(self) -> Self {
                Self(self.0.map(|a| a >> S))
            }

            #[inline(always)]
            fn asr<const S: i32>(self) -> Self {
                Self(self.0.map(|a| ((a as $signed) >> S) as $scalar))
            }

            #[inline(always)]
            fn simd_eq(self, other: Self) -> Self {
                Self(std::array::from_fn(|i| $mask(self.0[i] == other.0[i])))
            }

            #[inline(always)]
            fn simd_gt(self, other: Self) -> Self {
                Self(std::array::from_fn(|i| $mask(self.0[i] > other.0[i])))
            }

            #[inline(always)]
            fn simd_ge(self, other: Self) -> Self {
                Self(std::array::from_fn(|i| $mask(self.0[i] >= other.0[i])))
            }

            #[inline(always)]
            fn any(self) -> bool {
                self.0.iter().any(|&a| a != 0)
            }

            #[inline(always)]
            fn gather(table: &[$scalar], idx: Self) -> Self {
                Self(idx.0.map(|i| table[i as usize]))
            }
        }
    };
}

impl_bits!(U64xN, u64, i64, mask64);
impl_bits!(U32xN, u32, i32, mask32);

impl<const L: usize> FloatOps for F64xN<L> {
    type Scalar = f64;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self([value; L])
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].mul_add(a.0[i], b.0[i])))
    }
}

impl<const L: usize> FloatOps for F32xN<L> {
    type Scalar = f32;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self([value; L])
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].mul_add(a.0[i], b.0[i])))
    }
}

impl<const L: usize> SimdF64 for F64xN<L> {
    type Bits = U64xN<L>;

    const LANES: usize = L;

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> f64>(f: F) -> Self {
        Self(std::array::from_fn(f))
    }

    #[inline(always)]
    fn load(slice: &[f64]) -> Self {
        assert!(slice.len() >= L, "Size must be >= {L}");
        Self(std::array::from_fn(|i| slice[i]))
    }

    #[inline(always)]
    fn store(self, out: &mut [f64]) {
        assert!(out.len() >= L, "Size must be >= {L}");
        out[..L].copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> f64 {
        self.0[lane]
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self(self.0.map(f64::abs))
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self(self.0.map(f64::sqrt))
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self(self.0.map(f64::round))
    }

    #[inline(always)]
    fn to_bits(self) -> U64xN<L> {
        U64xN(self.0.map(f64::to_bits))
    }

    #[inline(always)]
    fn from_bits(bits: U64xN<L>) -> Self {
        Self(bits.0.map(f64::from_bits))
    }

    #[inline(always)]
    fn simd_eq(self, other: Self) -> U64xN<L> {
        U64xN(std::array::from_fn(|i| mask64(self.0[i] == other.0[i])))
    }

    #[inline(always)]
    fn simd_lt(self, other: Self) -> U64xN<L> {
        U64xN(std::array::from_fn(|i| mask64(self.0[i] < other.0[i])))
    }

    #[inline(always)]
    fn simd_le(self, other: Self) -> U64xN<L> {
        U64xN(std::array::from_fn(|i| mask64(self.0[i] <= other.0[i])))
    }

    #[inline(always)]
    fn simd_gt(self, other: Self) -> U64xN<L> {
        U64xN(std::array::from_fn(|i| mask64(self.0[i] > other.0[i])))
    }

    #[inline(always)]
    fn simd_ge(self, other: Self) -> U64xN<L> {
        U64xN(std::array::from_fn(|i| mask64(self.0[i] >= other.0[i])))
    }

    #[inline(always)]
    fn select(mask: U64xN<L>, if_true: Self, if_false: Self) -> Self {
        let t = if_true.to_bits();
        let f = if_false.to_bits();
        Self::from_bits((mask & t) | (!mask & f))
    }
}

macro_rules! impl_f32 {
    ($lanes:literal, $half:literal) => {
        impl SimdF32 for F32xN<$lanes> {
            type Bits = U32xN<$lanes>;
            type Wide = F64xN<$half>;

            const LANES: usize = $lanes;

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> f32>(f: F) -> Self {
                Self(std::array::from_fn(f))
            }

            #[inline(always)]
            fn load(slice: &[f32]) -> Self {
                assert!(slice.len() >= $lanes, "Size must be >= {}", $lanes);
                Self(std::array::from_fn(|i| slice[i]))
            }

            #[inline(always)]
            fn store(self, out: &mut [f32]) {
                assert!(out.len() >= $lanes, "Size must be >= {}", $lanes);
                out[..$lanes].copy_from_slice(&self.0);
            }

            #[inline(always)]
            fn extract(self, lane: usize) -> f32 {
                self.0[lane]
            }

            #[inline(always)]
            fn abs(self) -> Self {
                Self(self.0.map(f32::abs))
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                Self(self.0.map(f32::sqrt))
            }

            #[inline(always)]
            fn round(self) -> Self {
                Self(self.0.map(f32::round))
            }

            #[inline(always)]
            fn trunc(self) -> Self {
                Self(self.0.map(f32::trunc))
            }

            #[inline(always)]
            fn to_bits(self) -> U32xN<$lanes> {
                U32xN(self.0.map(f32::to_bits))
            }

            #[inline(always)]
            fn from_bits(bits: U32xN<$lanes>) -> Self {
                Self(bits.0.map(f32::from_bits))
            }

            #[inline(always)]
            fn simd_eq(self, other: Self) -> U32xN<$lanes> {
                U32xN(std::array::from_fn(|i| mask32(self.0[i] == other.0[i])))
            }

            #[inline(always)]
            fn simd_lt(self, other: Self) -> U32xN<$lanes> {
                U32xN(std::array::from_fn(|i| mask32(self.0[i] < other.0[i])))
            }

            #[inline(always)]
            fn simd_le(self, other: Self) -> U32xN<$lanes> {
                U32xN(std::array::from_fn(|i| mask32(self.0[i] <= other.0[i])))
            }

            #[inline(always)]
            fn simd_gt(self, other: Self) -> U32xN<$lanes> {
                U32xN(std::array::from_fn(|i| mask32(self.0[i] > other.0[i])))
            }

            #[inline(always)]
            fn simd_ge(self, other: Self) -> U32xN<$lanes> {
                U32xN(std::array::from_fn(|i| mask32(self.0[i] >= other.0[i])))
            }

            #[inline(always)]
            fn select(mask: U32xN<$lanes>, if_true: Self, if_false: Self) -> Self {
                let t = if_true.to_bits();
                let f = if_false.to_bits();
                Self::from_bits((mask & t) | (!mask & f))
            }
        }
    };
}

impl_f32!(2, 1);
impl_f32!(4, 2);
impl_f32!(8, 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_keeps_lanes_apart() {
        let a = F64xN([1.0, 2.0, 3.0, 4.0]);
        let b = F64xN([-1.0, -2.0, -3.0, -4.0]);
        let mask = U64xN([u64::MAX, 0, 0, u64::MAX]);
        assert_eq!(F64xN::select(mask, a, b).0, [1.0, -2.0, -3.0, 4.0]);
    }

    #[test]
    fn test_round_ties_away() {
        let v = F64xN([0.5, -0.5, 2.5, -1.4999]).round();
        assert_eq!(v.0, [1.0, -1.0, 3.0, -1.0]);
    }

    #[test]
    fn test_shifts() {
        let v = U64xN([0x8000_0000_0000_0000u64, 4]);
        assert_eq!(v.shr::<2>().0, [0x2000_0000_0000_0000, 1]);
        assert_eq!(v.asr::<2>().0, [0xe000_0000_0000_0000, 1]);
        assert_eq!(v.shl::<1>().0, [0, 8]);
    }

    #[test]
    fn test_unsigned_compare() {
        let a = U32xN([0x8000_0000u32, 1, 5, 7]);
        let b = U32xN::splat(5);
        assert_eq!(a.simd_gt(b).0, [u32::MAX, 0, 0, u32::MAX]);
        assert_eq!(a.simd_ge(b).0, [u32::MAX, 0, u32::MAX, u32::MAX]);
        assert!(a.simd_eq(b).any());
        assert!(!U32xN::<4>::splat(0).any());
    }

    #[test]
    fn test_widen_narrow() {
        let v = F32xN([1.5f32, -2.0, 3.25, f32::INFINITY]);
        let lo = v.widen_lo();
        let hi = v.widen_hi();
        assert_eq!(lo.0, [1.5, -2.0]);
        assert_eq!(hi.0, [3.25, f64::INFINITY]);
        assert_eq!(F32xN::<4>::narrow(lo, hi), v);
    }

    #[test]
    fn test_partial_load_store() {
        let v = F64xN::<4>::load_partial(&[1.0, 2.0], 0.5);
        assert_eq!(v.0, [1.0, 2.0, 0.5, 0.5]);
        let mut out = [0.0; 3];
        v.store_partial(&mut out);
        assert_eq!(out, [1.0, 2.0, 0.5]);
    }
}
