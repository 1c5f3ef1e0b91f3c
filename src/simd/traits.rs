//! Lane-width-generic vector interface.
//!
//! Kernels are written once against these traits and instantiated for every
//! backend. The operation set is the minimum the kernels use: arithmetic,
//! fused multiply-add, compares producing all-ones/all-zeros masks, select,
//! shifts, bit casts, a table gather and a horizontal "any lane set" test.

use std::fmt::Debug;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

/// Arithmetic shared by scalars and lane vectors.
///
/// Polynomial evaluators are generic over this trait, so the same Horner or
/// Estrin code runs on `f64`, `f32` and every vector type.
pub trait FloatOps:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    type Scalar: num::Float + Debug;

    /// Broadcasts `value` to every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// Computes `self * a + b` with a single rounding.
    fn mul_add(self, a: Self, b: Self) -> Self;

    /// Computes `b - self * a` with a single rounding.
    #[inline(always)]
    fn nmul_add(self, a: Self, b: Self) -> Self {
        (-self).mul_add(a, b)
    }
}

impl FloatOps for f64 {
    type Scalar = f64;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        num::Float::mul_add(self, a, b)
    }
}

impl FloatOps for f32 {
    type Scalar = f32;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        value
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        num::Float::mul_add(self, a, b)
    }
}

/// Unsigned integer lanes, also used as predicate masks.
///
/// Arithmetic wraps. Compares are unsigned and produce all-ones for true.
pub trait SimdBits:
    Copy
    + Debug
    + Send
    + Sync
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
{
    type Scalar: num::PrimInt + Debug;

    const LANES: usize;

    fn splat(value: Self::Scalar) -> Self;

    fn from_fn<F: FnMut(usize) -> Self::Scalar>(f: F) -> Self;

    fn extract(self, lane: usize) -> Self::Scalar;

    fn shl<const S: i32>(self) -> Self;

    /// Logical shift right.
    fn shr<const S: i32>(self) -> Self;

    /// Arithmetic shift right.
    fn asr<const S: i32>(self) -> Self;

    fn simd_eq(self, other: Self) -> Self;

    fn simd_gt(self, other: Self) -> Self;

    fn simd_ge(self, other: Self) -> Self;

    /// True when any lane is non-zero.
    fn any(self) -> bool;

    /// `self & !other`.
    #[inline(always)]
    fn and_not(self, other: Self) -> Self {
        self & !other
    }

    /// Looks up `table[idx[i]]` for every lane.
    fn gather(table: &[Self::Scalar], idx: Self) -> Self;
}

/// Double-precision lanes.
pub trait SimdF64: FloatOps<Scalar = f64> + Div<Output = Self> + Debug + Send + Sync {
    type Bits: SimdBits<Scalar = u64>;

    const LANES: usize;

    fn from_fn<F: FnMut(usize) -> f64>(f: F) -> Self;

    /// Loads the first `LANES` elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` is shorter than `LANES`.
    fn load(slice: &[f64]) -> Self;

    /// Stores all lanes into the first `LANES` elements of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than `LANES`.
    fn store(self, out: &mut [f64]);

    fn extract(self, lane: usize) -> f64;

    fn abs(self) -> Self;

    fn sqrt(self) -> Self;

    /// Rounds to the nearest integer, ties away from zero.
    fn round(self) -> Self;

    fn to_bits(self) -> Self::Bits;

    fn from_bits(bits: Self::Bits) -> Self;

    fn simd_eq(self, other: Self) -> Self::Bits;

    fn simd_lt(self, other: Self) -> Self::Bits;

    fn simd_le(self, other: Self) -> Self::Bits;

    fn simd_gt(self, other: Self) -> Self::Bits;

    fn simd_ge(self, other: Self) -> Self::Bits;

    /// Per-lane `mask ? if_true : if_false`.
    fn select(mask: Self::Bits, if_true: Self, if_false: Self) -> Self;

    /// Truncating conversion to `i64`, returned as two's complement bits.
    #[inline(always)]
    fn to_int(self) -> Self::Bits {
        Self::Bits::from_fn(|i| self.extract(i) as i64 as u64)
    }

    /// Conversion from `i64` lanes given as two's complement bits.
    #[inline(always)]
    fn from_int(bits: Self::Bits) -> Self {
        Self::from_fn(|i| bits.extract(i) as i64 as f64)
    }

    /// Loads `slice.len()` lanes and fills the rest with `fill`.
    #[inline(always)]
    fn load_partial(slice: &[f64], fill: f64) -> Self {
        Self::from_fn(|i| slice.get(i).copied().unwrap_or(fill))
    }

    /// Stores as many lanes as fit into `out`.
    #[inline(always)]
    fn store_partial(self, out: &mut [f64]) {
        for (i, slot) in out.iter_mut().take(Self::LANES).enumerate() {
            *slot = self.extract(i);
        }
    }

    #[inline(always)]
    fn replace(self, lane: usize, value: f64) -> Self {
        Self::from_fn(|i| if i == lane { value } else { self.extract(i) })
    }

    /// Looks up `table[idx[i]]` for every lane.
    #[inline(always)]
    fn gather(table: &[f64], idx: Self::Bits) -> Self {
        Self::from_fn(|i| table[idx.extract(i) as usize])
    }

    /// Copies lanes into a `Vec`.
    fn to_vec(self) -> Vec<f64> {
        (0..Self::LANES).map(|i| self.extract(i)).collect()
    }
}

/// Single-precision lanes.
pub trait SimdF32: FloatOps<Scalar = f32> + Div<Output = Self> + Debug + Send + Sync {
    type Bits: SimdBits<Scalar = u32>;

    /// Double-precision vector holding half as many lanes.
    type Wide: SimdF64;

    const LANES: usize;

    fn from_fn<F: FnMut(usize) -> f32>(f: F) -> Self;

    /// Loads the first `LANES` elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` is shorter than `LANES`.
    fn load(slice: &[f32]) -> Self;

    /// Stores all lanes into the first `LANES` elements of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than `LANES`.
    fn store(self, out: &mut [f32]);

    fn extract(self, lane: usize) -> f32;

    fn abs(self) -> Self;

    fn sqrt(self) -> Self;

    /// Rounds to the nearest integer, ties away from zero.
    fn round(self) -> Self;

    /// Rounds toward zero.
    fn trunc(self) -> Self;

    fn to_bits(self) -> Self::Bits;

    fn from_bits(bits: Self::Bits) -> Self;

    fn simd_eq(self, other: Self) -> Self::Bits;

    fn simd_lt(self, other: Self) -> Self::Bits;

    fn simd_le(self, other: Self) -> Self::Bits;

    fn simd_gt(self, other: Self) -> Self::Bits;

    fn simd_ge(self, other: Self) -> Self::Bits;

    fn select(mask: Self::Bits, if_true: Self, if_false: Self) -> Self;

    /// Truncating conversion to `i32`, returned as two's complement bits.
    #[inline(always)]
    fn to_int(self) -> Self::Bits {
        Self::Bits::from_fn(|i| self.extract(i) as i32 as u32)
    }

    #[inline(always)]
    fn from_int(bits: Self::Bits) -> Self {
        Self::from_fn(|i| bits.extract(i) as i32 as f32)
    }

    #[inline(always)]
    fn load_partial(slice: &[f32], fill: f32) -> Self {
        Self::from_fn(|i| slice.get(i).copied().unwrap_or(fill))
    }

    #[inline(always)]
    fn store_partial(self, out: &mut [f32]) {
        for (i, slot) in out.iter_mut().take(Self::LANES).enumerate() {
            *slot = self.extract(i);
        }
    }

    #[inline(always)]
    fn replace(self, lane: usize, value: f32) -> Self {
        Self::from_fn(|i| if i == lane { value } else { self.extract(i) })
    }

    /// Widens lanes `0..LANES/2`.
    #[inline(always)]
    fn widen_lo(self) -> Self::Wide {
        Self::Wide::from_fn(|i| self.extract(i) as f64)
    }

    /// Widens lanes `LANES/2..LANES`.
    #[inline(always)]
    fn widen_hi(self) -> Self::Wide {
        let half = <Self::Wide as SimdF64>::LANES;
        Self::Wide::from_fn(|i| self.extract(half + i) as f64)
    }

    /// Rounds two wide halves back into one vector.
    #[inline(always)]
    fn narrow(lo: Self::Wide, hi: Self::Wide) -> Self {
        let half = <Self::Wide as SimdF64>::LANES;
        Self::from_fn(|i| {
            if i < half {
                lo.extract(i) as f32
            } else {
                hi.extract(i - half) as f32
            }
        })
    }

    fn to_vec(self) -> Vec<f32> {
        (0..Self::LANES).map(|i| self.extract(i)).collect()
    }
}
