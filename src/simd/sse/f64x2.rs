use std::arch::x86_64::*;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use crate::simd::traits::{FloatOps, SimdBits, SimdF64};

pub const LANE_COUNT: usize = 2;

/// A SIMD vector of 2 64-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F64x2 {
    pub(crate) elements: __m128d,
}

/// A SIMD vector of 2 64-bit unsigned integers, also used as a lane mask
#[derive(Copy, Clone, Debug)]
pub struct U64x2 {
    pub(crate) elements: __m128i,
}

impl F64x2 {
    #[inline(always)]
    fn to_array(self) -> [f64; LANE_COUNT] {
        let mut out = [0.0; LANE_COUNT];
        unsafe { _mm_storeu_pd(out.as_mut_ptr(), self.elements) };
        out
    }

    #[inline(always)]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        let lanes = self.to_array();
        Self::from_fn(|i| f(lanes[i]))
    }
}

impl U64x2 {
    #[inline(always)]
    fn to_array(self) -> [u64; LANE_COUNT] {
        let mut out = [0u64; LANE_COUNT];
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.elements) };
        out
    }

    #[inline(always)]
    fn zip_mask(self, other: Self, f: impl Fn(u64, u64) -> bool) -> Self {
        let a = self.to_array();
        let b = other.to_array();
        Self::from_fn(|i| if f(a[i], b[i]) { u64::MAX } else { 0 })
    }
}

macro_rules! sse_binop {
    ($ty:ident, $trait:ident, $method:ident, $intrinsic:ident) => {
        impl $trait for $ty {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $intrinsic(self.elements, rhs.elements) },
                }
            }
        }
    };
}

sse_binop!(F64x2, Add, add, _mm_add_pd);
sse_binop!(F64x2, Sub, sub, _mm_sub_pd);
sse_binop!(F64x2, Mul, mul, _mm_mul_pd);
sse_binop!(F64x2, Div, div, _mm_div_pd);
sse_binop!(U64x2, BitAnd, bitand, _mm_and_si128);
sse_binop!(U64x2, BitOr, bitor, _mm_or_si128);
sse_binop!(U64x2, BitXor, bitxor, _mm_xor_si128);
sse_binop!(U64x2, Add, add, _mm_add_epi64);
sse_binop!(U64x2, Sub, sub, _mm_sub_epi64);

impl Neg for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe { _mm_xor_pd(self.elements, _mm_set1_pd(-0.0)) },
        }
    }
}

impl Not for U64x2 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self {
            elements: unsafe { _mm_xor_si128(self.elements, _mm_set1_epi64x(-1)) },
        }
    }
}

impl SimdBits for U64x2 {
    type Scalar = u64;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn splat(value: u64) -> Self {
        Self {
            elements: unsafe { _mm_set1_epi64x(value as i64) },
        }
    }

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> u64>(f: F) -> Self {
        let lanes: [u64; LANE_COUNT] = std::array::from_fn(f);
        Self {
            elements: unsafe { _mm_loadu_si128(lanes.as_ptr() as *const __m128i) },
        }
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> u64 {
        self.to_array()[lane]
    }

    #[inline(always)]
    fn shl<const S: i32>(self) -> Self {
        Self {
            elements: unsafe { _mm_slli_epi64::<S>(self.elements) },
        }
    }

    #[inline(always)]
    fn shr<const S: i32>(self) -> Self {
        Self {
            elements: unsafe { _mm_srli_epi64::<S>(self.elements) },
        }
    }

    // SSE2 has no 64-bit arithmetic shift.
    #[inline(always)]
    fn asr<const S: i32>(self) -> Self {
        let lanes = self.to_array();
        Self::from_fn(|i| ((lanes[i] as i64) >> S) as u64)
    }

    #[inline(always)]
    fn simd_eq(self, other: Self) -> Self {
        self.zip_mask(other, |a, b| a == b)
    }

    #[inline(always)]
    fn simd_gt(self, other: Self) -> Self {
        self.zip_mask(other, |a, b| a > b)
    }

    #[inline(always)]
    fn simd_ge(self, other: Self) -> Self {
        self.zip_mask(other, |a, b| a >= b)
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm_movemask_epi8(self.elements) != 0 }
    }

    #[inline(always)]
    fn gather(table: &[u64], idx: Self) -> Self {
        let idx = idx.to_array();
        Self::from_fn(|i| table[idx[i] as usize])
    }
}

impl FloatOps for F64x2 {
    type Scalar = f64;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self {
            elements: unsafe { _mm_set1_pd(value) },
        }
    }

    #[cfg(target_feature = "fma")]
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { _mm_fmadd_pd(self.elements, a.elements, b.elements) },
        }
    }

    #[cfg(not(target_feature = "fma"))]
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        let (x, y, z) = (self.to_array(), a.to_array(), b.to_array());
        Self::from_fn(|i| x[i].mul_add(y[i], z[i]))
    }
}

impl SimdF64 for F64x2 {
    type Bits = U64x2;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> f64>(f: F) -> Self {
        let lanes: [f64; LANE_COUNT] = std::array::from_fn(f);
        Self {
            elements: unsafe { _mm_loadu_pd(lanes.as_ptr()) },
        }
    }

    #[inline(always)]
    fn load(slice: &[f64]) -> Self {
        assert!(slice.len() >= LANE_COUNT, "Size must be >= {LANE_COUNT}");
        Self {
            elements: unsafe { _mm_loadu_pd(slice.as_ptr()) },
        }
    }

    #[inline(always)]
    fn store(self, out: &mut [f64]) {
        assert!(out.len() >= LANE_COUNT, "Size must be >= {LANE_COUNT}");
        unsafe { _mm_storeu_pd(out.as_mut_ptr(), self.elements) };
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> f64 {
        self.to_array()[lane]
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { _mm_andnot_pd(_mm_set1_pd(-0.0), self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { _mm_sqrt_pd(self.elements) },
        }
    }

    // SSE2 only rounds to nearest-even.
    #[inline(always)]
    fn round(self) -> Self {
        self.map(f64::round)
    }

    #[inline(always)]
    fn to_bits(self) -> U64x2 {
        U64x2 {
            elements: unsafe { _mm_castpd_si128(self.elements) },
        }
    }

    #[inline(always)]
    fn from_bits(bits: U64x2) -> Self {
        Self {
            elements: unsafe { _mm_castsi128_pd(bits.elements) },
        }
    }

    #[inline(always)]
    fn simd_eq(self, other: Self) -> U64x2 {
        Self::from_mask(unsafe { _mm_cmpeq_pd(self.elements, other.elements) })
    }

    #[inline(always)]
    fn simd_lt(self, other: Self) -> U64x2 {
        Self::from_mask(unsafe { _mm_cmplt_pd(self.elements, other.elements) })
    }

    #[inline(always)]
    fn simd_le(self, other: Self) -> U64x2 {
        Self::from_mask(unsafe { _mm_cmple_pd(self.elements, other.elements) })
    }

    #[inline(always)]
    fn simd_gt(self, other: Self) -> U64x2 {
        Self::from_mask(unsafe { _mm_cmpgt_pd(self.elements, other.elements) })
    }

    #[inline(always)]
    fn simd_ge(self, other: Self) -> U64x2 {
        Self::from_mask(unsafe { _mm_cmpge_pd(self.elements, other.elements) })
    }

    #[inline(always)]
    fn select(mask: U64x2, if_true: Self, if_false: Self) -> Self {
        unsafe {
            let mask = _mm_castsi128_pd(mask.elements);
            Self {
                elements: _mm_or_pd(
                    _mm_and_pd(mask, if_true.elements),
                    _mm_andnot_pd(mask, if_false.elements),
                ),
            }
        }
    }
}

impl F64x2 {
    #[inline(always)]
    fn from_mask(mask: __m128d) -> U64x2 {
        U64x2 {
            elements: unsafe { _mm_castpd_si128(mask) },
        }
    }
}
