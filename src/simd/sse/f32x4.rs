use std::arch::x86_64::*;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use super::f64x2::F64x2;
use crate::simd::traits::{FloatOps, SimdBits, SimdF32};

pub const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: __m128,
}

/// A SIMD vector of 4 32-bit unsigned integers, also used as a lane mask
#[derive(Copy, Clone, Debug)]
pub struct U32x4 {
    elements: __m128i,
}

impl F32x4 {
    #[inline(always)]
    fn to_array(self) -> [f32; LANE_COUNT] {
        let mut out = [0.0; LANE_COUNT];
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.elements) };
        out
    }

    #[inline(always)]
    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        let lanes = self.to_array();
        Self::from_fn(|i| f(lanes[i]))
    }

    #[inline(always)]
    fn from_mask(mask: __m128) -> U32x4 {
        U32x4 {
            elements: unsafe { _mm_castps_si128(mask) },
        }
    }
}

impl U32x4 {
    #[inline(always)]
    fn to_array(self) -> [u32; LANE_COUNT] {
        let mut out = [0u32; LANE_COUNT];
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.elements) };
        out
    }

    // Flips the sign bit so signed compares order unsigned values.
    #[inline(always)]
    fn bias(self) -> __m128i {
        unsafe { _mm_xor_si128(self.elements, _mm_set1_epi32(i32::MIN)) }
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

sse_binop!(F32x4, Add, add, _mm_add_ps);
sse_binop!(F32x4, Sub, sub, _mm_sub_ps);
sse_binop!(F32x4, Mul, mul, _mm_mul_ps);
sse_binop!(F32x4, Div, div, _mm_div_ps);
sse_binop!(U32x4, BitAnd, bitand, _mm_and_si128);
sse_binop!(U32x4, BitOr, bitor, _mm_or_si128);
sse_binop!(U32x4, BitXor, bitxor, _mm_xor_si128);
sse_binop!(U32x4, Add, add, _mm_add_epi32);
sse_binop!(U32x4, Sub, sub, _mm_sub_epi32);

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe { _mm_xor_ps(self.elements, _mm_set1_ps(-0.0)) },
        }
    }
}

impl Not for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self {
            elements: unsafe { _mm_xor_si128(self.elements, _mm_set1_epi32(-1)) },
        }
    }
}

impl SimdBits for U32x4 {
    type Scalar = u32;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        Self {
            elements: unsafe { _mm_set1_epi32(value as i32) },
        }
    }

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> u32>(f: F) -> Self {
        let lanes: [u32; LANE_COUNT] = std::array::from_fn(f);
        Self {
            elements: unsafe { _mm_loadu_si128(lanes.as_ptr() as *const __m128i) },
        }
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> u32 {
        self.to_array()[lane]
    }

    #[inline(always)]
    fn shl<const S: i32>(self) -> Self {
        Self {
            elements: unsafe { _mm_slli_epi32::<S>(self.elements) },
        }
    }

    #[inline(always)]
    fn shr<const S: i32>(self) -> Self {
        Self {
            elements: unsafe { _mm_srli_epi32::<S>(self.elements) },
        }
    }

    #[inline(always)]
    fn asr<const S: i32>(self) -> Self {
        Self {
            elements: unsafe { _mm_srai_epi32::<S>(self.elements) },
        }
    }

    #[inline(always)]
    fn simd_eq(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm_cmpeq_epi32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_gt(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm_cmpgt_epi32(self.bias(), other.bias()) },
        }
    }

    #[inline(always)]
    fn simd_ge(self, other: Self) -> Self {
        self.simd_gt(other) | self.simd_eq(other)
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm_movemask_epi8(self.elements) != 0 }
    }

    #[inline(always)]
    fn gather(table: &[u32], idx: Self) -> Self {
        let idx = idx.to_array();
        Self::from_fn(|i| table[idx[i] as usize])
    }
}

impl FloatOps for F32x4 {
    type Scalar = f32;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { _mm_set1_ps(value) },
        }
    }

    #[cfg(target_feature = "fma")]
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { _mm_fmadd_ps(self.elements, a.elements, b.elements) },
        }
    }

    #[cfg(not(target_feature = "fma"))]
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        let (x, y, z) = (self.to_array(), a.to_array(), b.to_array());
        Self::from_fn(|i| x[i].mul_add(y[i], z[i]))
    }
}

impl SimdF32 for F32x4 {
    type Bits = U32x4;
    type Wide = F64x2;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> f32>(f: F) -> Self {
        let lanes: [f32; LANE_COUNT] = std::array::from_fn(f);
        Self {
            elements: unsafe { _mm_loadu_ps(lanes.as_ptr()) },
        }
    }

    #[inline(always)]
    fn load(slice: &[f32]) -> Self {
        assert!(slice.len() >= LANE_COUNT, "Size must be >= {LANE_COUNT}");
        Self {
            elements: unsafe { _mm_loadu_ps(slice.as_ptr()) },
        }
    }

    #[inline(always)]
    fn store(self, out: &mut [f32]) {
        assert!(out.len() >= LANE_COUNT, "Size must be >= {LANE_COUNT}");
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.elements) };
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> f32 {
        self.to_array()[lane]
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { _mm_sqrt_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        self.map(f32::round)
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        self.map(f32::trunc)
    }

    #[inline(always)]
    fn to_bits(self) -> U32x4 {
        U32x4 {
            elements: unsafe { _mm_castps_si128(self.elements) },
        }
    }

    #[inline(always)]
    fn from_bits(bits: U32x4) -> Self {
        Self {
            elements: unsafe { _mm_castsi128_ps(bits.elements) },
        }
    }

    #[inline(always)]
    fn simd_eq(self, other: Self) -> U32x4 {
        Self::from_mask(unsafe { _mm_cmpeq_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn simd_lt(self, other: Self) -> U32x4 {
        Self::from_mask(unsafe { _mm_cmplt_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn simd_le(self, other: Self) -> U32x4 {
        Self::from_mask(unsafe { _mm_cmple_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn simd_gt(self, other: Self) -> U32x4 {
        Self::from_mask(unsafe { _mm_cmpgt_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn simd_ge(self, other: Self) -> U32x4 {
        Self::from_mask(unsafe { _mm_cmpge_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn select(mask: U32x4, if_true: Self, if_false: Self) -> Self {
        unsafe {
            let mask = _mm_castsi128_ps(mask.elements);
            Self {
                elements: _mm_or_ps(
                    _mm_and_ps(mask, if_true.elements),
                    _mm_andnot_ps(mask, if_false.elements),
                ),
            }
        }
    }

    #[inline(always)]
    fn from_int(bits: U32x4) -> Self {
        Self {
            elements: unsafe { _mm_cvtepi32_ps(bits.elements) },
        }
    }

    #[inline(always)]
    fn widen_lo(self) -> F64x2 {
        F64x2 {
            elements: unsafe { _mm_cvtps_pd(self.elements) },
        }
    }

    #[inline(always)]
    fn widen_hi(self) -> F64x2 {
        F64x2 {
            elements: unsafe { _mm_cvtps_pd(_mm_movehl_ps(self.elements, self.elements)) },
        }
    }

    #[inline(always)]
    fn narrow(lo: F64x2, hi: F64x2) -> Self {
        Self {
            elements: unsafe { _mm_movelh_ps(_mm_cvtpd_ps(lo.elements), _mm_cvtpd_ps(hi.elements)) },
        }
    }
}
