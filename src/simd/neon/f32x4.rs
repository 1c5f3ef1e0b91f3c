use std::arch::aarch64::*;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use super::f64x2::F64x2;
use crate::simd::traits::{FloatOps, SimdBits, SimdF32};

pub const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: float32x4_t,
}

/// A SIMD vector of 4 32-bit unsigned integers, also used as a lane mask
#[derive(Copy, Clone, Debug)]
pub struct U32x4 {
    elements: uint32x4_t,
}

impl F32x4 {
    #[inline(always)]
    fn to_array(self) -> [f32; LANE_COUNT] {
        let mut out = [0.0; LANE_COUNT];
        unsafe { vst1q_f32(out.as_mut_ptr(), self.elements) };
        out
    }
}

impl U32x4 {
    #[inline(always)]
    fn to_array(self) -> [u32; LANE_COUNT] {
        let mut out = [0; LANE_COUNT];
        unsafe { vst1q_u32(out.as_mut_ptr(), self.elements) };
        out
    }
}

macro_rules! neon_binop {
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

neon_binop!(F32x4, Add, add, vaddq_f32);
neon_binop!(F32x4, Sub, sub, vsubq_f32);
neon_binop!(F32x4, Mul, mul, vmulq_f32);
neon_binop!(F32x4, Div, div, vdivq_f32);
neon_binop!(U32x4, BitAnd, bitand, vandq_u32);
neon_binop!(U32x4, BitOr, bitor, vorrq_u32);
neon_binop!(U32x4, BitXor, bitxor, veorq_u32);
neon_binop!(U32x4, Add, add, vaddq_u32);
neon_binop!(U32x4, Sub, sub, vsubq_u32);

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe { vnegq_f32(self.elements) },
        }
    }
}

impl Not for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self {
            elements: unsafe { vmvnq_u32(self.elements) },
        }
    }
}

impl SimdBits for U32x4 {
    type Scalar = u32;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        Self {
            elements: unsafe { vdupq_n_u32(value) },
        }
    }

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> u32>(f: F) -> Self {
        let lanes: [u32; LANE_COUNT] = std::array::from_fn(f);
        Self {
            elements: unsafe { vld1q_u32(lanes.as_ptr()) },
        }
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> u32 {
        self.to_array()[lane]
    }

    #[inline(always)]
    fn shl<const S: i32>(self) -> Self {
        Self {
            elements: unsafe { vshlq_n_u32::<S>(self.elements) },
        }
    }

    #[inline(always)]
    fn shr<const S: i32>(self) -> Self {
        Self {
            elements: unsafe { vshrq_n_u32::<S>(self.elements) },
        }
    }

    #[inline(always)]
    fn asr<const S: i32>(self) -> Self {
        Self {
            elements: unsafe {
                vreinterpretq_u32_s32(vshrq_n_s32::<S>(vreinterpretq_s32_u32(self.elements)))
            },
        }
    }

    #[inline(always)]
    fn simd_eq(self, other: Self) -> Self {
        Self {
            elements: unsafe { vceqq_u32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_gt(self, other: Self) -> Self {
        Self {
            elements: unsafe { vcgtq_u32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_ge(self, other: Self) -> Self {
        Self {
            elements: unsafe { vcgeq_u32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vmaxvq_u32(self.elements) != 0 }
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
            elements: unsafe { vdupq_n_f32(value) },
        }
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { vfmaq_f32(b.elements, self.elements, a.elements) },
        }
    }

    #[inline(always)]
    fn nmul_add(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { vfmsq_f32(b.elements, self.elements, a.elements) },
        }
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
            elements: unsafe { vld1q_f32(lanes.as_ptr()) },
        }
    }

    #[inline(always)]
    fn load(slice: &[f32]) -> Self {
        assert!(slice.len() >= LANE_COUNT, "Size must be >= {LANE_COUNT}");
        Self {
            elements: unsafe { vld1q_f32(slice.as_ptr()) },
        }
    }

    #[inline(always)]
    fn store(self, out: &mut [f32]) {
        assert!(out.len() >= LANE_COUNT, "Size must be >= {LANE_COUNT}");
        unsafe { vst1q_f32(out.as_mut_ptr(), self.elements) };
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> f32 {
        self.to_array()[lane]
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { vabsq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { vsqrtq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self {
            elements: unsafe { vrndaq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        Self {
            elements: unsafe { vrndq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn to_bits(self) -> U32x4 {
        U32x4 {
            elements: unsafe { vreinterpretq_u32_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn from_bits(bits: U32x4) -> Self {
        Self {
            elements: unsafe { vreinterpretq_f32_u32(bits.elements) },
        }
    }

    #[inline(always)]
    fn simd_eq(self, other: Self) -> U32x4 {
        U32x4 {
            elements: unsafe { vceqq_f32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_lt(self, other: Self) -> U32x4 {
        U32x4 {
            elements: unsafe { vcltq_f32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_le(self, other: Self) -> U32x4 {
        U32x4 {
            elements: unsafe { vcleq_f32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_gt(self, other: Self) -> U32x4 {
        U32x4 {
            elements: unsafe { vcgtq_f32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_ge(self, other: Self) -> U32x4 {
        U32x4 {
            elements: unsafe { vcgeq_f32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn select(mask: U32x4, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { vbslq_f32(mask.elements, if_true.elements, if_false.elements) },
        }
    }

    #[inline(always)]
    fn to_int(self) -> U32x4 {
        U32x4 {
            elements: unsafe { vreinterpretq_u32_s32(vcvtq_s32_f32(self.elements)) },
        }
    }

    #[inline(always)]
    fn from_int(bits: U32x4) -> Self {
        Self {
            elements: unsafe { vcvtq_f32_s32(vreinterpretq_s32_u32(bits.elements)) },
        }
    }

    #[inline(always)]
    fn widen_lo(self) -> F64x2 {
        F64x2 {
            elements: unsafe { vcvt_f64_f32(vget_low_f32(self.elements)) },
        }
    }

    #[inline(always)]
    fn widen_hi(self) -> F64x2 {
        F64x2 {
            elements: unsafe { vcvt_high_f64_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn narrow(lo: F64x2, hi: F64x2) -> Self {
        Self {
            elements: unsafe { vcvt_high_f32_f64(vcvt_f32_f64(lo.elements), hi.elements) },
        }
    }
}
