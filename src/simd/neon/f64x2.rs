use std::arch::aarch64::*;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use crate::simd::traits::{FloatOps, SimdBits, SimdF64};

pub const LANE_COUNT: usize = 2;

/// A SIMD vector of 2 64-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F64x2 {
    pub(crate) elements: float64x2_t,
}

/// A SIMD vector of 2 64-bit unsigned integers, also used as a lane mask
#[derive(Copy, Clone, Debug)]
pub struct U64x2 {
    pub(crate) elements: uint64x2_t,
}

impl F64x2 {
    #[inline(always)]
    fn to_array(self) -> [f64; LANE_COUNT] {
        let mut out = [0.0; LANE_COUNT];
        unsafe { vst1q_f64(out.as_mut_ptr(), self.elements) };
        out
    }
}

impl U64x2 {
    #[inline(always)]
    fn to_array(self) -> [u64; LANE_COUNT] {
        let mut out = [0; LANE_COUNT];
        unsafe { vst1q_u64(out.as_mut_ptr(), self.elements) };
        out
    }
}

impl Add for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vaddq_f64(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vsubq_f64(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmulq_f64(self.elements, rhs.elements) },
        }
    }
}

impl Div for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vdivq_f64(self.elements, rhs.elements) },
        }
    }
}

impl Neg for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe { vnegq_f64(self.elements) },
        }
    }
}

impl BitAnd for U64x2 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vandq_u64(self.elements, rhs.elements) },
        }
    }
}

impl BitOr for U64x2 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vorrq_u64(self.elements, rhs.elements) },
        }
    }
}

impl BitXor for U64x2 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { veorq_u64(self.elements, rhs.elements) },
        }
    }
}

impl Not for U64x2 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self {
            elements: unsafe { veorq_u64(self.elements, vdupq_n_u64(u64::MAX)) },
        }
    }
}

impl Add for U64x2 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vaddq_u64(self.elements, rhs.elements) },
        }
    }
}

impl Sub for U64x2 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vsubq_u64(self.elements, rhs.elements) },
        }
    }
}

impl SimdBits for U64x2 {
    type Scalar = u64;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn splat(value: u64) -> Self {
        Self {
            elements: unsafe { vdupq_n_u64(value) },
        }
    }

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> u64>(f: F) -> Self {
        let lanes: [u64; LANE_COUNT] = std::array::from_fn(f);
        Self {
            elements: unsafe { vld1q_u64(lanes.as_ptr()) },
        }
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> u64 {
        self.to_array()[lane]
    }

    #[inline(always)]
    fn shl<const S: i32>(self) -> Self {
        Self {
            elements: unsafe { vshlq_n_u64::<S>(self.elements) },
        }
    }

    #[inline(always)]
    fn shr<const S: i32>(self) -> Self {
        Self {
            elements: unsafe { vshrq_n_u64::<S>(self.elements) },
        }
    }

    #[inline(always)]
    fn asr<const S: i32>(self) -> Self {
        Self {
            elements: unsafe {
                vreinterpretq_u64_s64(vshrq_n_s64::<S>(vreinterpretq_s64_u64(self.elements)))
            },
        }
    }

    #[inline(always)]
    fn simd_eq(self, other: Self) -> Self {
        Self {
            elements: unsafe { vceqq_u64(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_gt(self, other: Self) -> Self {
        Self {
            elements: unsafe { vcgtq_u64(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_ge(self, other: Self) -> Self {
        Self {
            elements: unsafe { vcgeq_u64(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vmaxvq_u32(vreinterpretq_u32_u64(self.elements)) != 0 }
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
            elements: unsafe { vdupq_n_f64(value) },
        }
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { vfmaq_f64(b.elements, self.elements, a.elements) },
        }
    }

    #[inline(always)]
    fn nmul_add(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { vfmsq_f64(b.elements, self.elements, a.elements) },
        }
    }
}

impl SimdF64 for F64x2 {
    type Bits = U64x2;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> f64>(f: F) -> Self {
        let lanes: [f64; LANE_COUNT] = std::array::from_fn(f);
        Self {
            elements: unsafe { vld1q_f64(lanes.as_ptr()) },
        }
    }

    #[inline(always)]
    fn load(slice: &[f64]) -> Self {
        assert!(slice.len() >= LANE_COUNT, "Size must be >= {LANE_COUNT}");
        Self {
            elements: unsafe { vld1q_f64(slice.as_ptr()) },
        }
    }

    #[inline(always)]
    fn store(self, out: &mut [f64]) {
        assert!(out.len() >= LANE_COUNT, "Size must be >= {LANE_COUNT}");
        unsafe { vst1q_f64(out.as_mut_ptr(), self.elements) };
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> f64 {
        self.to_array()[lane]
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { vabsq_f64(self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { vsqrtq_f64(self.elements) },
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self {
            elements: unsafe { vrndaq_f64(self.elements) },
        }
    }

    #[inline(always)]
    fn to_bits(self) -> U64x2 {
        U64x2 {
            elements: unsafe { vreinterpretq_u64_f64(self.elements) },
        }
    }

    #[inline(always)]
    fn from_bits(bits: U64x2) -> Self {
        Self {
            elements: unsafe { vreinterpretq_f64_u64(bits.elements) },
        }
    }

    #[inline(always)]
    fn simd_eq(self, other: Self) -> U64x2 {
        U64x2 {
            elements: unsafe { vceqq_f64(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_lt(self, other: Self) -> U64x2 {
        U64x2 {
            elements: unsafe { vcltq_f64(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_le(self, other: Self) -> U64x2 {
        U64x2 {
            elements: unsafe { vcleq_f64(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_gt(self, other: Self) -> U64x2 {
        U64x2 {
            elements: unsafe { vcgtq_f64(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn simd_ge(self, other: Self) -> U64x2 {
        U64x2 {
            elements: unsafe { vcgeq_f64(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn select(mask: U64x2, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { vbslq_f64(mask.elements, if_true.elements, if_false.elements) },
        }
    }

    #[inline(always)]
    fn to_int(self) -> U64x2 {
        U64x2 {
            elements: unsafe { vreinterpretq_u64_s64(vcvtq_s64_f64(self.elements)) },
        }
    }

    #[inline(always)]
    fn from_int(bits: U64x2) -> Self {
        Self {
            elements: unsafe { vcvtq_f64_s64(vreinterpretq_s64_u64(bits.elements)) },
        }
    }
}
