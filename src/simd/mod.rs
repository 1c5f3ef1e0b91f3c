//! Lane vector types and the traits kernels are written against.
//!
//! | Alias   | NEON (`aarch64`)     | SSE2 (`x86_64`)     | otherwise        |
//! |---------|----------------------|---------------------|------------------|
//! | `F64x2` | `neon::f64x2::F64x2` | `sse::f64x2::F64x2` | `F64xN<2>`       |
//! | `F32x4` | `neon::f32x4::F32x4` | `sse::f32x4::F32x4` | `F32xN<4>`       |
//! | `F64x4` | `F64xN<4>`           | `F64xN<4>`          | `F64xN<4>`       |
//!
//! The backend is picked by `build.rs` and can be forced to the portable
//! arrays with `LANEMATH_FORCE_PORTABLE=1`.

#[cfg(all(neon, target_arch = "aarch64"))]
pub mod neon;

#[cfg(all(sse, target_arch = "x86_64"))]
pub mod sse;

pub mod portable;

pub mod traits;

pub use traits::{FloatOps, SimdBits, SimdF32, SimdF64};

#[cfg(all(neon, target_arch = "aarch64"))]
pub use neon::{
    f32x4::{F32x4, U32x4},
    f64x2::{F64x2, U64x2},
};

#[cfg(all(sse, target_arch = "x86_64"))]
pub use sse::{
    f32x4::{F32x4, U32x4},
    f64x2::{F64x2, U64x2},
};

#[cfg(not(any(all(neon, target_arch = "aarch64"), all(sse, target_arch = "x86_64"))))]
mod portable_aliases {
    use super::portable::{F32xN, F64xN, U32xN, U64xN};

    pub type F64x2 = F64xN<2>;
    pub type U64x2 = U64xN<2>;
    pub type F32x4 = F32xN<4>;
    pub type U32x4 = U32xN<4>;
}

#[cfg(not(any(all(neon, target_arch = "aarch64"), all(sse, target_arch = "x86_64"))))]
pub use portable_aliases::{F32x4, F64x2, U32x4, U64x2};

/// Four double-precision lanes.
pub type F64x4 = portable::F64xN<4>;

/// Four 64-bit integer lanes.
pub type U64x4 = portable::U64xN<4>;
