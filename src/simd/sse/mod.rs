//! x86_64 SSE2 lane types.
//!
//! SSE2 is part of the x86_64 baseline, so this backend is always available
//! on that architecture. It lacks a few operations the kernels use, which are
//! done lane by lane here:
//!
//! - rounding ties away from zero (SSE2 only rounds to nearest-even)
//! - 64-bit compares and the 64-bit arithmetic shift
//! - conversion between `f64` and `i64`
//!
//! Fused multiply-add uses `_mm_fmadd_pd` when the build enables the `fma`
//! target feature and the correctly rounded scalar `mul_add` otherwise.

pub mod f32x4;

pub mod f64x2;
