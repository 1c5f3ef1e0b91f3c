//! ARM NEON lane types.
//!
//! 128-bit Advanced SIMD registers: two `f64` or four `f32` lanes. Every
//! AArch64 processor has them, so the build script enables this backend
//! whenever the target is `aarch64` (unless `LANEMATH_FORCE_PORTABLE=1`).
//!
//! # Performance Characteristics
//!
//! - **Fused multiply-add**: `vfmaq` gives single-rounding `mul_add`, which the
//!   polynomial evaluators depend on for their error bounds
//! - **Rounding**: `vrndaq` rounds ties away from zero in one instruction
//! - **Lane tests**: `vmaxvq_u32` reduces a mask to a scalar for `any()`
//!
//! Lookups into the exponential and logarithm tables have no gather
//! instruction and go through memory lane by lane.

pub mod f32x4;

pub mod f64x2;
