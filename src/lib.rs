//! Vectorised transcendental functions with bounded error.
//!
//! Every function is a kernel generic over a lane type, so the same code
//! runs on NEON registers, SSE registers and plain arrays of any width. The
//! crate offers several ways in:
//!
//! - [`kernels`]: the generic kernels themselves.
//! - [`abi`]: fixed-width entry points named after the AdvSIMD intrinsics.
//! - [`scalar`]: one-lane wrappers for callers without vectors.
//! - [`slice`]: whole-slice drivers with rayon-backed parallel forms.
//!
//! Accuracy bounds per function are listed in [`kernels`] and carried as
//! data in [`registry`].
//!
//! ```rust
//! use lanemath::SimdMath;
//!
//! let x: Vec<f64> = (0..10).map(|i| i as f64 * 0.25).collect();
//! let y = x.sin();
//! assert!((y[4] - 1.0f64.sin()).abs() < 1e-15);
//! ```

pub mod abi;
pub mod config;
pub mod dd;
pub mod error;
mod fallback;
pub mod kernels;
pub mod poly;
pub mod reduction;
pub mod registry;
pub mod rescale;
pub mod scalar;
pub mod simd;
pub mod slice;
pub mod softfp;
pub mod special;
pub mod tables;

pub use error::{LanemathError, Result};
pub use slice::SimdMath;
