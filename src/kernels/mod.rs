//! Function kernels.
//!
//! Every kernel is generic over a lane type ([`SimdF64`](crate::simd::SimdF64)
//! or [`SimdF32`](crate::simd::SimdF32)) and follows the same shape:
//!
//! 1. **Classify** lanes on their bit patterns into fast and special.
//! 2. **Reduce** the argument (modulo π, or by a multiple of `ln2 / N`).
//! 3. **Evaluate** a minimax polynomial on the reduced argument.
//! 4. **Rescale** with a table value or an integer added into the exponent.
//! 5. **Blend** corrected values into the special lanes, either from a
//!    vector correction or from the scalar fallback.
//!
//! The fast path is always computed for every lane. The correction is behind
//! a single `any(mask)` branch that is rarely taken for typical inputs.
//!
//! # Accuracy
//!
//! | kernel   | max ULP | kernel   | max ULP |
//! |----------|---------|----------|---------|
//! | `sin`    | 2.73    | `sinf`   | 1.89    |
//! | `cos`    | 2.78    | `cosf`   | 1.89    |
//! | `sincos` | 2.78    | `expf`   | 1.49    |
//! | `exp`    | 1.9     | `expm1f` | 1.13    |
//! | `exp2`   | 1.15    | `tanhf`  | 2.09    |
//! | `expm1`  | 1.68    | `hypotf` | 1.21    |
//! | `log`    | 1.67    | `powf`   | 2.1     |
//! | `tanh`   | 2.21    |          |         |
//! | `hypot`  | 0.71    |          |         |
//! | `pow`    | 0.55    |          |         |
//!
//! The figures exclude the 0.5 ULP of the final rounding, so the error
//! against the exact result can reach the bound plus 0.5 ULP. `expf`, for
//! instance, is listed at 1.49 and can measure up to 1.99.
//!
//! The same figures back [`registry`](crate::registry).

pub mod f32;

pub mod f64;
