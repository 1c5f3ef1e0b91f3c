//! Scalar entry points.
//!
//! Each function broadcasts its argument into a vector, runs the lane kernel
//! and returns lane 0, so the result is bit-identical to what any lane of
//! the vector form would produce for the same input.
//!
//! ```rust
//! assert_eq!(lanemath::scalar::exp(0.0), 1.0);
//! assert!((lanemath::scalar::sinf(0.5) - 0.5f32.sin()).abs() < 1e-6);
//! ```

use crate::kernels::{f32 as k32, f64 as k64};
use crate::simd::{F32x4, F64x2, FloatOps, SimdF32, SimdF64};

macro_rules! scalar_f64 {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: f64) -> f64 {
                k64::$name(F64x2::splat(x)).extract(0)
            }
        )*
    };
}

macro_rules! scalar_f32 {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: f32) -> f32 {
                k32::$name(F32x4::splat(x)).extract(0)
            }
        )*
    };
}

scalar_f64!(sin, cos, exp, exp2, expm1, log, tanh);
scalar_f32!(sinf, cosf, expf, expm1f, tanhf);

#[inline]
pub fn sincos(x: f64) -> (f64, f64) {
    let (s, c) = k64::sincos(F64x2::splat(x));
    (s.extract(0), c.extract(0))
}

#[inline]
pub fn hypot(x: f64, y: f64) -> f64 {
    k64::hypot(F64x2::splat(x), F64x2::splat(y)).extract(0)
}

#[inline]
pub fn pow(x: f64, y: f64) -> f64 {
    k64::pow(F64x2::splat(x), F64x2::splat(y)).extract(0)
}

#[inline]
pub fn hypotf(x: f32, y: f32) -> f32 {
    k32::hypotf(F32x4::splat(x), F32x4::splat(y)).extract(0)
}

#[inline]
pub fn powf(x: f32, y: f32) -> f32 {
    k32::powf(F32x4::splat(x), F32x4::splat(y)).extract(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_matches_vector_lanes() {
        let inputs = [0.3, -12.5];
        let v = k64::cos(F64x2::from_fn(|i| inputs[i]));
        for (lane, &x) in inputs.iter().enumerate() {
            assert_eq!(cos(x).to_bits(), v.extract(lane).to_bits());
        }
    }

    #[test]
    fn test_scalar_special_values() {
        assert_eq!(exp(f64::NEG_INFINITY), 0.0);
        assert!(log(-1.0).is_nan());
        assert_eq!(log(0.0), f64::NEG_INFINITY);
        assert!(sin(f64::INFINITY).is_nan());
        assert_eq!(powf(0.0, -1.0), f32::INFINITY);
        assert_eq!(hypot(f64::NAN, f64::INFINITY), f64::INFINITY);
        assert_eq!(tanhf(100.0), 1.0);
    }

    #[test]
    fn test_sincos_pair() {
        let (s, c) = sincos(1e10);
        assert!((s - sin(1e10)).abs() < 1e-15);
        assert!((c - 1e10f64.cos()).abs() < 1e-15);
        assert!((s * s + c * c - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_single_precision() {
        assert_eq!(expm1f(0.0), 0.0);
        assert_eq!(hypotf(5.0, 12.0), 13.0);
        assert!((cosf(1.0) - 1.0f32.cos()).abs() <= f32::EPSILON);
        assert!((expf(2.0) - 2.0f32.exp()).abs() <= 2.0 * 2.0f32.exp() * f32::EPSILON);
    }
}
