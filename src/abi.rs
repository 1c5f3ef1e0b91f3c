//! Fixed-width entry points.
//!
//! The names follow the AdvSIMD intrinsic convention: `q` marks a full
//! 128-bit register, the suffix gives the element type. The `_f64x4` forms
//! run the same kernels over four doubles.
//!
//! ```rust
//! use lanemath::abi::vexpq_f64;
//! use lanemath::simd::{F64x2, SimdF64};
//!
//! let y = vexpq_f64(F64x2::from_fn(|i| i as f64));
//! assert_eq!(y.extract(0), 1.0);
//! ```

use crate::kernels::{f32 as k32, f64 as k64};
use crate::simd::{F32x4, F64x2, F64x4};

macro_rules! unary_abi {
    ($($(#[$doc:meta])* $name:ident: $vec:ty => $kernel:path;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(x: $vec) -> $vec {
                $kernel(x)
            }
        )*
    };
}

macro_rules! binary_abi {
    ($($(#[$doc:meta])* $name:ident: $vec:ty => $kernel:path;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(x: $vec, y: $vec) -> $vec {
                $kernel(x, y)
            }
        )*
    };
}

unary_abi! {
    /// Sine, 2.73 ULP.
    vsinq_f64: F64x2 => k64::sin;
    /// Cosine, 2.78 ULP.
    vcosq_f64: F64x2 => k64::cos;
    /// `e^x`, 1.9 ULP.
    vexpq_f64: F64x2 => k64::exp;
    /// `2^x`, 1.15 ULP.
    vexp2q_f64: F64x2 => k64::exp2;
    /// `e^x - 1`, 1.68 ULP.
    vexpm1q_f64: F64x2 => k64::expm1;
    /// Natural logarithm, 1.67 ULP.
    vlogq_f64: F64x2 => k64::log;
    /// Hyperbolic tangent, 2.21 ULP.
    vtanhq_f64: F64x2 => k64::tanh;

    vsinq_f32: F32x4 => k32::sinf;
    vcosq_f32: F32x4 => k32::cosf;
    vexpq_f32: F32x4 => k32::expf;
    vexpm1q_f32: F32x4 => k32::expm1f;
    vtanhq_f32: F32x4 => k32::tanhf;

    vsin_f64x4: F64x4 => k64::sin;
    vcos_f64x4: F64x4 => k64::cos;
    vexp_f64x4: F64x4 => k64::exp;
    vlog_f64x4: F64x4 => k64::log;
}

binary_abi! {
    /// `sqrt(x^2 + y^2)`, 0.71 ULP.
    vhypotq_f64: F64x2 => k64::hypot;
    /// `x^y`, 0.55 ULP.
    vpowq_f64: F64x2 => k64::pow;

    vhypotq_f32: F32x4 => k32::hypotf;
    vpowq_f32: F32x4 => k32::powf;
}

/// Sine and cosine from one reduction, 2.78 ULP.
#[inline]
pub fn vsincosq_f64(x: F64x2) -> (F64x2, F64x2) {
    k64::sincos(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{FloatOps, SimdF32, SimdF64};

    #[test]
    fn test_abi_matches_kernels() {
        let x = F64x2::from_fn(|i| [0.75, -4.0][i]);
        assert_eq!(vsinq_f64(x).to_vec(), k64::sin(x).to_vec());
        assert_eq!(vlogq_f64(F64x2::splat(1.0)).to_vec(), vec![0.0, 0.0]);

        let (s, c) = vsincosq_f64(x);
        assert_eq!(s.to_vec(), vsinq_f64(x).to_vec());
        assert_eq!(c.to_vec(), vcosq_f64(x).to_vec());
    }

    #[test]
    fn test_wide_forms_agree_with_narrow() {
        let inputs = [0.1, 2.5, -7.0, 30.0];
        let wide = vexp_f64x4(F64x4::from_fn(|i| inputs[i]));
        for (lane, &v) in inputs.iter().enumerate() {
            let narrow = vexpq_f64(F64x2::splat(v)).extract(0);
            assert_eq!(wide.extract(lane).to_bits(), narrow.to_bits());
        }
    }

    #[test]
    fn test_f32_entry_points() {
        let x = F32x4::from_fn(|i| [3.0, 5.0, 8.0, 0.0][i]);
        let y = F32x4::from_fn(|i| [4.0, 12.0, 15.0, 0.0][i]);
        assert_eq!(vhypotq_f32(x, y).to_vec(), vec![5.0, 13.0, 17.0, 0.0]);
        assert_eq!(vexpq_f32(F32x4::splat(0.0)).to_vec(), vec![1.0; 4]);
    }
}
