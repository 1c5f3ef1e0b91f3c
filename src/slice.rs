//! Slice drivers.
//!
//! [`SimdMath`] maps a kernel over a whole slice. Complete vectors are
//! loaded and stored directly; the remaining `len % LANES` elements run as
//! one predicated vector, loaded with a benign fill value and stored back
//! partially. The fill never reaches the output.
//!
//! The `par_*` forms split the output into chunks of
//! [`PARALLEL_CHUNK_SIZE`] elements and hand them to rayon once the input is
//! longer than [`PARALLEL_SIMD_THRESHOLD`]. Below that they run on the
//! calling thread.
//!
//! Single-precision `exp2` and `ln` have no dedicated kernel; they widen each
//! vector to double precision and round the double result.
//!
//! ```rust
//! use lanemath::slice::SimdMath;
//!
//! let x: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = x.exp2();
//! for (got, want) in y.iter().zip([1.0, 2.0, 4.0, 8.0, 16.0]) {
//!     assert!((got - want).abs() <= want * 1e-15);
//! }
//! ```

use log::debug;
use rayon::prelude::*;

use crate::config::{active_backend, PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD};
use crate::error::{ensure_same_len, Result};
use crate::kernels::{f32 as k32, f64 as k64};
use crate::simd::{F32x4, F64x2, SimdF32, SimdF64};

/// Element-wise transcendental functions over slices.
pub trait SimdMath {
    type Output;

    fn sin(&self) -> Self::Output;
    fn cos(&self) -> Self::Output;
    fn exp(&self) -> Self::Output;
    fn exp2(&self) -> Self::Output;
    fn expm1(&self) -> Self::Output;
    fn ln(&self) -> Self::Output;
    fn tanh(&self) -> Self::Output;

    fn par_sin(&self) -> Self::Output;
    fn par_cos(&self) -> Self::Output;
    fn par_exp(&self) -> Self::Output;
    fn par_exp2(&self) -> Self::Output;
    fn par_expm1(&self) -> Self::Output;
    fn par_ln(&self) -> Self::Output;
    fn par_tanh(&self) -> Self::Output;

    /// `sqrt(self[i]^2 + other[i]^2)`.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length.
    fn hypot(&self, other: &Self) -> Self::Output;

    /// `self[i]^other[i]`.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length.
    fn pow(&self, other: &Self) -> Self::Output;

    fn try_hypot(&self, other: &Self) -> Result<Self::Output>;
    fn try_pow(&self, other: &Self) -> Result<Self::Output>;
}

/// Load and store for the vector a driver runs on.
trait Lanes: Copy {
    type Elem: Copy + Send + Sync;

    const WIDTH: usize;

    fn load(src: &[Self::Elem]) -> Self;
    fn load_partial(src: &[Self::Elem], fill: Self::Elem) -> Self;
    fn store(self, dst: &mut [Self::Elem]);
    fn store_partial(self, dst: &mut [Self::Elem]);
}

macro_rules! impl_lanes {
    ($vec:ty, $elem:ty, $simd:ident) => {
        impl Lanes for $vec {
            type Elem = $elem;

            const WIDTH: usize = <$vec as $simd>::LANES;

            #[inline(always)]
            fn load(src: &[$elem]) -> Self {
                <$vec as $simd>::load(src)
            }

            #[inline(always)]
            fn load_partial(src: &[$elem], fill: $elem) -> Self {
                <$vec as $simd>::load_partial(src, fill)
            }

            #[inline(always)]
            fn store(self, dst: &mut [$elem]) {
                <$vec as $simd>::store(self, dst)
            }

            #[inline(always)]
            fn store_partial(self, dst: &mut [$elem]) {
                <$vec as $simd>::store_partial(self, dst)
            }
        }
    };
}

impl_lanes!(F64x2, f64, SimdF64);
impl_lanes!(F32x4, f32, SimdF32);

/// Runs `f` over `src` into `dst`, which must have the same length.
#[inline(always)]
fn map_into<V: Lanes>(src: &[V::Elem], dst: &mut [V::Elem], fill: V::Elem, f: &impl Fn(V) -> V) {
    debug_assert_eq!(src.len(), dst.len());
    let step = V::WIDTH;
    let full = src.len() - src.len() % step;

    for (a, c) in src[..full]
        .chunks_exact(step)
        .zip(dst[..full].chunks_exact_mut(step))
    {
        f(V::load(a)).store(c);
    }

    if full < src.len() {
        f(V::load_partial(&src[full..], fill)).store_partial(&mut dst[full..]);
    }
}

#[inline(always)]
fn map2_into<V: Lanes>(
    a: &[V::Elem],
    b: &[V::Elem],
    dst: &mut [V::Elem],
    fill: V::Elem,
    f: &impl Fn(V, V) -> V,
) {
    debug_assert!(a.len() == b.len() && a.len() == dst.len());
    let step = V::WIDTH;
    let full = a.len() - a.len() % step;

    for ((x, y), c) in a[..full]
        .chunks_exact(step)
        .zip(b[..full].chunks_exact(step))
        .zip(dst[..full].chunks_exact_mut(step))
    {
        f(V::load(x), V::load(y)).store(c);
    }

    if full < a.len() {
        let x = V::load_partial(&a[full..], fill);
        let y = V::load_partial(&b[full..], fill);
        f(x, y).store_partial(&mut dst[full..]);
    }
}

fn map<V: Lanes>(src: &[V::Elem], fill: V::Elem, f: impl Fn(V) -> V) -> Vec<V::Elem> {
    let mut out = vec![fill; src.len()];
    map_into(src, &mut out, fill, &f);
    out
}

fn par_map<V: Lanes>(
    src: &[V::Elem],
    fill: V::Elem,
    f: impl Fn(V) -> V + Sync,
) -> Vec<V::Elem> {
    if src.len() <= PARALLEL_SIMD_THRESHOLD {
        return map(src, fill, f);
    }

    let step = V::WIDTH;
    let chunk_size = ((PARALLEL_CHUNK_SIZE / step) * step).max(step);
    debug!(
        "parallel map: {} elements in {} chunks of {} on {}",
        src.len(),
        src.len().div_ceil(chunk_size),
        chunk_size,
        active_backend().name()
    );

    let mut out = vec![fill; src.len()];
    out.par_chunks_mut(chunk_size)
        .zip(src.par_chunks(chunk_size))
        .for_each(|(c_chunk, a_chunk)| map_into(a_chunk, c_chunk, fill, &f));
    out
}

fn try_map2<V: Lanes>(
    a: &[V::Elem],
    b: &[V::Elem],
    fill: V::Elem,
    f: impl Fn(V, V) -> V,
) -> Result<Vec<V::Elem>> {
    ensure_same_len(a.len(), b.len())?;
    let mut out = vec![fill; a.len()];
    map2_into(a, b, &mut out, fill, &f);
    Ok(out)
}

/// Runs a double-precision kernel on both halves of a float vector.
#[inline(always)]
fn widened<V: SimdF32>(x: V, f: impl Fn(V::Wide) -> V::Wide) -> V {
    V::narrow(f(x.widen_lo()), f(x.widen_hi()))
}

fn exp2_f32(x: F32x4) -> F32x4 {
    widened(x, k64::exp2)
}

fn ln_f32(x: F32x4) -> F32x4 {
    widened(x, k64::log)
}

macro_rules! impl_simd_math {
    (
        $elem:ty, $vec:ty,
        sin: $sin:path, cos: $cos:path, exp: $exp:path, exp2: $exp2:path,
        expm1: $expm1:path, ln: $ln:path, tanh: $tanh:path,
        hypot: $hypot:path, pow: $pow:path
    ) => {
        impl SimdMath for [$elem] {
            type Output = Vec<$elem>;

            fn sin(&self) -> Vec<$elem> {
                map::<$vec>(self, 0.0, $sin)
            }

            fn cos(&self) -> Vec<$elem> {
                map::<$vec>(self, 0.0, $cos)
            }

            fn exp(&self) -> Vec<$elem> {
                map::<$vec>(self, 0.0, $exp)
            }

            fn exp2(&self) -> Vec<$elem> {
                map::<$vec>(self, 0.0, $exp2)
            }

            fn expm1(&self) -> Vec<$elem> {
                map::<$vec>(self, 1.0, $expm1)
            }

            fn ln(&self) -> Vec<$elem> {
                map::<$vec>(self, 1.0, $ln)
            }

            fn tanh(&self) -> Vec<$elem> {
                map::<$vec>(self, 0.0, $tanh)
            }

            fn par_sin(&self) -> Vec<$elem> {
                par_map::<$vec>(self, 0.0, $sin)
            }

            fn par_cos(&self) -> Vec<$elem> {
                par_map::<$vec>(self, 0.0, $cos)
            }

            fn par_exp(&self) -> Vec<$elem> {
                par_map::<$vec>(self, 0.0, $exp)
            }

            fn par_exp2(&self) -> Vec<$elem> {
                par_map::<$vec>(self, 0.0, $exp2)
            }

            fn par_expm1(&self) -> Vec<$elem> {
                par_map::<$vec>(self, 1.0, $expm1)
            }

            fn par_ln(&self) -> Vec<$elem> {
                par_map::<$vec>(self, 1.0, $ln)
            }

            fn par_tanh(&self) -> Vec<$elem> {
                par_map::<$vec>(self, 0.0, $tanh)
            }

            fn hypot(&self, other: &Self) -> Vec<$elem> {
                assert_eq!(self.len(), other.len(), "Vectors must be the same length");
                self.try_hypot(other).unwrap_or_default()
            }

            fn pow(&self, other: &Self) -> Vec<$elem> {
                assert_eq!(self.len(), other.len(), "Vectors must be the same length");
                self.try_pow(other).unwrap_or_default()
            }

            fn try_hypot(&self, other: &Self) -> Result<Vec<$elem>> {
                try_map2::<$vec>(self, other, 1.0, $hypot)
            }

            fn try_pow(&self, other: &Self) -> Result<Vec<$elem>> {
                try_map2::<$vec>(self, other, 1.0, $pow)
            }
        }
    };
}

impl_simd_math!(
    f64, F64x2,
    sin: k64::sin, cos: k64::cos, exp: k64::exp, exp2: k64::exp2,
    expm1: k64::expm1, ln: k64::log, tanh: k64::tanh,
    hypot: k64::hypot, pow: k64::pow
);

impl_simd_math!(
    f32, F32x4,
    sin: k32::sinf, cos: k32::cosf, exp: k32::expf, exp2: exp2_f32,
    expm1: k32::expm1f, ln: ln_f32, tanh: k32::tanhf,
    hypot: k32::hypotf, pow: k32::powf
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LanemathError;

    fn inputs_f64(n: usize) -> Vec<f64> {
        (0..n).map(|i| (i as f64 - n as f64 / 2.0) * 0.37).collect()
    }

    #[test]
    fn test_tail_lengths() {
        for n in 0..9 {
            let x = inputs_f64(n);
            let got = x.as_slice().sin();
            assert_eq!(got.len(), n);
            for (g, v) in got.iter().zip(&x) {
                assert!((g - v.sin()).abs() < 1e-15, "sin({v}) with len {n}");
            }
        }
    }

    #[test]
    fn test_tail_matches_full_vectors() {
        let x = inputs_f64(7);
        let whole = x.as_slice().exp();
        for (i, &v) in x.iter().enumerate() {
            let single = x[i..i + 1].exp();
            assert_eq!(single[0].to_bits(), whole[i].to_bits(), "exp({v})");
        }
    }

    #[test]
    fn test_par_matches_sequential() {
        let n = PARALLEL_SIMD_THRESHOLD + 1234;
        let x: Vec<f32> = (0..n).map(|i| (i % 1000) as f32 * 0.01 - 5.0).collect();
        assert_eq!(x.par_tanh(), x.tanh());
        assert_eq!(x.par_cos(), x.cos());
    }

    #[test]
    fn test_f32_widened_functions() {
        let x = [1.0f32, 8.0, 0.5, 1024.0, 3.0];
        let ln = x.ln();
        let exp2 = x.exp2();
        for (i, &v) in x.iter().enumerate() {
            assert!((ln[i] - v.ln()).abs() <= f32::EPSILON, "ln({v})");
            if v.exp2().is_infinite() {
                assert_eq!(exp2[i], f32::INFINITY, "exp2({v})");
            } else {
                assert!((exp2[i] - v.exp2()).abs() <= v.exp2() * f32::EPSILON, "exp2({v})");
            }
        }
    }

    #[test]
    fn test_binary_drivers() {
        let a = [3.0f64, 5.0, 8.0, 7.0, 20.0];
        let b = [4.0, 12.0, 15.0, 24.0, 21.0];
        assert_eq!(a.hypot(&b), vec![5.0, 13.0, 17.0, 25.0, 29.0]);

        let p = [2.0f32, 3.0, 0.5].pow(&[10.0, 2.0, -1.0]);
        for (got, want) in p.iter().zip([1024.0f32, 9.0, 2.0]) {
            assert!((got - want).abs() <= want * 4.0 * f32::EPSILON);
        }
    }

    #[test]
    fn test_try_binary_length_mismatch() {
        let err = [1.0f64, 2.0].try_pow(&[1.0]).unwrap_err();
        assert_eq!(err, LanemathError::LengthMismatch { left: 2, right: 1 });
        assert!([1.0f32].try_hypot(&[]).is_err());
    }

    #[test]
    #[should_panic(expected = "Vectors must be the same length")]
    fn test_hypot_panics_on_mismatch() {
        let _ = [1.0f64, 2.0].hypot(&[1.0]);
    }
}
