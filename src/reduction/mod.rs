//! Argument reduction.
//!
//! The cheap reductions here serve the bounded fast paths: they subtract a
//! rounded multiple of π or ln2 using a constant split into parts that make
//! every product exact. Trig arguments beyond `2^23` go through
//! [`large`], which multiplies by 2/π to about 144 bits.

pub mod large;

use crate::dd::DoubleDouble;
use crate::simd::{FloatOps, SimdF32, SimdF64};
use crate::tables::trig::{INV_PI, PI_1, PI_2, PI_3};

/// Quadrant and remainder of `x` modulo π/2.
///
/// `x = k π/2 + remainder` for some integer `k` with `k & 3 == quadrant`,
/// and `|remainder| < π/4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedArgument {
    pub quadrant: u32,
    pub remainder: DoubleDouble,
}

/// `ln2 / N` split for a table of `N` entries per octave.
///
/// `ln2_hi` has enough trailing zeros that `n * ln2_hi` is exact for every
/// `n` the caller can produce.
#[derive(Debug, Clone, Copy)]
pub struct Ln2Split<T> {
    pub inv_ln2: T,
    pub ln2_hi: T,
    pub ln2_lo: T,
}

/// `n = round(x / π)` and `r = x - n π`, with `|r| <= π/2`.
///
/// Accurate for `|x| < 2^23`; larger arguments lose bits of `n π`.
#[inline(always)]
pub fn reduce_pi<V: SimdF64>(x: V) -> (V, V) {
    let n = (x * V::splat(INV_PI)).round();
    (n, subtract_pi_multiple(x, n))
}

/// `x - n π` with the 3-part π.
#[inline(always)]
pub fn subtract_pi_multiple<V: SimdF64>(x: V, n: V) -> V {
    let r = n.nmul_add(V::splat(PI_1), x);
    let r = n.nmul_add(V::splat(PI_2), r);
    n.nmul_add(V::splat(PI_3), r)
}

/// `n = round(x N / ln2)` and `r = x - n ln2 / N`.
#[inline(always)]
pub fn reduce_ln2<V: SimdF64>(x: V, c: &Ln2Split<f64>) -> (V, V) {
    let n = (x * V::splat(c.inv_ln2)).round();
    (n, subtract_ln2_multiple(x, n, c))
}

/// Single-precision form of [`reduce_ln2`].
#[inline(always)]
pub fn reduce_ln2_f32<V: SimdF32>(x: V, c: &Ln2Split<f32>) -> (V, V) {
    let n = (x * V::splat(c.inv_ln2)).round();
    (n, subtract_ln2_multiple(x, n, c))
}

#[inline(always)]
fn subtract_ln2_multiple<T: FloatOps>(x: T, n: T, c: &Ln2Split<T::Scalar>) -> T {
    let r = n.nmul_add(T::splat(c.ln2_hi), x);
    n.nmul_add(T::splat(c.ln2_lo), r)
}
