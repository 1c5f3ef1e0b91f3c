//! Lane-wise scalar fallback.
//!
//! Kernels call these for the lanes their fast path cannot handle. Each
//! flagged lane is recomputed with a scalar reference routine, every other
//! lane keeps the fast-path result untouched.

use log::trace;

use crate::simd::{SimdBits, SimdF32, SimdF64};

/// `mask[i] ? f(x[i]) : y[i]`.
#[inline(never)]
pub fn call_f64<V: SimdF64>(name: &str, f: fn(f64) -> f64, x: V, y: V, mask: V::Bits) -> V {
    trace!("{name}: {} lane(s) to scalar fallback", flagged(mask));
    V::from_fn(|i| {
        if mask.extract(i) != 0 {
            f(x.extract(i))
        } else {
            y.extract(i)
        }
    })
}

/// `mask[i] ? f(x1[i], x2[i]) : y[i]`.
#[inline(never)]
pub fn call2_f64<V: SimdF64>(
    name: &str,
    f: fn(f64, f64) -> f64,
    x1: V,
    x2: V,
    y: V,
    mask: V::Bits,
) -> V {
    trace!("{name}: {} lane(s) to scalar fallback", flagged(mask));
    V::from_fn(|i| {
        if mask.extract(i) != 0 {
            f(x1.extract(i), x2.extract(i))
        } else {
            y.extract(i)
        }
    })
}

#[inline(never)]
pub fn call_f32<V: SimdF32>(name: &str, f: fn(f32) -> f32, x: V, y: V, mask: V::Bits) -> V {
    trace!("{name}: {} lane(s) to scalar fallback", flagged(mask));
    V::from_fn(|i| {
        if mask.extract(i) != 0 {
            f(x.extract(i))
        } else {
            y.extract(i)
        }
    })
}

#[inline(never)]
pub fn call2_f32<V: SimdF32>(
    name: &str,
    f: fn(f32, f32) -> f32,
    x1: V,
    x2: V,
    y: V,
    mask: V::Bits,
) -> V {
    trace!("{name}: {} lane(s) to scalar fallback", flagged(mask));
    V::from_fn(|i| {
        if mask.extract(i) != 0 {
            f(x1.extract(i), x2.extract(i))
        } else {
            y.extract(i)
        }
    })
}

fn flagged<B: SimdBits>(mask: B) -> usize {
    (0..B::LANES)
        .filter(|&i| mask.extract(i) != num::zero())
        .count()
}
