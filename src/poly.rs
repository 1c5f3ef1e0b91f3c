//! Polynomial evaluation schemes.
//!
//! All evaluators take coefficients in ascending order (`c[0]` is the
//! constant term) and are generic over [`FloatOps`], so the same code runs on
//! scalars and every lane vector. Each kernel picks the scheme that fits its
//! latency budget:
//!
//! | scheme            | dependency chain | extra multiplies |
//! |-------------------|------------------|------------------|
//! | `horner`          | n fma            | none             |
//! | `pairwise_horner` | n/2 fma          | `x^2`            |
//! | `estrin`          | log2(n) levels   | `x^2, x^4, ...`  |

use crate::simd::FloatOps;

/// `c0 + x (c1 + x (c2 + ...))`.
#[inline(always)]
pub fn horner<T: FloatOps>(x: T, c: &[T::Scalar]) -> T {
    let Some((&last, rest)) = c.split_last() else {
        return T::splat(num::zero());
    };
    rest.iter()
        .rev()
        .fold(T::splat(last), |acc, &ci| acc.mul_add(x, T::splat(ci)))
}

/// `(c0 + x c1) + x2 ((c2 + x c3) + x2 (...))`.
///
/// `x2` must be `x * x`. An odd trailing coefficient is added as is.
#[inline(always)]
pub fn pairwise_horner<T: FloatOps>(x: T, x2: T, c: &[T::Scalar]) -> T {
    let pair = |i: usize| -> T {
        match c.get(i + 1) {
            Some(&hi) => x.mul_add(T::splat(hi), T::splat(c[i])),
            None => T::splat(c[i]),
        }
    };

    let pairs = c.len().div_ceil(2);
    if pairs == 0 {
        return T::splat(num::zero());
    }
    (0..pairs - 1)
        .rev()
        .fold(pair(2 * (pairs - 1)), |acc, p| x2.mul_add(acc, pair(2 * p)))
}

/// Estrin's scheme.
///
/// `powers` holds `[x, x^2, x^4, x^8, ...]`, enough entries to cover
/// `c.len()`. The coefficients are split at the largest power of two `m`
/// below their count and combined as `lo + x^m hi`, recursively.
#[inline(always)]
pub fn estrin<T: FloatOps>(powers: &[T], c: &[T::Scalar]) -> T {
    match c.len() {
        0 => T::splat(num::zero()),
        1 => T::splat(c[0]),
        2 => powers[0].mul_add(T::splat(c[1]), T::splat(c[0])),
        n => {
            let level = (usize::BITS - 1 - (n - 1).leading_zeros()) as usize;
            let m = 1usize << level;
            let lo = estrin(powers, &c[..m]);
            let hi = estrin(powers, &c[m..]);
            powers[level].mul_add(hi, lo)
        }
    }
}
