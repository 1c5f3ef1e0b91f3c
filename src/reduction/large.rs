//! Extended-precision reduction for trig arguments beyond `2^23`.
//!
//! `x · 2/π` is formed as six partial products of a split `x` against 24-bit
//! digits of 2/π, starting at the first digit block that still contributes
//! to the fractional part. Integer parts are peeled off as they appear and
//! kept modulo 4, the fraction is carried as a double-double and converted
//! back to radians at the end.
//!
//! The two lanes of an [`F64x2`] are used twice over. While forming the
//! products each lane runs one digit apart within the same half of `x`; after
//! the transpose the lanes hold the high and low halves of `x` side by side.

use crate::dd::{dd_multiply, split_accurate, DoubleDouble};
use crate::reduction::ReducedArgument;
use crate::simd::{F64x2, FloatOps, SimdF64};
use crate::tables::trig::{HP0, HP1, INV_PIO2, MP0, MP1, SHIFT_MOD4, SINCOS_POLY};

const SCALE_DOWN: f64 = f64::from_bits(0x1a70_0000_0000_0000); // 0x1p-600
const SCALE_UP_BITS: u64 = 0x63f0_0000_0000_0000; // 0x1p576
const TWO_M24: f64 = f64::from_bits(0x3e70_0000_0000_0000);
const TWO_M48: f64 = f64::from_bits(0x3cf0_0000_0000_0000);

/// Digits consumed per half of `x`.
const DIGITS: usize = 6;

/// First digit of 2/π whose product with `part` can reach the fraction.
#[inline]
fn block_index(part: f64) -> usize {
    let biased = ((part.to_bits() >> 52) & 0x7ff) as i32;
    ((biased - 450) / 24).max(0) as usize
}

/// `part · 2/π` restricted to digits `k..k+6`, two digits per vector.
#[inline]
fn half_products(part: f64) -> [F64x2; 3] {
    let k = block_index(part);
    let scale = f64::from_bits(SCALE_UP_BITS - (((k * 24) as u64) << 52));
    let offset = F64x2::from_fn(|i| [1.0, TWO_M24][i]);

    let mut factor = F64x2::splat(scale) * offset * F64x2::splat(part);
    let mut out = [F64x2::splat(0.0); DIGITS / 2];
    for (j, slot) in out.iter_mut().enumerate() {
        *slot = factor * F64x2::load(&INV_PIO2[k + 2 * j..]);
        factor = factor * F64x2::splat(TWO_M48);
    }
    out
}

/// The six partial products of `x · 2/π`, lane 0 from the high half of `x`
/// and lane 1 from the low half.
fn partial_products(x: f64) -> [F64x2; DIGITS] {
    let split = split_accurate(x * SCALE_DOWN);
    let hi = half_products(split.hi);
    let lo = half_products(split.lo);

    let mut r = [F64x2::splat(0.0); DIGITS];
    for j in 0..DIGITS / 2 {
        r[2 * j] = F64x2::from_fn(|i| [hi[j].extract(0), lo[j].extract(0)][i]);
        r[2 * j + 1] = F64x2::from_fn(|i| [hi[j].extract(1), lo[j].extract(1)][i]);
    }
    r
}

/// `x · 2/π = k + fraction` with `|fraction| <= 1/2`.
///
/// Returns `k & 3` and the fraction in quarter turns.
fn reduce_quarter_turns(x: f64) -> (u32, DoubleDouble) {
    let mut r = partial_products(x);

    let mut sum = F64x2::splat(0.0);
    for ri in r.iter_mut().take(3) {
        let s = ri.round();
        sum = sum + s;
        *ri = *ri - s;
    }

    let mut tail_hi = r[0] + (r[1] + ((r[5] + r[4]) + (r[3] + r[2])));
    let tail_lo = ((((r[0] - tail_hi) + r[1]) + r[2]) + r[3]) + (r[4] + r[5]);

    let s = tail_hi.round();
    sum = sum + s;
    tail_hi = tail_hi - s;

    let tail = tail_hi + tail_lo;
    let tail_lo = (tail_hi - tail) + tail_lo;

    let shift = F64x2::splat(SHIFT_MOD4);
    sum = sum - ((sum + shift) - shift);

    let mut s_sum = sum.extract(0) + sum.extract(1);
    let mut s_tail_hi = tail.extract(0) + tail.extract(1);
    let mut s_tail_lo = tail_lo.extract(0) + tail_lo.extract(1);

    let (hi, lo) = if tail.extract(0).abs() > tail.extract(1).abs() {
        (tail.extract(0), tail.extract(1))
    } else {
        (tail.extract(1), tail.extract(0))
    };
    s_tail_lo += (hi - s_tail_hi) + lo;

    if s_tail_hi > 0.5 {
        s_tail_hi -= 1.0;
        s_sum += 1.0;
    } else if s_tail_hi < -0.5 {
        s_tail_hi += 1.0;
        s_sum -= 1.0;
    }

    let fraction = DoubleDouble::from_exact_add(s_tail_hi, s_tail_lo);
    ((s_sum as i64 & 3) as u32, fraction)
}

/// Reduces a finite `x` with `|x| > 2^23` modulo π/2.
///
/// Smaller arguments are handled, but less efficiently than by
/// [`reduce_pi`](super::reduce_pi). Infinite or NaN input gives a
/// meaningless result.
pub fn reduce(x: f64) -> ReducedArgument {
    let (quadrant, fraction) = reduce_quarter_turns(x);
    let s = fraction.hi;
    let t = fraction.lo;

    // (s + t) π/2: primary product with hp0, split terms with mp0 + mp1.
    let correction = s * HP1 + t * HP0;
    let remainder = dd_multiply(s, HP0, MP0, MP1, correction);

    ReducedArgument {
        quadrant,
        remainder,
    }
}

/// `sin` or `cos` of a reduced argument, selected by the quadrant `n`.
///
/// `n = 0, 1, 2, 3` gives `sin r, cos r, -sin r, -cos r`.
pub fn do_sincos(n: u32, r: DoubleDouble) -> f64 {
    let x = r.hi;
    let dx = r.lo;
    let c = &SINCOS_POLY[(n & 1) as usize..];

    let x2 = x * x;
    let x4 = x2 * x2;

    let t1 = c[10].mul_add(x2, c[8]);
    let t2 = c[6].mul_add(x2, c[4]);
    let t3 = c[2].mul_add(x2, c[0]);

    let poly = c[12].mul_add(x4, t1);
    let poly = poly.mul_add(x4, t2);
    let poly = poly.mul_add(x4, t3);

    let y = if n & 1 != 0 {
        1.0 + (poly - 0.5 * dx).mul_add(x2, dx)
    } else {
        x + (poly * x - 0.5 * dx).mul_add(x2, dx)
    };

    if n & 2 != 0 {
        -y
    } else {
        y
    }
}

/// `sin(x)` for any `x`, accurate to about 3 ULP.
pub fn sin_fallback(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let reduced = reduce(x);
    do_sincos(reduced.quadrant, reduced.remainder)
}

/// `cos(x)` for any `x`, accurate to about 3 ULP.
pub fn cos_fallback(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let reduced = reduce(x);
    do_sincos(reduced.quadrant + 1, reduced.remainder)
}

/// `(sin(x), cos(x))` from a single reduction.
///
/// Both polynomials run side by side: lane 0 evaluates the sine, lane 1 the
/// cosine. The quadrant then swaps and negates the pair.
pub fn sincos_fallback(x: f64) -> (f64, f64) {
    if !x.is_finite() {
        return (f64::NAN, f64::NAN);
    }
    let ReducedArgument {
        quadrant,
        remainder: r,
    } = reduce(x);

    let c = |j: usize| F64x2::load(&SINCOS_POLY[2 * j..]);
    let offset = F64x2::from_fn(|i| [r.hi, 1.0][i]);
    let xv = F64x2::splat(r.hi);
    let dx = F64x2::splat(r.lo);
    let x2 = xv * xv;
    let x4 = x2 * x2;

    let t3 = x2.mul_add(c(1), c(0));
    let t2 = x2.mul_add(c(3), c(2));
    let t1 = x2.mul_add(c(5), c(4));

    let poly = x4.mul_add(c(6), t1);
    let poly = x4.mul_add(poly, t2);
    let poly = x4.mul_add(poly, t3);

    let poly = poly * offset;
    let poly = dx.mul_add(F64x2::splat(-0.5), poly);
    let poly = x2.mul_add(poly, dx);
    let y = offset + poly;

    let (s, c) = (y.extract(0), y.extract(1));
    match quadrant & 3 {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}
