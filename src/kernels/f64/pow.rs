//! Double-precision `pow`.
//!
//! `x^y = e^(y log x)`. `log x` comes out as a double-double carrying about
//! 68 bits, so `y log x` stays accurate for large `y`, and the exponential
//! folds the low part into its reduced argument.
//!
//! Zero, subnormal, negative, infinite and NaN `x`, and `y` that is not
//! finite or has `|y| >= 2^63`, are recomputed lane by lane with
//! `libm::pow`, which owns the IEEE corner cases.

use crate::fallback::call2_f64;
use crate::rescale::{compose, exp_special, table_scale};
use crate::simd::{SimdBits, SimdF64};
use crate::special::{abs_ge_f64, any, blend, mask_special, outside_range};
use crate::tables::exp::EXP_TABLE_LEN;
use crate::tables::pow::{
    POW_EXP_POLY, POW_EXP_TAIL, POW_LN2_HI, POW_LN2_LO, POW_LOG_INVC, POW_LOG_LEN, POW_LOG_LOGC,
    POW_LOG_LOGCTAIL, POW_LOG_OFF, POW_LOG_POLY,
};

use super::exp::{INV_LN2_N, LN2_HI_N, LN2_LO_N, SCALE_BOUND, SHIFT, SPECIAL_BOUND};

const MIN_NORM: u64 = 0x0010_0000_0000_0000;
const INF: u64 = 0x7ff0_0000_0000_0000;

/// `2^63`. Beyond it `y log x` can overflow before the exponential sees it.
const Y_BOUND: f64 = f64::from_bits(0x43e0_0000_0000_0000);

/// `log(x)` as `hi + lo` for positive normal `x`.
#[inline(always)]
fn log_inline<V: SimdF64>(x: V) -> (V, V) {
    let ix = x.to_bits();
    let tmp = ix - V::Bits::splat(POW_LOG_OFF);
    let i = tmp.shr::<45>() & V::Bits::splat(POW_LOG_LEN as u64 - 1);
    let k = V::from_int(tmp.asr::<52>());
    let z = V::from_bits(ix - (tmp & V::Bits::splat(0xfff0_0000_0000_0000)));

    let invc = V::gather(&POW_LOG_INVC, i);
    let logc = V::gather(&POW_LOG_LOGC, i);
    let logctail = V::gather(&POW_LOG_LOGCTAIL, i);

    // Exact: invc has at most 8 significant bits.
    let r = z.mul_add(invc, V::splat(-1.0));
    // k ln2 + log(c) + r, with the rounding error of each step kept.
    let t1 = k.mul_add(V::splat(POW_LN2_HI), logc);
    let t2 = t1 + r;
    let lo1 = k.mul_add(V::splat(POW_LN2_LO), logctail);
    let lo2 = (t1 - t2) + r;

    let a = &POW_LOG_POLY;
    let ar = V::splat(a[0]) * r;
    let ar2 = r * ar;
    let ar3 = r * ar2;
    let hi = t2 + ar2;
    let lo3 = ar.mul_add(r, -ar2);
    let lo4 = (t2 - hi) + ar2;

    let a56 = r.mul_add(V::splat(a[6]), V::splat(a[5]));
    let a34 = r.mul_add(V::splat(a[4]), V::splat(a[3]));
    let a12 = r.mul_add(V::splat(a[2]), V::splat(a[1]));
    let p = ar2.mul_add(a56, a34);
    let p = ar2.mul_add(p, a12);
    let p = ar3 * p;

    let lo = lo1 + lo2 + lo3 + lo4 + p;
    let y = hi + lo;
    (y, (hi - y) + lo)
}

/// `e^(x + xtail)` with `|xtail|` well below `ulp(x)`.
#[inline(always)]
fn exp_inline<V: SimdF64>(x: V, xtail: V) -> V {
    let z = x.mul_add(V::splat(INV_LN2_N), V::splat(SHIFT));
    let u = z.to_bits();
    let n = z - V::splat(SHIFT);

    let r = n.nmul_add(V::splat(LN2_HI_N), x);
    let r = n.nmul_add(V::splat(LN2_LO_N), r);
    let r = r + xtail;

    let c = &POW_EXP_POLY;
    let idx = u & V::Bits::splat(EXP_TABLE_LEN as u64 - 1);
    let tail = V::gather(&POW_EXP_TAIL, idx);
    let r2 = r * r;
    let p23 = r.mul_add(V::splat(c[1]), V::splat(c[0]));
    let p45 = r.mul_add(V::splat(c[3]), V::splat(c[2]));
    let p = r2.mul_add(p45, p23);
    // 2^(n/N) e^r = s (1 + tail) (1 + r + r^2 p)
    let poly = r2.mul_add(p, tail + r);

    let scale: V = table_scale(u, u.shl::<45>());
    let cmp = x.abs().simd_gt(V::splat(SPECIAL_BOUND));
    let y = compose(poly, scale);
    if any(cmp) {
        return blend(cmp, exp_special(poly, n, scale, V::splat(SCALE_BOUND)), y);
    }
    y
}

/// `x^y` for every pair of lanes.
///
/// # Algorithm Overview
/// 1. `x = 2^k z` with `z` in `[OFF, 2 OFF)`. The top mantissa bits of `z`
///    pick one of 128 subintervals, whose `1/c` makes `r = z/c - 1` exact.
/// 2. `log x = k ln2 + log c + log1p(r)` as a double-double: `log c` and
///    `ln2` are stored in two parts and every addition keeps its error.
/// 3. `y log x = ehi + elo`, with `elo` gathering `y lo` and the fma error
///    of `y hi`.
/// 4. `e^(ehi + elo)` on the shared 128-entry `2^(i/N)` table, with a
///    per-entry correction for the table rounding. Results beyond the
///    normal range take the split-scale path.
///
/// # Special Values
/// | x | y | Output |
/// |---|---|--------|
/// | any | ±0 | 1 |
/// | 1 | any | 1 |
/// | ±0 | odd `y < 0` | ±∞ |
/// | < 0 | non-integer | NaN |
/// | NaN | `y != 0` | NaN |
///
/// Maximum error 0.55 ULP.
#[inline]
pub fn pow<V: SimdF64>(x: V, y: V) -> V {
    let special = outside_range(x.to_bits(), MIN_NORM, INF) | abs_ge_f64(y, Y_BOUND);
    let xs = mask_special(x, special, 1.0);
    let ys = mask_special(y, special, 1.0);

    let (hi, lo) = log_inline(xs);
    let ehi = ys * hi;
    let elo = ys.mul_add(lo, ys.mul_add(hi, -ehi));
    let out = exp_inline(ehi, elo);

    if any(special) {
        return call2_f64("pow", libm::pow, x, y, out, special);
    }
    out
}
