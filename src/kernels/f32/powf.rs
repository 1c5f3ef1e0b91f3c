//! Single-precision `pow`.
//!
//! `x^y = 2^(y log2 x)`. Both halves run in double precision on the widened
//! lanes, so the intermediate `y log2(x)` keeps enough bits for a 2.1 ULP
//! result without a double-double.
//!
//! Zero, infinite and NaN operands are patched afterwards by a scalar routine
//! that only has to decide the IEEE corner cases. Negative and subnormal `x`
//! stay on the vector path: the sign is carried as a bias added into the
//! exponent of the `exp2` scale, and subnormals are renormalised first.

use crate::fallback::call2_f32;
use crate::simd::{SimdBits, SimdF32, SimdF64};
use crate::special::any;
use crate::tables::pow::{
    POWF_EXP2_LEN, POWF_EXP2_POLY, POWF_EXP2_TABLE, POWF_EXP2_TABLE_BITS, POWF_LOG2_LEN,
    POWF_LOG2_POLY, POWF_LOG2_TABLE,
};

/// Lands on the sign bit once shifted left by `52 - POWF_EXP2_TABLE_BITS`.
const SIGN_BIAS: u32 = 1 << (POWF_EXP2_TABLE_BITS + 11);

/// Subintervals of the log2 table start at this mantissa (≈ 0.71).
const OFF: u32 = 0x3f35_d000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// `2^23` and `23 << 23`, used to renormalise subnormal `x`.
const NORM: f32 = f32::from_bits(0x4b00_0000);
const SUBNORMAL_BIAS: u32 = 0x0b80_0000;

const MIN_NORMAL: f32 = f32::from_bits(0x0080_0000);
const INF: u32 = 0x7f80_0000;

/// `2 * bits(inf) - 1`, see [`zero_inf_nan`].
const SPECIAL_BOUND: u32 = 2 * INF - 1;

/// Limits on `N y log2(x)`: `-150 N` and `128 N` for `N = 32`.
const UFLOW_BOUND: f32 = f32::from_bits(0xc596_0000);
const OFLOW_BOUND: f32 = f32::from_bits(0x4580_0000);

/// `2 i - 1 >= 2 bits(inf) - 1`: true for ±0, ±∞ and NaN.
#[inline(always)]
fn zero_inf_nan<B: SimdBits<Scalar = u32>>(i: B) -> B {
    ((i + i) - B::splat(1)).simd_ge(B::splat(SPECIAL_BOUND))
}

#[inline(always)]
fn is_int<V: SimdF32>(x: V) -> V::Bits {
    x.trunc().simd_eq(x)
}

/// True for odd integers, and for every non-integer too. Callers only rely
/// on it where `y` is known to be integral or the lane is discarded.
#[inline(always)]
fn is_odd<V: SimdF32>(x: V) -> V::Bits {
    !is_int(x * V::splat(0.5))
}

/// `N y log2(x)` in double precision.
///
/// `x = 2^k z` with `z` in `[OFF, 2 OFF)`, and `log2(x) = log2(z/c) +
/// log2(c) + k` for the table's `c` nearest `z`.
#[inline(always)]
fn ylogx_core<W: SimdF64>(iz: W, k: W, invc: W, logc: W, y: W) -> W {
    let r = iz.mul_add(invc, W::splat(-1.0));
    let y0 = logc + k;

    let p = &POWF_LOG2_POLY;
    let logx = r.mul_add(W::splat(p[0]), W::splat(p[1]));
    let logx = logx.mul_add(r, W::splat(p[2]));
    let logx = logx.mul_add(r, W::splat(p[3]));
    let logx = logx.mul_add(r, y0);
    logx * y
}

/// `2^(ylogx / N)`, with `sign_bias` flipping the sign of the scale.
#[inline(always)]
fn exp2_core<W: SimdF64>(ylogx: W, sign_bias: W::Bits) -> W {
    let kd = ylogx.round();
    let ki = kd.to_int();
    let r = ylogx - kd;

    let idx = ki & W::Bits::splat(POWF_EXP2_LEN as u64 - 1);
    let t = W::Bits::gather(&POWF_EXP2_TABLE, idx) + (ki + sign_bias).shl::<47>();
    let s = W::from_bits(t);

    let e = &POWF_EXP2_POLY;
    let p = r.mul_add(W::splat(e[0]), W::splat(e[1]));
    let p = r.mul_add(p, W::splat(e[2]));
    p.mul_add(s * r, s)
}

/// `|x|^y` with the sign taken from `sign_bias`, before special-case
/// patching. Over- and underflow are resolved here from `y log2(x)`.
#[inline]
fn powf_core<V: SimdF32>(x: V, y: V, sign_bias: V::Bits) -> V {
    let ix = x.to_bits();
    let tmp = ix - V::Bits::splat(OFF);
    let top = tmp.and_not(V::Bits::splat(MANTISSA_MASK));
    let iz = V::from_bits(ix - top);
    // Exponent scaled by N, sign-extended.
    let k = V::from_int(top.asr::<{ 23 - POWF_EXP2_TABLE_BITS as i32 }>());
    let idx = tmp.shr::<{ 23 - POWF_EXP2_TABLE_BITS as i32 }>()
        & V::Bits::splat(POWF_LOG2_LEN as u32 - 1);

    let half = <V::Wide as SimdF64>::LANES;
    let eval = |offset: usize, iz: V::Wide, k: V::Wide, y: V::Wide| {
        let entry = |i: usize| POWF_LOG2_TABLE[idx.extract(offset + i) as usize];
        let invc = V::Wide::from_fn(|i| entry(i).0);
        let logc = V::Wide::from_fn(|i| entry(i).1);
        let bias = <V::Wide as SimdF64>::Bits::from_fn(|i| sign_bias.extract(offset + i) as u64);
        let ylogx = ylogx_core(iz, k, invc, logc, y);
        (exp2_core(ylogx, bias), ylogx)
    };
    let (ret_lo, ylogx_lo) = eval(0, iz.widen_lo(), k.widen_lo(), y.widen_lo());
    let (ret_hi, ylogx_hi) = eval(half, iz.widen_hi(), k.widen_hi(), y.widen_hi());

    let ret = V::narrow(ret_lo, ret_hi);
    let ylogx = V::narrow(ylogx_lo, ylogx_hi);

    let sign = sign_bias.shl::<{ 20 - POWF_EXP2_TABLE_BITS as i32 }>();
    let oflow = V::from_bits(sign | V::Bits::splat(INF));
    let uflow = V::from_bits(sign);
    let ret = V::select(ylogx.simd_le(V::splat(UFLOW_BOUND)), uflow, ret);
    V::select(ylogx.simd_gt(V::splat(OFLOW_BOUND)), oflow, ret)
}

/// Vector path when some `x` is negative or subnormal.
#[inline(never)]
fn powf_neg_or_small<V: SimdF32>(x: V, y: V) -> V {
    let x_neg = x.simd_lt(V::splat(0.0));
    let x_small = x.abs().simd_lt(V::splat(MIN_NORMAL));

    // A negative base with an odd exponent gives a negative result.
    let sign_bias = V::Bits::splat(SIGN_BIAS) & (is_odd(y) & x_neg);

    let a = x.abs();
    let ia_norm = (a * V::splat(NORM)).to_bits() - V::Bits::splat(SUBNORMAL_BIAS);
    let a = V::select(x_small, V::from_bits(ia_norm), a);

    let ret = powf_core(a, y, sign_bias);

    // Negative base to a non-integer power.
    let defined = is_int(y) | !x_neg;
    V::select(defined, ret, V::splat(f32::NAN))
}

/// 0 for non-integers, 1 for odd integers, 2 for even integers. `iy` must
/// be the bits of a finite non-zero float.
fn check_int(iy: u32) -> u32 {
    let e = (iy >> 23) & 0xff;
    if e < 0x7f {
        return 0;
    }
    if e > 0x7f + 23 {
        return 2;
    }
    if iy & ((1 << (0x7f + 23 - e)) - 1) != 0 {
        return 0;
    }
    if iy & (1 << (0x7f + 23 - e)) != 0 {
        return 1;
    }
    2
}

fn is_signaling(x: f32) -> bool {
    let ix = x.to_bits();
    (ix & 0x7fc0_0000) == 0x7f80_0000 && ix & 0x003f_ffff != 0
}

fn zero_inf_nan_scalar(i: u32) -> bool {
    i.wrapping_mul(2).wrapping_sub(1) >= SPECIAL_BOUND
}

/// IEEE corner cases of `powf` where `x` or `y` is ±0, ±∞ or NaN.
fn powf_special_case(x: f32, y: f32) -> f32 {
    let ix = x.to_bits();
    let iy = y.to_bits();

    if zero_inf_nan_scalar(iy) {
        if iy << 1 == 0 {
            return if is_signaling(x) { x + y } else { 1.0 };
        }
        if ix == 0x3f80_0000 {
            return if is_signaling(y) { x + y } else { 1.0 };
        }
        if ix << 1 > INF << 1 || iy << 1 > INF << 1 {
            return x + y;
        }
        if ix << 1 == 0x3f80_0000 << 1 {
            return 1.0;
        }
        // |x| < 1 with y = +inf, or |x| > 1 with y = -inf.
        if (ix << 1 < 0x3f80_0000 << 1) == (iy & 0x8000_0000 == 0) {
            return 0.0;
        }
        return y * y;
    }

    if zero_inf_nan_scalar(ix) {
        let mut x2 = x * x;
        if ix & 0x8000_0000 != 0 && check_int(iy) == 1 {
            x2 = -x2;
        }
        return if iy & 0x8000_0000 != 0 { 1.0 / x2 } else { x2 };
    }
    x
}

/// Single-precision `x^y` for every pair of lanes.
///
/// # Algorithm Overview
/// 1. Split `x = 2^k z`, look up `(1/c, N log2 c)` for the 32 subintervals
///    of `z`, and evaluate `N log2(x)` with a degree-4 polynomial in
///    double precision.
/// 2. Multiply by `y` and take `2^(. / N)` from a 32-entry table and a
///    cubic, again in double precision, then round to single.
/// 3. Results beyond `2^128` or below `2^-150` saturate.
///
/// Negative `x` with integer `y` gets its sign from the parity of `y`;
/// with non-integer `y` it gives NaN.
///
/// # Special Values
/// | x | y | Output |
/// |---|---|--------|
/// | any | ±0 | 1 |
/// | 1 | any | 1 |
/// | -1 | ±∞ | 1 |
/// | ±0 | odd `y < 0` | ±∞ |
/// | ±0 | other `y < 0` | +∞ |
/// | \|x\| < 1 | +∞ | +0 |
/// | \|x\| > 1 | -∞ | +0 |
/// | NaN | `y != 0` | NaN |
///
/// Maximum error 2.1 ULP.
#[inline]
pub fn powf<V: SimdF32>(x: V, y: V) -> V {
    let cmp = zero_inf_nan(x.to_bits()) | zero_inf_nan(y.to_bits());

    let x_neg_or_small = x.simd_lt(V::splat(MIN_NORMAL));
    let ret = if any(x_neg_or_small) {
        powf_neg_or_small(x, y)
    } else {
        powf_core(x, y, V::Bits::splat(0))
    };

    if any(cmp) {
        return call2_f32("powf", powf_special_case, x, y, ret, cmp);
    }
    ret
}
