use crate::config::WANT_SIMD_EXCEPT;
use crate::fallback::call_f64;
use crate::poly::estrin;
use crate::reduction::{reduce_ln2, Ln2Split};
use crate::simd::{SimdBits, SimdF64};
use crate::special::{abs_ge_f64, any, mask_special};

/// Taylor-like coefficients of `(expm1(f) - f) / f^2` on `[-ln2/2, ln2/2]`.
const POLY: [f64; 11] = [
    0.5,
    f64::from_bits(0x3fc5_5555_5555_5559),
    f64::from_bits(0x3fa5_5555_5555_554b),
    f64::from_bits(0x3f81_1111_1110_f663),
    f64::from_bits(0x3f56_c16c_16c1_b5f3),
    f64::from_bits(0x3f2a_01a0_1aff_a35d),
    f64::from_bits(0x3efa_01a0_18b4_ecbb),
    f64::from_bits(0x3ec7_1ddf_82db_5bb4),
    f64::from_bits(0x3e92_7e51_7fc0_d54b),
    f64::from_bits(0x3e5a_f5ee_dae6_7435),
    f64::from_bits(0x3e21_f143_d060_a28a),
];

const LN2: Ln2Split<f64> = Ln2Split {
    inv_ln2: f64::from_bits(0x3ff7_1547_652b_82fe),
    ln2_hi: f64::from_bits(0x3fe6_2e42_fefa_39ef),
    ln2_lo: f64::from_bits(0x3c7a_bc9e_3b39_803f),
};

const EXPONENT_BIAS: u64 = 0x3ff0_0000_0000_0000;

/// `|x|` at which `expm1` overflows. The underflow side saturates at -1
/// earlier, so one absolute bound covers both.
const OFLOW_BOUND: f64 = f64::from_bits(0x4086_2b7d_369a_5aa9);

/// Below this the result is `x` and the exception-preserving build defers
/// to the scalar routine for the underflow flag.
const TINY_BOUND: f64 = f64::from_bits(0x3cc0_0000_0000_0000); // 0x1p-51

/// `e^x - 1` without the special-case handling.
///
/// `x = i ln2 + f`, `expm1(f) ≈ f + f^2 P(f)` with an 11-term Estrin
/// polynomial and `expm1(x) = (t - 1) + p t` for `t = 2^i`. Only valid while
/// `2^i` is a normal double. Signed zeros pass through.
#[inline(always)]
pub(crate) fn expm1_core<V: SimdF64>(x: V) -> V {
    let (n, f) = reduce_ln2(x, &LN2);
    let i = n.to_int();

    let f2 = f * f;
    let f4 = f2 * f2;
    let f8 = f4 * f4;
    let p = f2.mul_add(estrin(&[f, f2, f4, f8], &POLY), f);

    let t = V::from_bits(i.shl::<52>() + V::Bits::splat(EXPONENT_BIAS));
    let y = p.mul_add(t, t - V::splat(1.0));
    V::select(x.simd_eq(V::splat(0.0)), x, y)
}

/// `e^x - 1` for every lane, accurate near zero.
///
/// Lanes with `|x| >= 710.7`, infinities and NaN are recomputed by
/// `libm::expm1`. Maximum error 1.68 ULP.
#[inline]
pub fn expm1<V: SimdF64>(x: V) -> V {
    let mut special = abs_ge_f64(x, OFLOW_BOUND);
    if WANT_SIMD_EXCEPT {
        special = special | !abs_ge_f64(x, TINY_BOUND);
    }

    let y = expm1_core(mask_special(x, special, 0.0));
    if any(special) {
        return call_f64("expm1", libm::expm1, x, y, special);
    }
    y
}
