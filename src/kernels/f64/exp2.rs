use crate::poly::pairwise_horner;
use crate::rescale::{compose, exp_special, table_scale};
use crate::simd::{SimdBits, SimdF64};
use crate::special::{any, blend};

const SHIFT: f64 = f64::from_bits(0x42c8_0000_0000_0000); // 0x1.8p52 / N

const POLY: [f64; 4] = [
    f64::from_bits(0x3fe6_2e42_fefa_3686),
    f64::from_bits(0x3fce_bfbd_ff82_c241),
    f64::from_bits(0x3fac_6b09_b16d_e99a),
    f64::from_bits(0x3f83_b2ab_f557_1ad8),
];

/// `|x|` above which the table scale leaves the normal range.
const SPECIAL_BOUND: f64 = f64::from_bits(0x408f_f000_0000_0000); // 0x1.ffp+9

/// `|n|` above which the result saturates, in octaves.
const SCALE_BOUND: f64 = 1280.0;

/// `2^x` for every lane.
///
/// `x` is rounded to a multiple of `1/N` by adding `0x1.8p52 / N`, which
/// leaves `round(x N)` in the low mantissa bits. `2^r - 1` for the remainder
/// is a degree-4 polynomial. Maximum error 1.15 ULP.
#[inline]
pub fn exp2<V: SimdF64>(x: V) -> V {
    let cmp = x.abs().simd_gt(V::splat(SPECIAL_BOUND));

    let z = x + V::splat(SHIFT);
    let u = z.to_bits();
    let n = z - V::splat(SHIFT);
    let r = x - n;

    let scale: V = table_scale(u, u.shl::<45>());

    let r2 = r * r;
    let poly = r * pairwise_horner(r, r2, &POLY);

    let y = compose(poly, scale);
    if any(cmp) {
        return blend(cmp, exp_special(poly, n, scale, V::splat(SCALE_BOUND)), y);
    }
    y
}
