use crate::rescale::{compose, exp_special, table_scale};
use crate::simd::{SimdBits, SimdF64};
use crate::special::{any, blend};

pub(super) const INV_LN2_N: f64 = f64::from_bits(0x4067_1547_652b_82fe); // N/ln2
pub(super) const SHIFT: f64 = f64::from_bits(0x4338_0000_0000_0000); // 0x1.8p52
pub(super) const LN2_HI_N: f64 = f64::from_bits(0x3f76_2e42_fefa_39ef);
pub(super) const LN2_LO_N: f64 = f64::from_bits(0x3c0a_bc9e_3b39_803f);

const C0: f64 = f64::from_bits(0x3fdf_ffff_ffff_fd43);
const C1: f64 = f64::from_bits(0x3fc5_5555_c75a_dbb2);
const C2: f64 = f64::from_bits(0x3fa5_5555_da64_6206);

/// `|x|` above which the table scale leaves the normal range, ln(2^1022).
pub(super) const SPECIAL_BOUND: f64 = f64::from_bits(0x4086_232b_dd76_683c);

/// `|n|` above which the result saturates even with a split scale.
pub(super) const SCALE_BOUND: f64 = 163_840.0; // 1280 * N

/// `e^x` for every lane.
///
/// # Algorithm Overview
/// 1. `n = round(x N / ln2)` through the shift trick, so the low bits of
///    `x N / ln2 + 0x1.8p52` already hold `n` as an integer.
/// 2. `r = x - n ln2 / N` with a two-part `ln2 / N`, `|r| <= ln2 / 256`.
/// 3. `e^r - 1 ≈ r + r^2 (C0 + C1 r + C2 r^2)`.
/// 4. `2^(n/N)` from the 128-entry table with `n / N` added into the
///    exponent field.
///
/// Lanes with `|x| > 708.4` split the scale in two so overflow and
/// underflow land on the IEEE result.
///
/// # Special Values
/// | Input | Output |
/// |-------|--------|
/// | 0 | 1 |
/// | +∞ | +∞ |
/// | -∞ | +0 |
/// | NaN | NaN |
///
/// Maximum error 1.9 ULP.
#[inline]
pub fn exp<V: SimdF64>(x: V) -> V {
    let z = x.mul_add(V::splat(INV_LN2_N), V::splat(SHIFT));
    let u = z.to_bits();
    let n = z - V::splat(SHIFT);

    let r = n.nmul_add(V::splat(LN2_HI_N), x);
    let r = n.nmul_add(V::splat(LN2_LO_N), r);

    let r2 = r * r;
    let poly = r.mul_add(V::splat(C1), V::splat(C0));
    let poly = r2.mul_add(V::splat(C2), poly);
    let poly = poly.mul_add(r2, r);

    let scale: V = table_scale(u, u.shl::<45>());

    let cmp = x.abs().simd_gt(V::splat(SPECIAL_BOUND));
    let y = compose(poly, scale);
    if any(cmp) {
        return blend(cmp, exp_special(poly, n, scale, V::splat(SCALE_BOUND)), y);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{F64x2, F64x4};

    #[test]
    fn test_exp_special_values() {
        let x = F64x4::from_fn(|i| [0.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN][i]);
        let y = exp(x);
        assert_eq!(y.extract(0), 1.0);
        assert_eq!(y.extract(1), f64::INFINITY);
        assert_eq!(y.extract(2), 0.0);
        assert!(y.extract(3).is_nan());
    }

    #[test]
    fn test_exp_overflow_and_subnormal() {
        let y = exp(F64x2::from_fn(|i| [710.0, -740.0][i]));
        assert_eq!(y.extract(0), f64::INFINITY);
        let want = (-740.0f64).exp();
        assert!(want.is_subnormal());
        assert!((y.extract(1) - want).abs() <= f64::from_bits(1));
    }

    #[test]
    fn test_exp_moderate() {
        let y = exp(F64x2::from_fn(|i| [1.0, -3.5][i]));
        assert!((y.extract(0) - std::f64::consts::E).abs() < 1e-15);
        assert!((y.extract(1) - (-3.5f64).exp()).abs() < 1e-17);
    }
}
