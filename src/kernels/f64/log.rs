use crate::fallback::call_f64;
use crate::simd::{SimdBits, SimdF64};
use crate::special::{any, outside_range};
use crate::tables::log::{LOG_INVC, LOG_LOGC, LOG_OFF, LOG_TABLE_LEN};

const A0: f64 = f64::from_bits(0xbfdf_ffff_ffff_fff7);
const A1: f64 = f64::from_bits(0x3fd5_5555_5551_70d4);
const A2: f64 = f64::from_bits(0xbfd0_0000_0039_9c27);
const A3: f64 = f64::from_bits(0x3fc9_99b2_e90e_94ca);
const A4: f64 = f64::from_bits(0xbfc5_54e5_50bd_501e);

const LN2: f64 = f64::from_bits(0x3fe6_2e42_fefa_39ef);

/// Smallest normal and `+inf`; lanes outside `[MIN_NORM, INF)` are special.
const MIN_NORM: u64 = 0x0010_0000_0000_0000;
const INF: u64 = 0x7ff0_0000_0000_0000;

/// Natural logarithm of every lane.
///
/// # Algorithm Overview
/// 1. `x = 2^k z` with `z` in `[OFF, 2 OFF)`, split by integer arithmetic
///    on the bit pattern.
/// 2. The top mantissa bits of `z` pick a subinterval with centre `c`, and
///    `r = z / c - 1` is formed exactly with one fma against `1/c`.
/// 3. `log(x) = k ln2 + log(c) + log1p(r)` with a degree-6 polynomial for
///    `log1p(r)`.
///
/// Zero, subnormal, negative, infinite and NaN lanes are recomputed by
/// `libm::log`. Maximum error 1.67 ULP.
#[inline]
pub fn log<V: SimdF64>(x: V) -> V {
    let ix = x.to_bits();
    let special = outside_range(ix, MIN_NORM, INF);

    let tmp = ix - V::Bits::splat(LOG_OFF);
    let k = tmp.asr::<52>();
    let iz = ix - (tmp & V::Bits::splat(0xfff0_0000_0000_0000));
    let z = V::from_bits(iz);
    let i = tmp.shr::<45>() & V::Bits::splat(LOG_TABLE_LEN as u64 - 1);
    let invc = V::gather(&LOG_INVC, i);
    let logc = V::gather(&LOG_LOGC, i);

    let r = z.mul_add(invc, V::splat(-1.0));
    let kd = V::from_int(k);
    let hi = kd.mul_add(V::splat(LN2), logc + r);

    let r2 = r * r;
    let y = r.mul_add(V::splat(A3), V::splat(A2));
    let y = r2.mul_add(V::splat(A4), y);
    let p = r.mul_add(V::splat(A1), V::splat(A0));
    let y = r2.mul_add(y, p);
    let out = r2.mul_add(y, hi);

    if any(special) {
        return call_f64("log", libm::log, x, out, special);
    }
    out
}
