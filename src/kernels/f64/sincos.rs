use log::trace;

use crate::reduction::large::sincos_fallback;
use crate::simd::{SimdBits, SimdF64};
use crate::special::{abs_ge_f64, any};
use crate::tables::trig::LARGE_BOUND;

use super::cos::cos_fast;
use super::sin::sin_fast;

/// `(sin(x), cos(x))` for every lane.
///
/// Large lanes are reduced once and both results come out of the same
/// reduction, with the quadrant deciding which polynomial feeds which output.
/// Maximum error 2.78 ULP.
#[inline]
pub fn sincos<V: SimdF64>(x: V) -> (V, V) {
    let cmp = abs_ge_f64(x, LARGE_BOUND);
    let mut s = sin_fast(x);
    let mut c = cos_fast(x);
    if any(cmp) {
        trace!("sincos: large-argument reduction on flagged lanes");
        for lane in (0..V::LANES).filter(|&i| cmp.extract(i) != 0) {
            let (ls, lc) = sincos_fallback(x.extract(lane));
            s = s.replace(lane, ls);
            c = c.replace(lane, lc);
        }
    }
    (s, c)
}
