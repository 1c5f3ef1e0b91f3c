use crate::fallback::call2_f32;
use crate::simd::SimdF32;
use crate::special::{any, outside_range};

const TINY_BOUND: u32 = 0x0c80_0000; // 0x1p-102
const INF: u32 = 0x7f80_0000;

/// Single-precision `sqrt(x^2 + y^2)` for every pair of lanes.
///
/// Sums of squares outside `[2^-102, inf)` are recomputed by
/// `libm::hypotf`. Maximum error 1.21 ULP.
#[inline]
pub fn hypotf<V: SimdF32>(x: V, y: V) -> V {
    let sqsum = y.mul_add(y, x * x);
    let special = outside_range(sqsum.to_bits(), TINY_BOUND, INF);
    let out = sqsum.sqrt();
    if any(special) {
        return call2_f32("hypotf", libm::hypotf, x, y, out, special);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::F32x4;

    #[test]
    fn test_hypotf_pythagorean() {
        let x = F32x4::from_fn(|i| [3.0, -5.0, 8.0, 20.0][i]);
        let y = F32x4::from_fn(|i| [4.0, 12.0, -15.0, 21.0][i]);
        assert_eq!(hypotf(x, y).to_vec(), vec![5.0, 13.0, 17.0, 29.0]);
    }

    #[test]
    fn test_hypotf_extremes() {
        let x = F32x4::from_fn(|i| [3e30, 3e-30, 0.0, f32::NEG_INFINITY][i]);
        let y = F32x4::from_fn(|i| [4e30, 4e-30, 0.0, f32::NAN][i]);
        let h = hypotf(x, y);
        assert_eq!(h.extract(0), libm::hypotf(3e30, 4e30));
        assert_eq!(h.extract(1), libm::hypotf(3e-30, 4e-30));
        assert_eq!(h.extract(2), 0.0);
        assert_eq!(h.extract(3), f32::INFINITY);
    }
}
