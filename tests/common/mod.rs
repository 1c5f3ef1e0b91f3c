//! Helpers shared by the integration tests.
#![allow(dead_code)]

use lanemath::registry::Interval;

/// Weight of one unit in the last place at the magnitude of `want`, with the
/// subnormal spacing as the floor.
pub fn ulp_f64(want: f64) -> f64 {
    let exponent = ((want.abs().to_bits() >> 52) as i32 - 1023).max(-1022) - 52;
    if exponent >= -1022 {
        f64::from_bits(((exponent + 1023) as u64) << 52)
    } else {
        f64::from_bits(1u64 << (exponent + 1074))
    }
}

/// Single-precision ULP at the magnitude of `want`, as a double.
pub fn ulp_f32(want: f64) -> f64 {
    let exponent = ((want.abs().to_bits() >> 52) as i32 - 1023).clamp(-126, 127) - 23;
    f64::from_bits(((exponent + 1023) as u64) << 52)
}

/// Error of `got` against `want` in ULP. Matching NaNs and infinities count
/// as exact; any other non-finite mismatch is infinitely wrong.
pub fn ulp_error_f64(got: f64, want: f64) -> f64 {
    if got.to_bits() == want.to_bits() || (got.is_nan() && want.is_nan()) {
        return 0.0;
    }
    if !got.is_finite() || !want.is_finite() {
        return f64::INFINITY;
    }
    (got - want).abs() / ulp_f64(want)
}

/// Error of a single-precision result against a double-precision reference.
pub fn ulp_error_f32(got: f32, want: f64) -> f64 {
    if got.is_nan() && want.is_nan() {
        return 0.0;
    }
    // A reference beyond the float range rounds to the same infinity.
    if got.is_infinite() && got == want as f32 {
        return 0.0;
    }
    if !got.is_finite() || !want.is_finite() {
        return f64::INFINITY;
    }
    (got as f64 - want).abs() / ulp_f32(want)
}

/// Points spread uniformly over the bit patterns of `[lo, hi]`.
fn spread_u64(lo: u64, hi: u64, count: usize) -> Vec<u64> {
    let span = (hi - lo) as u128;
    (0..count)
        .map(|i| lo + (span * i as u128 / count.max(1) as u128) as u64)
        .collect()
}

/// Samples `interval` in double precision, at most `cap` points per side.
pub fn sample_f64(interval: &Interval, cap: usize) -> Vec<f64> {
    let count = interval.count.min(cap);
    let mut out: Vec<f64> = spread_u64(interval.lo.to_bits(), interval.hi.to_bits(), count)
        .into_iter()
        .map(f64::from_bits)
        .collect();
    if interval.symmetric {
        let negated: Vec<f64> = out.iter().map(|x| -x).collect();
        out.extend(negated);
    }
    out
}

/// Samples `interval` in single precision, at most `cap` points per side.
pub fn sample_f32(interval: &Interval, cap: usize) -> Vec<f32> {
    let count = interval.count.min(cap);
    let lo = (interval.lo as f32).to_bits() as u64;
    let hi = (interval.hi as f32).to_bits() as u64;
    let mut out: Vec<f32> = spread_u64(lo, hi, count)
        .into_iter()
        .map(|bits| f32::from_bits(bits as u32))
        .collect();
    if interval.symmetric {
        let negated: Vec<f32> = out.iter().map(|x| -x).collect();
        out.extend(negated);
    }
    out
}

/// Running maximum of a ULP measurement.
#[derive(Debug, Default)]
pub struct UlpStats {
    pub max: f64,
    pub worst_input: f64,
    pub samples: usize,
}

impl UlpStats {
    pub fn record(&mut self, input: f64, error: f64) {
        self.samples += 1;
        if error > self.max {
            self.max = error;
            self.worst_input = input;
        }
    }

    pub fn report(&self, name: &str) {
        println!(
            "{name}: {} samples, max error {:.3} ULP at {:e}",
            self.samples, self.max, self.worst_input
        );
    }
}
