//! Error bounds over the registered sampling intervals.
//!
//! Every kernel in the registry is sampled over its intervals and compared
//! with `std`. Single-precision kernels are measured against the double
//! result, which is close to exact at float precision. Double-precision
//! kernels are measured against the platform `libm`, which is itself off by
//! up to a few tenths of an ULP (two for `tanh`), so the bound gets a margin.

mod common;

use common::{sample_f32, sample_f64, ulp_error_f32, ulp_error_f64, UlpStats};
use lanemath::registry::{self, FunctionInfo, Precision};
use lanemath::scalar;

const CAP: usize = 4_000;

fn eval_f64(name: &str, x: f64, y: f64) -> (f64, f64) {
    match name {
        "sin" => (scalar::sin(x), x.sin()),
        "cos" => (scalar::cos(x), x.cos()),
        "sincos" => (scalar::sincos(x).1, x.cos()),
        "exp" => (scalar::exp(x), x.exp()),
        "exp2" => (scalar::exp2(x), x.exp2()),
        "expm1" => (scalar::expm1(x), x.exp_m1()),
        "log" => (scalar::log(x), x.ln()),
        "tanh" => (scalar::tanh(x), x.tanh()),
        "hypot" => (scalar::hypot(x, y), x.hypot(y)),
        "pow" => (scalar::pow(x, y), x.powf(y)),
        other => panic!("no double-precision reference for {other}"),
    }
}

fn eval_f32(name: &str, x: f32, y: f32) -> (f32, f64) {
    let (xd, yd) = (x as f64, y as f64);
    match name {
        "sinf" => (scalar::sinf(x), xd.sin()),
        "cosf" => (scalar::cosf(x), xd.cos()),
        "expf" => (scalar::expf(x), xd.exp()),
        "expm1f" => (scalar::expm1f(x), xd.exp_m1()),
        "tanhf" => (scalar::tanhf(x), xd.tanh()),
        "hypotf" => (scalar::hypotf(x, y), xd.hypot(yd)),
        "powf" => (scalar::powf(x, y), xd.powf(yd)),
        other => panic!("no single-precision reference for {other}"),
    }
}

fn reference_margin(name: &str) -> f64 {
    match name {
        "tanh" => 2.0,
        _ => 1.0,
    }
}

/// Second operand for binary functions: the same samples, visited in a
/// scrambled order.
fn partner<T: Copy>(samples: &[T], i: usize) -> T {
    samples[(i * 7919 + 17) % samples.len()]
}

fn check_f64(info: &FunctionInfo) {
    let bound = info.max_ulp + reference_margin(info.name);
    let mut stats = UlpStats::default();

    for interval in info.intervals {
        let samples = sample_f64(interval, CAP);
        for (i, &x) in samples.iter().enumerate() {
            let y = partner(&samples, i);
            if !x.is_finite() || (info.arity == 2 && !y.is_finite()) {
                continue;
            }
            let (got, want) = eval_f64(info.name, x, y);
            let error = ulp_error_f64(got, want);
            assert!(
                error <= bound,
                "{}({x:e}, {y:e}) = {got:e}, expected {want:e} ({error:.3} ULP > {bound})",
                info.name
            );
            stats.record(x, error);
        }
    }
    stats.report(info.name);
}

fn check_f32(info: &FunctionInfo) {
    let bound = info.max_ulp + 1.0;
    let mut stats = UlpStats::default();

    for interval in info.intervals {
        let samples = sample_f32(interval, CAP);
        for (i, &x) in samples.iter().enumerate() {
            let y = partner(&samples, i);
            if !x.is_finite() || (info.arity == 2 && !y.is_finite()) {
                continue;
            }
            let (got, want) = eval_f32(info.name, x, y);
            let error = ulp_error_f32(got, want);
            assert!(
                error <= bound,
                "{}({x:e}, {y:e}) = {got:e}, expected {want:e} ({error:.3} ULP > {bound})",
                info.name
            );
            stats.record(x as f64, error);
        }
    }
    stats.report(info.name);
}

#[test]
fn test_registered_bounds_hold() {
    for info in registry::all() {
        match info.precision {
            Precision::F64 => check_f64(info),
            Precision::F32 => check_f32(info),
        }
    }
}

#[test]
fn test_sincos_sine_half() {
    let info = registry::lookup("sincos").unwrap();
    let bound = info.max_ulp + 1.0;
    for interval in info.intervals {
        for x in sample_f64(interval, CAP) {
            if !x.is_finite() {
                continue;
            }
            let (s, _) = scalar::sincos(x);
            let error = ulp_error_f64(s, x.sin());
            assert!(error <= bound, "sincos({x:e}).0 off by {error:.3} ULP");
        }
    }
}
