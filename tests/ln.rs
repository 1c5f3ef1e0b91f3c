//! Natural logarithm compared with the standard library.

mod common;

use common::{ulp_error_f32, ulp_error_f64, UlpStats};
use lanemath::{scalar, SimdMath};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_ln_precision_comparison() {
    let test_cases = vec![
        vec![1.0f64, 2.0, std::f64::consts::E, 10.0],
        vec![0.5, 0.1, 1e-10, 1e-300],
        vec![1e10, 1e100, 1e300, f64::MAX],
        // Subnormal inputs
        vec![5e-324, 1e-310, 2.2e-308, 4e-320, 1e-315],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);
        for (&x, &got) in test_case.iter().zip(&test_case.ln()) {
            let want = x.ln();
            let error = ulp_error_f64(got, want);
            println!("  ln({x:e}) = {got:e}, reference {want:e}, {error:.3} ULP");
            assert!(error <= 2.67, "ln({x:e}) off by {error:.3} ULP");
        }
    }
}

#[test]
fn test_ln_precision_random_inputs() {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut stats = UlpStats::default();

    // Exponents drawn uniformly, so every binade gets its share.
    let inputs: Vec<f64> = (0..20_000)
        .map(|_| {
            let mantissa: f64 = rng.random_range(1.0..2.0);
            mantissa * 2f64.powi(rng.random_range(-1022..1023))
        })
        .collect();
    for (&x, &got) in inputs.iter().zip(&inputs.ln()) {
        let error = ulp_error_f64(got, x.ln());
        assert!(error <= 2.67, "ln({x:e}) = {got:e}, {error:.3} ULP");
        stats.record(x, error);
    }
    stats.report("ln");
}

#[test]
fn test_ln_edge_cases() {
    assert_eq!(scalar::log(1.0), 0.0);
    assert_eq!(scalar::log(0.0), f64::NEG_INFINITY);
    assert_eq!(scalar::log(-0.0), f64::NEG_INFINITY);
    assert_eq!(scalar::log(f64::INFINITY), f64::INFINITY);
    assert!(scalar::log(-1.0).is_nan());
    assert!(scalar::log(f64::NEG_INFINITY).is_nan());
    assert!(scalar::log(f64::NAN).is_nan());

    let lanes = [0.0f32, -2.0, 1.0, f32::INFINITY].ln();
    assert_eq!(lanes[0], f32::NEG_INFINITY);
    assert!(lanes[1].is_nan());
    assert_eq!(lanes[2], 0.0);
    assert_eq!(lanes[3], f32::INFINITY);
}

/// Test precision near one, where the result loses leading digits.
#[test]
fn test_ln_precision_near_one() {
    let near_one: Vec<f64> = (1..=200)
        .flat_map(|i| {
            let d = i as f64 * 1e-4;
            [1.0 + d, 1.0 - d]
        })
        .collect();

    for (&x, &got) in near_one.iter().zip(&near_one.ln()) {
        assert!(ulp_error_f64(got, x.ln()) <= 2.67, "ln({x}) = {got:e}");
    }

    let near_one_f32: Vec<f32> = near_one.iter().map(|&x| x as f32).collect();
    for (&x, &got) in near_one_f32.iter().zip(&near_one_f32.ln()) {
        assert!(ulp_error_f32(got, (x as f64).ln()) <= 1.0, "ln({x}) = {got:e}");
    }
}
