//! The exponential family: `exp`, `exp2`, `expm1` and their single-precision
//! forms, compared with the standard library.

mod common;

use common::{ulp_error_f32, ulp_error_f64, UlpStats};
use lanemath::{scalar, SimdMath};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Test precision of exp for values across the finite range.
#[test]
fn test_exp_precision_comparison() {
    let test_cases = vec![
        vec![0.0f64, 1.0, -1.0, 0.5],
        vec![10.0, -10.0, 100.0, -100.0],
        vec![700.0, 709.7, -700.0, -708.0],
        // Subnormal results
        vec![-710.0, -720.0, -740.0, -745.0, -744.4],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);
        let results = test_case.exp();
        for (&x, &got) in test_case.iter().zip(&results) {
            let want = x.exp();
            let error = ulp_error_f64(got, want);
            println!("  exp({x}) = {got:e}, reference {want:e}, {error:.3} ULP");
            assert!(error <= 2.9, "exp({x}) off by {error:.3} ULP");
        }
    }
}

#[test]
fn test_exp_precision_random_inputs() {
    let mut rng = StdRng::seed_from_u64(12345);
    let inputs: Vec<f64> = (0..10_000).map(|_| rng.random_range(-745.0..710.0)).collect();

    let mut exp_stats = UlpStats::default();
    let mut expm1_stats = UlpStats::default();
    for ((&x, &e), &m) in inputs.iter().zip(&inputs.exp()).zip(&inputs.expm1()) {
        let error = ulp_error_f64(e, x.exp());
        assert!(error <= 2.9, "exp({x:e}) = {e:e}");
        exp_stats.record(x, error);

        let error = ulp_error_f64(m, x.exp_m1());
        assert!(error <= 2.68, "expm1({x:e}) = {m:e}");
        expm1_stats.record(x, error);
    }
    exp_stats.report("exp");
    expm1_stats.report("expm1");
}

#[test]
fn test_exp2_integer_and_fractional() {
    let inputs: Vec<f64> = (-1074..1024).map(|i| i as f64).collect();
    for (&x, &got) in inputs.iter().zip(&inputs.exp2()) {
        assert_eq!(got, x.exp2(), "exp2({x})");
    }

    let mut rng = StdRng::seed_from_u64(99);
    let inputs: Vec<f64> = (0..5_000).map(|_| rng.random_range(-1075.0..1024.0)).collect();
    for (&x, &got) in inputs.iter().zip(&inputs.exp2()) {
        assert!(ulp_error_f64(got, x.exp2()) <= 2.15, "exp2({x}) = {got:e}");
    }
}

#[test]
fn test_exp_edge_cases() {
    assert_eq!(scalar::exp(f64::INFINITY), f64::INFINITY);
    assert_eq!(scalar::exp(f64::NEG_INFINITY), 0.0);
    assert!(scalar::exp(f64::NAN).is_nan());
    assert_eq!(scalar::exp(710.0), f64::INFINITY);
    assert_eq!(scalar::exp(-746.0), 0.0);

    assert_eq!(scalar::exp2(1024.0), f64::INFINITY);
    assert_eq!(scalar::exp2(-1080.0), 0.0);

    assert_eq!(scalar::expm1(f64::NEG_INFINITY), -1.0);
    assert_eq!(scalar::expm1(-800.0), -1.0);
    assert_eq!(scalar::expm1(-0.0).to_bits(), (-0.0f64).to_bits());
    assert_eq!(scalar::expm1(710.0), f64::INFINITY);

    assert_eq!(scalar::expf(f32::INFINITY), f32::INFINITY);
    assert_eq!(scalar::expf(f32::NEG_INFINITY), 0.0);
    assert_eq!(scalar::expf(89.0), f32::INFINITY);
    assert!(scalar::expm1f(f32::NAN).is_nan());
    assert_eq!(scalar::expm1f(-100.0), -1.0);
}

/// Test precision with very small values near zero, where expm1 keeps
/// digits that exp loses.
#[test]
fn test_exp_precision_near_zero() {
    let small_values: Vec<f64> = vec![1e-300, 1e-16, 1e-8, 1e-4, -1e-4, -1e-8, -1e-16, -1e-300];
    let exp = small_values.exp();
    let expm1 = small_values.expm1();

    for (i, &x) in small_values.iter().enumerate() {
        println!("Small value: exp({x:e}) = {}, expm1 = {:e}", exp[i], expm1[i]);
        assert!(ulp_error_f64(exp[i], x.exp()) <= 2.9);
        assert!(ulp_error_f64(expm1[i], x.exp_m1()) <= 2.68);
    }
}

#[test]
fn test_single_precision_exponentials() {
    let mut rng = StdRng::seed_from_u64(2024);
    let inputs: Vec<f32> = (0..10_000).map(|_| rng.random_range(-103.0..88.5)).collect();

    let mut expf_stats = UlpStats::default();
    for (&x, &got) in inputs.iter().zip(&inputs.exp()) {
        let error = ulp_error_f32(got, (x as f64).exp());
        assert!(error <= 2.49, "expf({x}) = {got:e}, {error:.3} ULP");
        expf_stats.record(x as f64, error);
    }
    expf_stats.report("expf");

    let inputs: Vec<f32> = (0..10_000).map(|_| rng.random_range(-20.0..88.0)).collect();
    let mut expm1f_stats = UlpStats::default();
    for (&x, &got) in inputs.iter().zip(&inputs.expm1()) {
        let error = ulp_error_f32(got, (x as f64).exp_m1());
        assert!(error <= 2.13, "expm1f({x}) = {got:e}, {error:.3} ULP");
        expm1f_stats.record(x as f64, error);
    }
    expm1f_stats.report("expm1f");

    let inputs: Vec<f32> = (0..2_000).map(|_| rng.random_range(-140.0..127.0)).collect();
    for (&x, &got) in inputs.iter().zip(&inputs.exp2()) {
        let error = ulp_error_f32(got, (x as f64).exp2());
        assert!(error <= 1.0, "exp2 f32 ({x}) = {got:e}, {error:.3} ULP");
    }
}
