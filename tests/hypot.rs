//! Hypotenuse compared with the standard library.

mod common;

use common::{ulp_error_f32, ulp_error_f64, UlpStats};
use lanemath::{scalar, SimdMath};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_hypot_precision_comparison() {
    let test_cases = vec![
        // Pythagorean triples
        (vec![3.0f64, 5.0, 8.0, 7.0], vec![4.0f64, 12.0, 15.0, 24.0]),
        // Negative operands
        (vec![-3.0, 5.0, -8.0, -7.0], vec![4.0, -12.0, -15.0, 24.0]),
        // One zero operand
        (vec![0.0, 2.5, 0.0, -1e100], vec![1.0, 0.0, 0.0, 0.0]),
        // Extreme magnitudes, odd length
        (vec![1e300, 1e-300, 3e-310, 1e200, 1e-200], vec![1e300, 1e-300, 4e-310, 1e-200, 1e200]),
    ];

    for (i, (x_case, y_case)) in test_cases.iter().enumerate() {
        println!("Testing case {}: x={x_case:?}, y={y_case:?}", i + 1);
        for ((&x, &y), &got) in x_case.iter().zip(y_case).zip(&x_case.hypot(y_case)) {
            let want = x.hypot(y);
            let error = ulp_error_f64(got, want);
            println!("  hypot({x:e}, {y:e}) = {got:e}, reference {want:e}, {error:.3} ULP");
            assert!(error <= 1.71, "hypot({x:e}, {y:e}) off by {error:.3} ULP");
        }
    }
}

#[test]
fn test_hypot_precision_random_inputs() {
    let mut rng = StdRng::seed_from_u64(12345);
    let xs: Vec<f64> = (0..10_000).map(|_| rng.random_range(-1e6..1e6)).collect();
    let ys: Vec<f64> = (0..10_000).map(|_| rng.random_range(-1e6..1e6)).collect();

    let mut stats = UlpStats::default();
    for ((&x, &y), &got) in xs.iter().zip(&ys).zip(&xs.hypot(&ys)) {
        let error = ulp_error_f64(got, x.hypot(y));
        assert!(error <= 1.71, "hypot({x}, {y}) = {got}, {error:.3} ULP");
        stats.record(x, error);
    }
    stats.report("hypot");

    let xs: Vec<f32> = xs.iter().map(|&x| x as f32).collect();
    let ys: Vec<f32> = ys.iter().map(|&y| y as f32).collect();
    let mut stats = UlpStats::default();
    for ((&x, &y), &got) in xs.iter().zip(&ys).zip(&xs.hypot(&ys)) {
        let error = ulp_error_f32(got, (x as f64).hypot(y as f64));
        assert!(error <= 2.21, "hypotf({x}, {y}) = {got}, {error:.3} ULP");
        stats.record(x as f64, error);
    }
    stats.report("hypotf");
}

#[test]
fn test_hypot_edge_cases() {
    assert_eq!(scalar::hypot(f64::INFINITY, f64::NAN), f64::INFINITY);
    assert_eq!(scalar::hypot(f64::NAN, f64::NEG_INFINITY), f64::INFINITY);
    assert!(scalar::hypot(f64::NAN, 1.0).is_nan());
    assert_eq!(scalar::hypot(f64::MAX, f64::MAX), f64::INFINITY);
    assert_eq!(scalar::hypot(0.0, -0.0), 0.0);

    assert_eq!(scalar::hypotf(f32::NEG_INFINITY, f32::NAN), f32::INFINITY);
    let big = 1e30f32;
    let want = (big as f64).hypot(big as f64);
    assert!(ulp_error_f32(scalar::hypotf(big, big), want) <= 1.0);
    assert_eq!(scalar::hypotf(f32::MAX, 1.0), f32::MAX);
}

#[test]
fn test_hypot_sign_symmetry() {
    let mut rng = StdRng::seed_from_u64(5);
    let xs: Vec<f64> = (0..1_000).map(|_| rng.random_range(-1e3..1e3)).collect();
    let ys: Vec<f64> = (0..1_000).map(|_| rng.random_range(-1e3..1e3)).collect();
    let negated: Vec<f64> = xs.iter().map(|x| -x).collect();
    assert_eq!(xs.hypot(&ys), negated.hypot(&ys));
}
