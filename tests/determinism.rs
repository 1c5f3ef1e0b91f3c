//! Results depend only on the input bits: repeated calls agree, and a lane
//! gives the same answer whatever its neighbours hold.

use lanemath::abi::{vpowq_f64, vsincosq_f64, vsinq_f64};
use lanemath::simd::{F64x2, SimdF64};
use lanemath::{scalar, SimdMath};

fn bits64(v: &[f64]) -> Vec<u64> {
    v.iter().map(|x| x.to_bits()).collect()
}

fn bits32(v: &[f32]) -> Vec<u32> {
    v.iter().map(|x| x.to_bits()).collect()
}

fn inputs_f64() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        0.5,
        -3.75,
        1e-310,
        -4.9e-324,
        f64::MIN_POSITIVE,
        1e22,
        1e300,
        -1e300,
        f64::MAX,
        f64::MIN,
        709.9,
        -745.5,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
        f64::from_bits(0x7ff8_0000_dead_beef),
        f64::from_bits(0xfff4_0000_0000_0001),
    ]
}

fn inputs_f32() -> Vec<f32> {
    vec![
        0.0,
        -0.0,
        0.5,
        -3.75,
        1e-40,
        -1.4e-45,
        f32::MIN_POSITIVE,
        1e10,
        3.0e38,
        f32::MAX,
        88.9,
        -104.0,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
        f32::from_bits(0x7fc0_beef),
        f32::from_bits(0xffa0_0001),
    ]
}

#[test]
fn test_repeated_calls_agree_f64() {
    let x = inputs_f64();
    let y: Vec<f64> = x.iter().rev().copied().collect();

    let runs: [(&str, fn(&[f64]) -> Vec<f64>); 7] = [
        ("sin", |x| x.sin()),
        ("cos", |x| x.cos()),
        ("exp", |x| x.exp()),
        ("exp2", |x| x.exp2()),
        ("expm1", |x| x.expm1()),
        ("ln", |x| x.ln()),
        ("tanh", |x| x.tanh()),
    ];
    for (name, f) in runs {
        assert_eq!(bits64(&f(&x)), bits64(&f(&x)), "{name}");
    }
    assert_eq!(bits64(&x.pow(&y)), bits64(&x.pow(&y)), "pow");
    assert_eq!(bits64(&x.hypot(&y)), bits64(&x.hypot(&y)), "hypot");

    for &v in &x {
        let (s0, c0) = scalar::sincos(v);
        let (s1, c1) = scalar::sincos(v);
        assert_eq!((s0.to_bits(), c0.to_bits()), (s1.to_bits(), c1.to_bits()), "sincos({v:e})");
    }
}

#[test]
fn test_repeated_calls_agree_f32() {
    let x = inputs_f32();
    let y: Vec<f32> = x.iter().rev().copied().collect();

    let runs: [(&str, fn(&[f32]) -> Vec<f32>); 7] = [
        ("sinf", |x| x.sin()),
        ("cosf", |x| x.cos()),
        ("expf", |x| x.exp()),
        ("exp2f", |x| x.exp2()),
        ("expm1f", |x| x.expm1()),
        ("lnf", |x| x.ln()),
        ("tanhf", |x| x.tanh()),
    ];
    for (name, f) in runs {
        assert_eq!(bits32(&f(&x)), bits32(&f(&x)), "{name}");
    }
    assert_eq!(bits32(&x.pow(&y)), bits32(&x.pow(&y)), "powf");
    assert_eq!(bits32(&x.hypot(&y)), bits32(&x.hypot(&y)), "hypotf");
}

#[test]
fn test_slice_matches_scalar_per_element() {
    let x = inputs_f64();
    let y: Vec<f64> = x.iter().rev().copied().collect();

    let pairs: [(&str, fn(&[f64]) -> Vec<f64>, fn(f64) -> f64); 6] = [
        ("sin", |x| x.sin(), scalar::sin),
        ("cos", |x| x.cos(), scalar::cos),
        ("exp", |x| x.exp(), scalar::exp),
        ("expm1", |x| x.expm1(), scalar::expm1),
        ("ln", |x| x.ln(), scalar::log),
        ("tanh", |x| x.tanh(), scalar::tanh),
    ];
    for (name, f, g) in pairs {
        let want: Vec<f64> = x.iter().map(|&v| g(v)).collect();
        assert_eq!(bits64(&f(&x)), bits64(&want), "{name}");
    }

    let want: Vec<f64> = x.iter().zip(&y).map(|(&a, &b)| scalar::pow(a, b)).collect();
    assert_eq!(bits64(&x.pow(&y)), bits64(&want), "pow");

    let x = inputs_f32();
    let pairs: [(&str, fn(&[f32]) -> Vec<f32>, fn(f32) -> f32); 5] = [
        ("sinf", |x| x.sin(), scalar::sinf),
        ("cosf", |x| x.cos(), scalar::cosf),
        ("expf", |x| x.exp(), scalar::expf),
        ("expm1f", |x| x.expm1(), scalar::expm1f),
        ("tanhf", |x| x.tanh(), scalar::tanhf),
    ];
    for (name, f, g) in pairs {
        let want: Vec<f32> = x.iter().map(|&v| g(v)).collect();
        assert_eq!(bits32(&f(&x)), bits32(&want), "{name}");
    }
}

#[test]
fn test_lane_ignores_neighbour() {
    let neighbours = [0.25, 1e300, f64::MAX, f64::INFINITY, f64::NAN, 1e-310];
    for &v in &inputs_f64() {
        let alone_sin = scalar::sin(v).to_bits();
        let alone_pow = scalar::pow(v, 0.5).to_bits();
        let (alone_s, alone_c) = scalar::sincos(v);
        for &n in &neighbours {
            let x = F64x2::from_fn(|i| [v, n][i]);
            assert_eq!(vsinq_f64(x).extract(0).to_bits(), alone_sin, "sin({v:e}) next to {n:e}");

            let y = F64x2::from_fn(|i| [0.5, n][i]);
            assert_eq!(vpowq_f64(x, y).extract(0).to_bits(), alone_pow, "pow({v:e}) next to {n:e}");

            let (s, c) = vsincosq_f64(x);
            assert_eq!(s.extract(0).to_bits(), alone_s.to_bits(), "sincos({v:e}).0 next to {n:e}");
            assert_eq!(c.extract(0).to_bits(), alone_c.to_bits(), "sincos({v:e}).1 next to {n:e}");
        }
    }
}
