use lanemath::config::{PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD};
use lanemath::SimdMath;

#[test]
fn test_parallel_small_array_runs_inline() {
    let data = vec![0.0f32, std::f32::consts::PI / 2.0, std::f32::consts::PI];

    let result = data.as_slice().par_cos();
    assert_eq!(result, data.cos());
    assert!((result[0] - 1.0).abs() < 1e-6, "cos(0) should be ~1.0");
    assert!(result[1].abs() < 1e-6, "cos(π/2) should be ~0.0");
    assert!((result[2] + 1.0).abs() < 1e-6, "cos(π) should be ~-1.0");

    let result = data.par_sin();
    assert!(result[0].abs() < 1e-6, "sin(0) should be ~0.0");
    assert!((result[1] - 1.0).abs() < 1e-6, "sin(π/2) should be ~1.0");
}

#[test]
fn test_parallel_large_array_matches_sequential() {
    // Not a multiple of the chunk size or the lane count.
    let len = PARALLEL_SIMD_THRESHOLD + PARALLEL_CHUNK_SIZE / 2 + 3;
    let data: Vec<f64> = (0..len).map(|i| (i % 4096) as f64 * 0.01 - 20.0).collect();

    assert_eq!(data.par_sin(), data.sin());
    assert_eq!(data.par_exp(), data.exp());
    assert_eq!(data.par_expm1(), data.expm1());
    assert_eq!(data.par_tanh(), data.tanh());
}

#[test]
fn test_parallel_exp_and_ln_methods() {
    let len = PARALLEL_SIMD_THRESHOLD * 2 + 1;
    let data: Vec<f32> = (0..len).map(|i| 1.0 + (i % 1000) as f32).collect();

    let ln = data.par_ln();
    assert_eq!(ln, data.ln());
    assert_eq!(ln[0], 0.0);

    let exp2 = data.par_exp2();
    assert_eq!(exp2, data.exp2());
    assert_eq!(exp2[0], 2.0);
}

#[test]
fn test_threshold_selection() {
    for len in [PARALLEL_SIMD_THRESHOLD - 1, PARALLEL_SIMD_THRESHOLD, PARALLEL_SIMD_THRESHOLD + 1] {
        let data: Vec<f64> = (0..len).map(|i| i as f64 * 1e-5).collect();
        let result = data.par_cos();
        assert_eq!(result.len(), len);
        assert_eq!(result[len - 1], data[len - 1..].cos()[0]);
    }
}
