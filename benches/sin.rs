//! Sine benchmarks: scalar `std` against the lane kernels.
//!
//! Each group runs one vector size through three implementations:
//!
//! - **scalar**: `f32::sin` element by element (baseline)
//! - **simd**: the sequential slice driver
//! - **parallel SIMD**: the rayon-backed slice driver
//!
//! Sizes run from L1-resident up to main-memory-bound inputs.

use std::hint::black_box;
use std::time::Instant;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lanemath::SimdMath;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Element counts per group. f32 = 4 bytes, so 1M elements = 4 MiB.
const VECTOR_SIZES: &[usize] = &[
    1_024,     // 4 KiB - L1 cache
    16_384,    // 64 KiB - L1→L2 transition
    262_144,   // 1 MiB - L2 cache, parallel threshold
    1_048_576, // 4 MiB - L3 cache
    8_388_608, // 32 MiB - main memory
];

/// Reproducible inputs in [0, 2π).
fn generate_test_data<T: From<f32>>(len: usize) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| T::from(rng.random_range(0.0f32..std::f32::consts::TAU)))
        .collect()
}

fn scalar_sin_f32(input: &[f32]) -> Vec<f32> {
    input.iter().map(|x| x.sin()).collect()
}

fn scalar_sin_f64(input: &[f64]) -> Vec<f64> {
    input.iter().map(|x| x.sin()).collect()
}

fn benchmark_sin_implementations(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Sine_f32_{}", format_size(size, 4)));
        group.throughput(Throughput::Bytes((size * std::mem::size_of::<f32>()) as u64));

        let input_vec: Vec<f32> = generate_test_data(size);
        let input_slice = input_vec.as_slice();

        group.bench_with_input(BenchmarkId::new("scalar", size), input_slice, |b, input| {
            b.iter(|| black_box(scalar_sin_f32(black_box(input))))
        });
        group.bench_with_input(BenchmarkId::new("simd", size), input_slice, |b, input| {
            b.iter(|| black_box(black_box(input).sin()))
        });
        group.bench_with_input(
            BenchmarkId::new("parallel SIMD", size),
            input_slice,
            |b, input| b.iter(|| black_box(black_box(input).par_sin())),
        );
        group.finish();
    }

    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Sine_f64_{}", format_size(size, 8)));
        group.throughput(Throughput::Bytes((size * std::mem::size_of::<f64>()) as u64));

        let input_vec: Vec<f64> = generate_test_data(size);
        let input_slice = input_vec.as_slice();

        group.bench_with_input(BenchmarkId::new("scalar", size), input_slice, |b, input| {
            b.iter(|| black_box(scalar_sin_f64(black_box(input))))
        });
        group.bench_with_input(BenchmarkId::new("simd", size), input_slice, |b, input| {
            b.iter(|| black_box(black_box(input).sin()))
        });
        group.bench_with_input(
            BenchmarkId::new("parallel SIMD", size),
            input_slice,
            |b, input| b.iter(|| black_box(black_box(input).par_sin())),
        );
        group.finish();
    }
}

/// Formats a vector size as a human-readable byte count.
fn format_size(elements: usize, elem_bytes: usize) -> String {
    let bytes = elements * elem_bytes;
    if bytes >= 1_048_576 {
        format!("{:.1}_MiB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1}_KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes}_B")
    }
}

fn all_benchmarks(c: &mut Criterion) {
    println!("Starting Sine benchmarks over {} vector sizes", VECTOR_SIZES.len());
    let start_time = Instant::now();

    benchmark_sin_implementations(c);

    println!(
        "Benchmark suite completed in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
