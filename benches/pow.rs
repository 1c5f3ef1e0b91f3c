//! Power benchmarks: scalar `std` against the lane kernels.
//!
//! Both operand vectors are generated once per size. The scalar baseline
//! zips them through `Float::powf`; the SIMD rows go through the slice driver.

use std::hint::black_box;
use std::time::Instant;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lanemath::SimdMath;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VECTOR_SIZES: &[usize] = &[
    1_024,     // 4 KiB - L1 cache
    16_384,    // 64 KiB - L1→L2 transition
    262_144,   // 1 MiB - L2 cache
    1_048_576, // 4 MiB - L3 cache
];

/// Reproducible operand pairs: bases in [0.1, 10), exponents in [-8, 8).
fn generate_test_data<T: From<f32>>(len: usize) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(42);
    let x = (0..len).map(|_| T::from(rng.random_range(0.1f32..10.0))).collect();
    let y = (0..len).map(|_| T::from(rng.random_range(-8.0f32..8.0))).collect();
    (x, y)
}

fn scalar_pow<T: num::Float>(x: &[T], y: &[T]) -> Vec<T> {
    x.iter().zip(y).map(|(a, b)| a.powf(*b)).collect()
}

fn bench_precision<T>(c: &mut Criterion, label: &str)
where
    T: num::Float + From<f32>,
    [T]: SimdMath<Output = Vec<T>>,
{
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Pow_{label}_{size}"));
        group.throughput(Throughput::Bytes((2 * size * std::mem::size_of::<T>()) as u64));

        let (x, y) = generate_test_data::<T>(size);

        group.bench_function(BenchmarkId::new("scalar", size), |b| {
            b.iter(|| black_box(scalar_pow(black_box(&x), black_box(&y))))
        });
        group.bench_function(BenchmarkId::new("simd", size), |b| {
            b.iter(|| black_box(black_box(x.as_slice()).pow(black_box(y.as_slice()))))
        });
        group.finish();
    }
}

fn all_benchmarks(c: &mut Criterion) {
    println!("Starting Power benchmarks over {} vector sizes", VECTOR_SIZES.len());
    let start_time = Instant::now();

    bench_precision::<f32>(c, "f32");
    bench_precision::<f64>(c, "f64");

    println!(
        "Benchmark suite completed in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
