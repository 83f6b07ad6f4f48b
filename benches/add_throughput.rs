//! Benchmarks comparing GPU-offloaded addition against the sequential
//! host loop it replaces.
//!
//! Run with: `cargo bench --features opencl`. Skips silently when no GPU
//! device is visible.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cladd::session::gpu_device_count;
use cladd::VectorAdder;

fn sequential_add(left: &[f32], right: &[f32]) -> Vec<f32> {
    left.iter().zip(right).map(|(a, b)| a + b).collect()
}

fn operands(len: usize) -> (Vec<f32>, Vec<f32>) {
    let left = (0..len).map(|i| i as f32 * 0.5).collect();
    let right = (0..len).map(|i| (len - i) as f32 * 0.25).collect();
    (left, right)
}

fn bench_add(c: &mut Criterion) {
    if gpu_device_count() == 0 {
        eprintln!("no GPU device visible, skipping add benchmarks");
        return;
    }
    let kernel = concat!(env!("CARGO_MANIFEST_DIR"), "/kernels/add_kernel.cl");
    let mut adder = VectorAdder::new(kernel).expect("bootstrap failed");

    let mut group = c.benchmark_group("add");

    for size in [1_024usize, 16_384, 262_144, 1_048_576].iter() {
        let (left, right) = operands(*size);

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| sequential_add(black_box(&left), black_box(&right)))
        });

        group.bench_with_input(BenchmarkId::new("gpu", size), size, |b, _| {
            b.iter(|| adder.add(black_box(&left), black_box(&right)).unwrap())
        });
    }

    group.finish();
}

fn bench_refresh(c: &mut Criterion) {
    if gpu_device_count() == 0 {
        eprintln!("no GPU device visible, skipping refresh benchmark");
        return;
    }
    let kernel = concat!(env!("CARGO_MANIFEST_DIR"), "/kernels/add_kernel.cl");
    let mut adder = VectorAdder::new(kernel).expect("bootstrap failed");

    c.bench_function("refresh", |b| b.iter(|| adder.refresh().unwrap()));
}

criterion_group!(benches, bench_add, bench_refresh);
criterion_main!(benches);
