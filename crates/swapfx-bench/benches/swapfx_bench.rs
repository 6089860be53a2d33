//! Benchmarks for swapfx operations.
//!
//! Run with: `cargo bench -p swapfx-bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use swapfx_bench::{ellipse_mask, gradient_batch};
use swapfx_math::{interp_slice, unique};
use swapfx_ops::{HistMatchConfig, HistogramMatcher};

/// Benchmark distinct-value histogram construction.
fn bench_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique");

    for size in [1_000, 10_000, 100_000].iter() {
        let values: Vec<f32> = (0..*size).map(|i| ((i * 7919) % 4096) as f32 / 4096.0).collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, v| {
            b.iter(|| unique(black_box(v)))
        });
    }

    group.finish();
}

/// Benchmark table interpolation.
fn bench_interp(c: &mut Criterion) {
    let mut group = c.benchmark_group("interp");

    let xp: Vec<f64> = (1..=4096).map(|i| i as f64 / 4096.0).collect();
    let fp: Vec<f32> = (0..4096).map(|i| (i as f32 / 4096.0).powf(2.2)).collect();
    let xs: Vec<f64> = (0..10_000).map(|i| i as f64 / 10_000.0).collect();

    group.throughput(Throughput::Elements(xs.len() as u64));
    group.bench_function("interp_4096", |b| {
        b.iter(|| interp_slice(black_box(&xs), &xp, &fp))
    });

    group.finish();
}

/// Benchmark full batch matching at typical face crop sizes.
fn bench_hist_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("hist_match");
    group.sample_size(20);

    let config = HistMatchConfig::default();
    for size in [64, 128, 256].iter() {
        let original = gradient_batch(8, *size, 3, 0.1);
        let swapped = gradient_batch(8, *size, 3, 0.4);
        let mask = ellipse_mask(8, *size);

        group.throughput(Throughput::Elements((8 * size * size) as u64));

        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            let m = HistogramMatcher::new(config);
            b.iter(|| m.process(black_box(&original), &swapped, &mask))
        });

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            let m = HistogramMatcher::new(config).sequential();
            b.iter(|| m.process(black_box(&original), &swapped, &mask))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_unique, bench_interp, bench_hist_match);
criterion_main!(benches);
