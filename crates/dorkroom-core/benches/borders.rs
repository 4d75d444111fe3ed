//! Benchmarks for dorkroom-core border operations
//!
//! Run with: cargo bench -p dorkroom-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dorkroom_core::border::{
    calculate_optimal_min_border, compute_print_size, resolve_easel_slot, EaselCache,
};

/// Benchmark the print size solver
fn bench_print_size(c: &mut Criterion) {
    c.bench_function("compute_print_size", |b| {
        b.iter(|| {
            compute_print_size(
                black_box(8.0),
                black_box(10.0),
                black_box(3.0),
                black_box(2.0),
                black_box(0.5),
            )
        });
    });
}

/// Benchmark easel resolution with a cold cache versus a warm one
fn bench_easel_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_resolution");

    group.bench_function("cold_cache", |b| {
        b.iter(|| {
            let mut cache = EaselCache::new();
            resolve_easel_slot(&mut cache, black_box(7.0), black_box(9.0), black_box(false))
        });
    });

    group.bench_function("warm_cache", |b| {
        let mut cache = EaselCache::new();
        resolve_easel_slot(&mut cache, 7.0, 9.0, false);
        b.iter(|| resolve_easel_slot(&mut cache, black_box(7.0), black_box(9.0), black_box(false)));
    });

    group.finish();
}

/// Benchmark the minimum border snap search
fn bench_optimizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_border_optimizer");

    for start in [0.4, 0.55, 0.8] {
        group.bench_function(format!("start_{}", start), |b| {
            b.iter(|| {
                calculate_optimal_min_border(
                    black_box(8.0),
                    black_box(10.0),
                    black_box(3.0),
                    black_box(2.0),
                    black_box(start),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_print_size,
    bench_easel_resolution,
    bench_optimizer
);
criterion_main!(benches);
