//! Prime query benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Primality testing across magnitudes (small, 32-bit, 64-bit)
//! - k-th prime lookup
//! - Enumeration strategies (two-pass vs single-pass)
//! - Cursor stepping and random selection
//!
//! Run with `cargo bench -p primes-bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use primes::prelude::*;
use rand::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate odd candidates near `magnitude`.
fn generate_candidates(size: usize, magnitude: u64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| rng.random_range(magnitude..magnitude * 2) | 1)
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");
    group.sample_size(50);

    for magnitude in [1_000u64, 1_000_000, 1_000_000_000] {
        let candidates = generate_candidates(1_000, magnitude, 42);
        group.throughput(Throughput::Elements(candidates.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("wheel", magnitude),
            &candidates,
            |b, candidates| {
                b.iter(|| {
                    candidates
                        .iter()
                        .filter(|&&n| is_prime(black_box(n)))
                        .count()
                })
            },
        );
    }
    group.finish();
}

fn bench_nth_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("nth_prime");
    group.sample_size(30);

    let primes = Primes::<u64>::new().adapter(Batch).build().unwrap();

    for k in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("batch", k), &k, |b, &k| {
            b.iter(|| primes.nth_prime(black_box(k)).unwrap())
        });
    }
    group.finish();
}

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("up_to");
    group.sample_size(20);

    for bound in [10_000u32, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(bound as u64));

        for (name, strategy) in [("two_pass", TwoPass), ("single_pass", SinglePass)] {
            let primes = Primes::<u32>::new()
                .enumeration(strategy)
                .adapter(Batch)
                .build()
                .unwrap();

            group.bench_with_input(BenchmarkId::new(name, bound), &bound, |b, &bound| {
                b.iter(|| primes.up_to(black_box(bound)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_cursor(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor");
    group.sample_size(50);

    for start in [2u64, 1_000_000, 1_000_000_000_000] {
        group.throughput(Throughput::Elements(100));

        group.bench_with_input(BenchmarkId::new("next_100", start), &start, |b, &start| {
            b.iter(|| {
                let mut cursor = Primes::<u64>::new()
                    .start_from(start)
                    .adapter(Cursor)
                    .build()
                    .unwrap();
                for _ in 0..100 {
                    black_box(cursor.try_next().unwrap());
                }
            })
        });
    }
    group.finish();
}

fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler");
    group.sample_size(20);

    let sampler = Primes::<u32>::new().adapter(Sampler).build().unwrap();

    for width in [1_000u32, 100_000] {
        let lower = 1_000_000;
        group.bench_with_input(BenchmarkId::new("between", width), &width, |b, &width| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                sampler
                    .random_prime_between(lower, lower + black_box(width), &mut rng)
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_is_prime,
    bench_nth_prime,
    bench_enumeration,
    bench_cursor,
    bench_sampler,
);

criterion_main!(benches);
