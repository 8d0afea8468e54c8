//! Benchmark for the collection combinators and function wrappers.
//!
//! Measures filter / uniq / reduce over both collection shapes and the cost
//! of memoized and once-wrapped calls.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use underbar::collection::{Collection, contains, filter, reduce_seeded, uniq};
use underbar::function::{concurrent_memoize, memoize, once};

// =============================================================================
// Combinator Benchmarks
// =============================================================================

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter");

    for size in [100, 1_000, 10_000] {
        let sequence = Collection::sequence(0..size);
        let mapping = Collection::mapping((0..size).map(|index| (format!("key{index}"), index)));

        group.bench_with_input(BenchmarkId::new("sequence", size), &sequence, |bencher, sequence| {
            bencher.iter(|| filter(black_box(sequence), |value: &i32| value % 2 == 0));
        });
        group.bench_with_input(BenchmarkId::new("mapping", size), &mapping, |bencher, mapping| {
            bencher.iter(|| filter(black_box(mapping), |value: &i32| value % 2 == 0));
        });
    }

    group.finish();
}

fn benchmark_uniq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uniq");

    // uniq compares by equality only, so it is quadratic in the number of
    // distinct values.
    for distinct in [10, 100, 1_000] {
        let values: Vec<i32> = (0..10_000).map(|index| index % distinct).collect();
        group.bench_with_input(BenchmarkId::new("distinct", distinct), &values, |bencher, values| {
            bencher.iter(|| uniq(black_box(values)));
        });
    }

    group.finish();
}

fn benchmark_reduce_and_contains(criterion: &mut Criterion) {
    let sequence = Collection::sequence(0..10_000_i64);

    criterion.bench_function("reduce_seeded_sum", |bencher| {
        bencher.iter(|| reduce_seeded(black_box(&sequence), |sum, value, _| sum + value, 0));
    });
    criterion.bench_function("contains_last", |bencher| {
        bencher.iter(|| contains(black_box(&sequence), &9_999));
    });
}

// =============================================================================
// Function Wrapper Benchmarks
// =============================================================================

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    let triangle = memoize(|n: u64| (1..=n).sum::<u64>());
    let _ = triangle.call(1_000);
    group.bench_function("cached_hit", |bencher| {
        bencher.iter(|| triangle.call(black_box(1_000)));
    });

    let shared = concurrent_memoize(|n: u64| (1..=n).sum::<u64>());
    let _ = shared.call(1_000);
    group.bench_function("concurrent_cached_hit", |bencher| {
        bencher.iter(|| shared.call(black_box(1_000)));
    });

    group.bench_function("cold_miss", |bencher| {
        bencher.iter(|| {
            let fresh = memoize(|n: u64| (1..=n).sum::<u64>());
            fresh.call(black_box(1_000))
        });
    });

    group.finish();
}

fn benchmark_once(criterion: &mut Criterion) {
    let wrapped = once(|seed: u64| seed * 2);
    let _ = wrapped.call(21);

    criterion.bench_function("once_replay", |bencher| {
        bencher.iter(|| *wrapped.call(black_box(0)));
    });
}

criterion_group!(
    benches,
    benchmark_filter,
    benchmark_uniq,
    benchmark_reduce_and_contains,
    benchmark_memoize,
    benchmark_once
);

criterion_main!(benches);
