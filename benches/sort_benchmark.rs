//! Criterion benchmarks for the elementary sorts and their baselines.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use elementary_sorting::Algorithm;
use rand::Rng;

/// Generate random test data of given size
fn generate_random_data(size: usize) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// Benchmark each algorithm on random input
fn bench_random(c: &mut Criterion) {
    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("{} (random)", algorithm));

        // Quadratic sorts get small inputs only
        let exps: &[u32] = if algorithm.is_quadratic() {
            &[6, 8, 10, 12]
        } else {
            &[6, 8, 10, 12, 16, 20]
        };

        for &size_exp in exps {
            let size = 1usize << size_exp;
            group.throughput(Throughput::Elements(size as u64));

            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
                b.iter_batched(
                    || generate_random_data(size),
                    |mut data| {
                        algorithm.sort(black_box(&mut data));
                        data
                    },
                    criterion::BatchSize::LargeInput,
                )
            });
        }

        group.finish();
    }
}

/// Sorted input separates bubble sort from its early-exit variant
fn bench_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementary (sorted)");
    let size = 1usize << 10;
    group.throughput(Throughput::Elements(size as u64));

    for algorithm in Algorithm::ELEMENTARY {
        group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &size, |b, &size| {
            b.iter_batched(
                || (0..size as u32).collect::<Vec<u32>>(),
                |mut data| {
                    algorithm.sort(black_box(&mut data));
                    data
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random, bench_sorted);
criterion_main!(benches);
