//! Predicate benchmarks.
//!
//! Compares filtered evaluation against exact-only evaluation on generic random input,
//! where the interval phase almost always decides, and on degenerate input, where every
//! call falls back to exact arithmetic.
//!
//! Run with:
//! ```bash
//! cargo bench --bench predicates
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use filtered_predicates::filter::{Filter, FilterConfig, Strategy};
use filtered_predicates::point::{Point2, WeightedPoint2};

const STRATEGIES: [Strategy; 2] = [Strategy::Filtered, Strategy::ExactOnly];

fn filter(strategy: Strategy) -> Filter {
    Filter::new(FilterConfig {
        strategy,
        ..FilterConfig::default()
    })
}

// ============================================================================
// Helper: input generators
// ============================================================================

fn random_triangles(n: usize, seed: u64) -> Vec<[Point2; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut point = || Point2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
    (0..n).map(|_| [point(), point(), point()]).collect()
}

/// Exactly collinear triples on the diagonal.
fn collinear_triangles(n: usize, seed: u64) -> Vec<[Point2; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut point = || {
        let a: f64 = rng.random_range(-1.0..1.0);
        Point2::new(a, a)
    };
    (0..n).map(|_| [point(), point(), point()]).collect()
}

fn random_weighted(n: usize, seed: u64) -> Vec<[WeightedPoint2; 4]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut point = || {
        WeightedPoint2::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(0.0..0.1),
        )
    };
    (0..n).map(|_| [point(), point(), point(), point()]).collect()
}

// ============================================================================
// Benchmark: orientation_2d
// ============================================================================

fn bench_orientation(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates/orientation_2d");

    let n = 1000;
    let inputs = [
        ("random", random_triangles(n, 42)),
        ("collinear", collinear_triangles(n, 42)),
    ];
    group.throughput(Throughput::Elements(n as u64));

    for (name, triangles) in &inputs {
        for strategy in STRATEGIES {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), name),
                triangles,
                |b, triangles| {
                    let filter = filter(strategy);
                    b.iter(|| {
                        triangles
                            .iter()
                            .map(|[p, q, r]| filter.orientation_2d(p, q, r))
                            .collect::<Vec<_>>()
                    });
                },
            );
        }
    }

    group.finish();
}

// ============================================================================
// Benchmark: power_test_2d
// ============================================================================

fn bench_power_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates/power_test_2d");

    let n = 1000;
    let quads = random_weighted(n, 7);
    group.throughput(Throughput::Elements(n as u64));

    for strategy in STRATEGIES {
        group.bench_with_input(
            BenchmarkId::new(format!("{:?}", strategy), "random"),
            &quads,
            |b, quads| {
                let filter = filter(strategy);
                b.iter(|| {
                    quads
                        .iter()
                        .map(|[p, q, r, t]| filter.power_test_2d(p, q, r, t))
                        .collect::<Vec<_>>()
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Benchmark: cold exact cache
// ============================================================================

/// Fallback cost including the first exact conversion of every coordinate.
fn bench_cold_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates/cold_fallback");

    let filter = filter(Strategy::Filtered);
    group.bench_function("collinear", |b| {
        b.iter_batched(
            || collinear_triangles(100, 3),
            |triangles| {
                triangles
                    .iter()
                    .map(|[p, q, r]| filter.orientation_2d(p, q, r))
                    .collect::<Vec<_>>()
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_orientation, bench_power_test, bench_cold_fallback);
criterion_main!(benches);
