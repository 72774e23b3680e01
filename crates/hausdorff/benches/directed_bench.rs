//! Criterion benchmarks for the directed Hausdorff search.
//! Focus sizes: n in {100, 1000, 5000} points per set, early-break search
//! versus the exhaustive oracle (oracle only up to 1000).
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hausdorff::{directed_hausdorff_brute_force, HausdorffEngine, Point, SearchCfg};
use nalgebra::DVector;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_cloud(n: usize, dim: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| DVector::from_fn(dim, |_, _| rng.gen_range(-1.0..1.0)))
        .collect()
}

/// Two noisy samples of the same circle; a typical contour comparison.
fn noisy_circles(n: usize, seed: u64) -> (Vec<Point>, Vec<Point>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut draw = || {
        (0..n)
            .map(|_| {
                let t = rng.gen::<f64>() * std::f64::consts::TAU;
                let r = 1.0 + rng.gen_range(-0.05..0.05);
                DVector::from_vec(vec![r * t.cos(), r * t.sin()])
            })
            .collect::<Vec<_>>()
    };
    let a = draw();
    let b = draw();
    (a, b)
}

fn bench_directed(c: &mut Criterion) {
    let mut group = c.benchmark_group("directed");
    let engine = HausdorffEngine::with_cfg(SearchCfg::seeded(7));
    for &n in &[100usize, 1000, 5000] {
        group.bench_with_input(BenchmarkId::new("early_break_cloud3", n), &n, |b, &n| {
            b.iter_batched(
                || (random_cloud(n, 3, 41), random_cloud(n, 3, 42)),
                |(pa, pb)| {
                    let _ = engine.directed(&pa, &pb);
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("early_break_circles", n), &n, |b, &n| {
            b.iter_batched(
                || noisy_circles(n, 43),
                |(pa, pb)| {
                    let _ = engine.directed(&pa, &pb);
                },
                BatchSize::LargeInput,
            )
        });
        if n <= 1000 {
            group.bench_with_input(BenchmarkId::new("brute_force_cloud3", n), &n, |b, &n| {
                b.iter_batched(
                    || (random_cloud(n, 3, 41), random_cloud(n, 3, 42)),
                    |(pa, pb)| {
                        let _ = directed_hausdorff_brute_force(&pa, &pb);
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_directed);
criterion_main!(benches);
