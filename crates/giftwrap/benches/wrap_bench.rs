//! Criterion benchmarks for the wrapping loop.
//! Sizes: n in {3, 20, 100, 1000}; coordinates in [-1000, 1000] beyond the
//! validated range to exercise larger hulls.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use giftwrap::{compute_hull_trace, HullSteps, Point};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-1000..=1000), rng.gen_range(-1000..=1000)))
        .collect()
}

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");
    for &n in &[3usize, 20, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("compute_hull_trace", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 43),
                |pts| {
                    let _trace = compute_hull_trace(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("first_step_lazy", n), &n, |b, &n| {
            let pts = random_points(n, 44);
            b.iter(|| HullSteps::new(&pts).next())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_wrap);
criterion_main!(benches);
