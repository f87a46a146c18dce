//! Benchmarks comparing the incremental window with full recomputation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use robust_rolling::{
    DefaultWindowedEstimator, NaiveWindowedEstimator, OnlineRobustEstimator, RollingParameters,
};

/// Hourly bike counts for one station: a daily cycle plus noise
fn generate_series(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|i| {
            let daily = (i as f64 * std::f64::consts::TAU / 24.0).sin() * 8.0 + 10.0;
            (daily + rng.gen_range(-2.0..2.0)).max(0.0).round()
        })
        .collect()
}

fn run<E: OnlineRobustEstimator>(mut est: E, series: &[f64]) -> usize {
    series
        .iter()
        .filter(|&&v| est.update(v).map(|s| s.is_valid()).unwrap_or(false))
        .count()
}

fn bench_rolling_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_update");
    let series = generate_series(24 * 90, 42);

    for &window_size in &[24usize, 168, 720] {
        let params = RollingParameters::new(window_size);

        group.bench_with_input(
            BenchmarkId::new("incremental", window_size),
            &series,
            |b, series| b.iter(|| black_box(run(DefaultWindowedEstimator::new(params), series))),
        );

        group.bench_with_input(
            BenchmarkId::new("recompute", window_size),
            &series,
            |b, series| b.iter(|| black_box(run(NaiveWindowedEstimator::new(params), series))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_rolling_update);
criterion_main!(benches);
