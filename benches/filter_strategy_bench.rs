use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use plotsync::core::{
    AxisLimits, RenderStrategy, StrategyThresholds, fit_to_screen_data, last_n_data,
    select_render_strategy,
};
use plotsync::render::plan::plan_line;

fn dataset(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin()).collect();
    (x, y)
}

fn bench_filters(c: &mut Criterion) {
    let (x, y) = dataset(1_000_000);

    c.bench_function("last_n_1m", |b| {
        b.iter(|| black_box(last_n_data(&x, &y, 10_000)))
    });

    c.bench_function("fit_to_screen_1m", |b| {
        b.iter(|| black_box(fit_to_screen_data(&x, &y, 1000, 2)))
    });
}

fn bench_strategy_selection(c: &mut Criterion) {
    let thresholds = StrategyThresholds::default();
    c.bench_function("select_render_strategy", |b| {
        b.iter(|| select_render_strategy(black_box(1_000_000), &thresholds))
    });
}

fn bench_decimation(c: &mut Criterion) {
    let (x, y) = dataset(1_000_000);
    let limits = AxisLimits::new(0.0, 999_999.0).expect("valid limits");

    c.bench_function("decimate_1m_to_1000_buckets", |b| {
        b.iter(|| black_box(plan_line(&x, &y, RenderStrategy::LevelOfDetail, limits, 1000)))
    });
}

criterion_group!(
    benches,
    bench_filters,
    bench_strategy_selection,
    bench_decimation
);
criterion_main!(benches);
