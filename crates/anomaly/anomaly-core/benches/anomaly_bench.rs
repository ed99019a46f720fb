//! Benchmark suite for anomaly detection.

use anomaly_core::{detect, detect_multi_metric, early_warnings};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use series_spi::{MonthlyEventCounts, TimePoint, YearMonth};

fn create_rows(months: usize) -> Vec<MonthlyEventCounts> {
    let mut period = YearMonth { year: 2000, month: 1 };
    let mut rows = Vec::with_capacity(months);
    for i in 0..months {
        let t = i as f64;
        let spike = if i % 37 == 0 { 40.0 } else { 0.0 };
        rows.push(MonthlyEventCounts::new(
            period.year,
            period.month,
            20.0 + (t * 0.5).sin() * 4.0 + spike,
            5.0 + (t * 0.3).cos() * 2.0,
            (i % 5) as f64,
        ));
        period = period.next();
    }
    // Reverse so every call pays for the chronological sort
    rows.reverse();
    rows
}

fn create_series(months: usize) -> Vec<TimePoint> {
    create_rows(months)
        .iter()
        .map(|row| row.new_members_point())
        .collect()
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("ZScoreDetect");
    for months in [24, 120, 1200].iter() {
        let series = create_series(*months);
        group.bench_with_input(BenchmarkId::new("single_metric", months), &series, |b, series| {
            b.iter(|| detect(black_box(series), 2.0, Some("New members")))
        });
    }
    group.finish();
}

fn bench_multi_metric(c: &mut Criterion) {
    let mut group = c.benchmark_group("MultiMetric");
    for months in [24, 120, 1200].iter() {
        let rows = create_rows(*months);
        group.bench_with_input(BenchmarkId::new("detect", months), &rows, |b, rows| {
            b.iter(|| detect_multi_metric(black_box(rows), 2.0))
        });
        group.bench_with_input(BenchmarkId::new("early_warnings", months), &rows, |b, rows| {
            b.iter(|| early_warnings(black_box(rows)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_detect, bench_multi_metric);
criterion_main!(benches);
