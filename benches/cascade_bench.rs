use adreach::estimator::{estimate_cascade, estimate_total_views};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn benchmark_total_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_total_views");

    for investment in [10.0, 1_000.0, 1_000_000.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(investment),
            &investment,
            |b, &investment| b.iter(|| estimate_total_views(black_box(investment), None)),
        );
    }

    group.finish();
}

fn benchmark_cascade_report(c: &mut Criterion) {
    c.bench_function("estimate_cascade", |b| {
        b.iter(|| estimate_cascade(black_box(1_234.56)))
    });
}

criterion_group!(benches, benchmark_total_views, benchmark_cascade_report);
criterion_main!(benches);
