use std::cell::Cell;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use ownership_bench::phases;

const ELEMENTS: usize = 10_000;

fn criterion_benchmark(c: &mut Criterion) {
    let slots: Vec<Cell<i32>> = vec![Cell::new(0); ELEMENTS];

    c.bench_function("rc fill", |b| {
        // Dominated by one heap allocation per element.
        b.iter(|| phases::fill_shared(&slots));
    });
    c.bench_function("ref fill", |b| {
        // Only the vector itself allocates here.
        b.iter(|| phases::fill_refs(&slots));
    });
    c.bench_function("optional ref fill", |b| {
        b.iter(|| phases::fill_optional_refs(&slots));
    });
    c.bench_function("box fill", |b| {
        b.iter(|| phases::fill_boxed(&slots));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .significance_level(0.02)
        .noise_threshold(0.05)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(3));
    targets = criterion_benchmark
);
criterion_main!(benches);
