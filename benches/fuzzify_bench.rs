//! Benchmark suite for fuzzifier
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzifier::{Fuzzifier, ModalityConfig, Table};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

fn random_table(rows: usize, features: usize, seed: u64) -> Table {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let columns: Vec<(String, Vec<f64>)> = (0..features)
        .map(|j| {
            let values: Vec<f64> = (0..rows).map(|_| rng.gen_range(0.0..100.0)).collect();
            (format!("f{j}"), values)
        })
        .collect();
    Table::new(columns).expect("random columns share one length")
}

fn bench_fuzzify(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzify");

    for rows in [100, 1_000, 10_000] {
        let data = random_table(rows, 8, 42);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| {
                let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new().with_auto("f0", 7));
                fuzzifier.fuzzify().expect("fuzzify");
                black_box(fuzzifier.variables().len())
            })
        });
    }
    group.finish();
}

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");
    let data = random_table(5_000, 4, 7);
    let mut fuzzifier = Fuzzifier::new(&data, ModalityConfig::new());
    fuzzifier.fuzzify().expect("fuzzify");

    for rows in [1, 100, 1_000] {
        let new_rows = random_table(rows, 4, 99);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| black_box(fuzzifier.interpolate(&new_rows).expect("interpolate")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fuzzify, bench_interpolate);
criterion_main!(benches);
