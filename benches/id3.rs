//! Benchmarks for ID3 learning and classification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use id3::data::WEATHER_CSV;
use id3::prelude::*;

/// The weather rows repeated `copies` times, with a row-id style attribute
/// that keeps larger tables from collapsing into the same tree.
fn replicated_weather(copies: usize) -> Table {
    let mut lines = WEATHER_CSV.lines();
    let header = lines.next().unwrap_or_default();
    let body: Vec<&str> = lines.collect();

    let mut csv = format!("{header},batch\n");
    for copy in 0..copies {
        for line in &body {
            csv.push_str(&format!("{line},b{}\n", copy % 7));
        }
    }
    Table::from_reader(csv.as_bytes()).unwrap()
}

fn bench_id3_learn(c: &mut Criterion) {
    let mut group = c.benchmark_group("id3_learn");

    for copies in [1, 10, 100].iter() {
        let mut table = replicated_weather(*copies);

        group.bench_with_input(BenchmarkId::from_parameter(copies), copies, |b, _| {
            b.iter(|| learn(black_box(&mut table), "play").unwrap());
        });
    }

    group.finish();
}

fn bench_id3_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("id3_predict");

    for copies in [1, 10, 100].iter() {
        let mut table = replicated_weather(*copies);
        let tree = learn(&mut table, "play").unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(copies), copies, |b, _| {
            b.iter(|| tree.predict(black_box(&mut table)).unwrap());
        });
    }

    group.finish();
}

fn bench_information_gain(c: &mut Criterion) {
    let mut table = replicated_weather(100);

    c.bench_function("information_gain_outlook", |b| {
        b.iter(|| information_gain(black_box(&mut table), "outlook", "play").unwrap());
    });
}

criterion_group!(
    benches,
    bench_id3_learn,
    bench_id3_predict,
    bench_information_gain
);
criterion_main!(benches);
