//! Pipeline throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pullchain::prelude::*;
use pullchain::sources::{from_slice, range, utf8_decoder};
use pullchain::DecodeConfig;

fn benchmark_map_filter_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_filter_sum");
    for n in [1_000u64, 100_000] {
        group.bench_with_input(BenchmarkId::new("pull", n), &n, |b, &n| {
            b.iter(|| {
                let total: u64 = range(0, black_box(n))
                    .map(|x| x.wrapping_mul(31))
                    .filter(|x| x % 3 == 0)
                    .sum();
                black_box(total)
            });
        });
        group.bench_with_input(BenchmarkId::new("std", n), &n, |b, &n| {
            b.iter(|| {
                let total: u64 = (0..black_box(n))
                    .map(|x| x.wrapping_mul(31))
                    .filter(|x| x % 3 == 0)
                    .sum();
                black_box(total)
            });
        });
    }
    group.finish();
}

fn benchmark_unique(c: &mut Criterion) {
    let data: Vec<u32> = (0..50_000u32).map(|i| i.wrapping_mul(2_654_435_761) % 4_096).collect();

    c.bench_function("unique_50k", |b| {
        b.iter(|| black_box(from_slice(&data).copied().unique().count()));
    });
}

fn benchmark_windows(c: &mut Criterion) {
    c.bench_function("map_windows_8", |b| {
        b.iter(|| {
            let best = range(0u32, black_box(10_000))
                .map_windows(8, |w| w.iter().sum::<u32>())
                .max();
            black_box(best)
        });
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let text = "pull-based lazy pipelines über UTF-8 ✓ ".repeat(256);

    c.bench_function("utf8_decoder_strict", |b| {
        b.iter(|| {
            let units = utf8_decoder(from_slice(text.as_bytes()).copied(), DecodeConfig::strict())
                .filter(Result::is_ok)
                .count();
            black_box(units)
        });
    });
}

criterion_group!(
    benches,
    benchmark_map_filter_sum,
    benchmark_unique,
    benchmark_windows,
    benchmark_decode
);
criterion_main!(benches);
