//! Benchmarks for the ranking and formatting core.
//!
//! Run with: `cargo bench`

use covtrack::api::{CountryStat, Counts};
use covtrack::stats::{format_count, rank};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn synthetic_countries(n: u64) -> Vec<CountryStat> {
    (0..n)
        .map(|i| CountryStat {
            name: format!("Country {i}"),
            counts: Counts {
                // Repeating counts exercise the stable tie-break path.
                cases: if i % 17 == 0 { None } else { Some((i * 7919) % 50_000_000) },
                ..Counts::default()
            },
            ..CountryStat::default()
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [32_u64, 256, 4096] {
        let records = synthetic_countries(size);
        group.bench_with_input(BenchmarkId::new("countries", size), &records, |b, recs| {
            b.iter(|| std::hint::black_box(rank(recs)))
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let samples: Vec<Option<u64>> = (0..1024_u64)
        .map(|i| if i % 13 == 0 { None } else { Some(i * 104_729) })
        .collect();

    group.bench_function("format_count", |b| {
        b.iter(|| {
            for &v in &samples {
                std::hint::black_box(format_count(v));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_rank, bench_format);
criterion_main!(benches);
