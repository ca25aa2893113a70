//! Benchmarks for roster parsing and ingestion.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seatview::ingest::ingest;

/// Synthetic roster rows of the given shape.
fn make_rows(rows: usize, cols: usize) -> Vec<Vec<String>> {
    (0..rows)
        .map(|r| (0..cols).map(|c| format!("Person {r}-{c}")).collect())
        .collect()
}

/// Synthetic CSV bytes of the given shape.
fn make_csv(rows: usize, cols: usize) -> Vec<u8> {
    let mut out = String::new();
    for r in 0..rows {
        let line: Vec<String> = (0..cols).map(|c| format!("Person {r}-{c}")).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out.into_bytes()
}

/// Benchmark the ingestion pipeline across grid sizes
fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");
    for (rows, cols) in [(5, 8), (30, 30), (100, 50)] {
        let raw = make_rows(rows, cols);
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &raw,
            |b, raw| b.iter(|| ingest(black_box(raw)).expect("Failed to ingest")),
        );
    }
    group.finish();
}

/// Benchmark the full CSV import path (bytes to grid)
fn bench_csv_import(c: &mut Criterion) {
    let data = make_csv(100, 20);

    c.bench_function("import_csv_100x20", |b| {
        b.iter(|| seatview::import(black_box(&data), "roster.csv").expect("Failed to import"))
    });
}

criterion_group!(benches, bench_ingest, bench_csv_import);
criterion_main!(benches);
