//! Parsing benchmarks for clock text, single lines, and whole files.
//!
//! Run with: `cargo bench --package tickfeed-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::Write;
use tempfile::NamedTempFile;
use tickfeed_bench::synthetic_feed;
use tickfeed_lib::{FeedConfig, FieldLayout, parse_clock_text, parse_line, read_all};

fn clock_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock");
    for text in ["09:30:15", "09:30:15:500"] {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| parse_clock_text(black_box(text)));
        });
    }
    group.finish();
}

fn line_benchmark(c: &mut Criterion) {
    let layout = FieldLayout::default();
    c.bench_function("parse_line", |b| {
        b.iter(|| parse_line(black_box("EURUSD,09:30:15:500,1.2345,1000000"), &layout, 1));
    });
}

fn file_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("read_all");
    group.sample_size(20);

    for lines in [1_000usize, 100_000] {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(synthetic_feed(lines).as_bytes()).expect("write feed");

        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), file.path(), |b, path| {
            b.to_async(&runtime)
                .iter(|| read_all(path.to_path_buf(), FeedConfig::default()));
        });
    }
    group.finish();
}

criterion_group!(benches, clock_benchmark, line_benchmark, file_benchmark);
criterion_main!(benches);
