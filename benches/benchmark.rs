//! Benchmarks for input_mask performance testing.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use input_mask::{
    cursor::{CursorTracker, CursorTrackerOptions},
    detect::detect_brand_str,
    stream::FormatExt,
    strip::strip_delimiters,
    DateOptions, Mask, NumeralOptions,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111 1111 1111 1111";
const AMEX: &str = "378282246310005";

/// Random digit strings from a fixed seed
fn random_digits(count: usize, len: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect())
        .collect()
}

/// Benchmark one format call per domain
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let card: Mask = "credit-card".parse().unwrap();
    group.bench_function("credit_card_raw", |b| b.iter(|| card.format(black_box(VISA_16))));
    group.bench_function("credit_card_formatted", |b| {
        b.iter(|| card.format(black_box(VISA_16_FORMATTED)))
    });
    group.bench_function("credit_card_amex", |b| b.iter(|| card.format(black_box(AMEX))));

    let date = Mask::from(DateOptions {
        min: Some("2000-01-01".parse().unwrap()),
        max: Some("2030-12-31".parse().unwrap()),
        ..Default::default()
    });
    group.bench_function("date_with_range", |b| b.iter(|| date.format(black_box("31122023"))));

    let time: Mask = "time".parse().unwrap();
    group.bench_function("time", |b| b.iter(|| time.format(black_box("235959"))));

    let numeral = Mask::from(NumeralOptions {
        prefix: "$".to_string(),
        ..Default::default()
    });
    group.bench_function("numeral", |b| b.iter(|| numeral.format(black_box("-1234567.891"))));

    let phone: Mask = "phone".parse().unwrap();
    group.bench_function("phone", |b| b.iter(|| phone.format(black_box("(555) 123-4567"))));

    group.finish();
}

/// Benchmark brand detection
fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");

    for prefix in ["4", "2221", "6011", "1800"] {
        group.bench_with_input(BenchmarkId::from_parameter(prefix), prefix, |b, prefix| {
            b.iter(|| detect_brand_str(black_box(prefix)))
        });
    }

    group.finish();
}

/// Benchmark the delimiter stripper
fn bench_strip(c: &mut Criterion) {
    c.bench_function("strip_delimiters", |b| {
        b.iter(|| strip_delimiters(black_box("123.456.789-01 / 23"), &[".", "-", " / "]))
    });
}

/// Benchmark caret tracking on a keystroke that adds a delimiter
fn bench_cursor(c: &mut Criterion) {
    let tracker = CursorTracker::new(CursorTrackerOptions::with_delimiters(&[" "]));
    c.bench_function("cursor_track", |b| {
        b.iter(|| {
            tracker.track(
                black_box("4111 1111 111"),
                black_box("4111 1111 1111"),
                black_box(14),
                black_box("4111 1111 1111 "),
            )
        })
    });
}

/// Benchmark streaming many values through one mask
fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");
    let card: Mask = "credit-card".parse().unwrap();

    for size in [100, 1000, 10000] {
        let values = random_digits(size, 16);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| values.iter().format_with(&card).count())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_format, bench_detect, bench_strip, bench_cursor, bench_stream);
criterion_main!(benches);
