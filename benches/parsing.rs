//! Benchmarks for datestrings

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use datestrings::{format_day_string, format_month_string, parse_date_string};

/// Inputs from least to most ambiguous
const INPUTS: [(&str, &str); 5] = [
    ("iso", "2023-12-25"),
    ("dmy_forced", "31/1/2023"),
    ("ambiguous", "01/05/2023"),
    ("named", "Jan 5, 2023"),
    ("year_month", "2023-12"),
];

fn generate_dates(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("{:02}/{:02}/2025", (i % 28) + 1, (i % 12) + 1))
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::new("single", name), &input, |b, input| {
            b.iter(|| parse_date_string(black_box(input)))
        });
    }

    group.finish();
}

fn bench_parse_many(c: &mut Criterion) {
    let dates = generate_dates(1000);
    c.bench_function("parse_1000", |b| {
        b.iter(|| {
            for date in &dates {
                let _ = parse_date_string(black_box(date));
            }
        })
    });
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for format in ["Y-M2-D2", "D1/M1/Y", "Mf D1, Y"] {
        group.bench_with_input(BenchmarkId::new("day", format), &format, |b, format| {
            b.iter(|| format_day_string(black_box(19716), format))
        });
    }
    group.bench_function("month", |b| {
        b.iter(|| format_month_string(black_box(647), "Mf Y"))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_parse_many, bench_format);
criterion_main!(benches);
