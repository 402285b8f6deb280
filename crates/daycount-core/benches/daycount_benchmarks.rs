//! Benchmarks for year fraction dispatch and business-day enumeration.
//!
//! Run with: cargo bench -p daycount-core

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use daycount_core::calendars::{business_days_between, business_times};
use daycount_core::daycounts::{year_fraction, year_fraction_for_code, Convention};
use daycount_core::types::Date;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Date pairs spread over several leap cycles, some reversed.
fn create_date_pairs(count: usize) -> Vec<(Date, Date)> {
    let base = Date::from_ymd(2000, 1, 31).unwrap();
    (0..count)
        .map(|i| {
            let from = base.add_days((i as i64 * 37) % 3650);
            let to = from.add_days((i as i64 * 113) % 1500 - 400);
            (from, to)
        })
        .collect()
}

// =============================================================================
// YEAR FRACTIONS
// =============================================================================

fn bench_year_fraction_by_convention(c: &mut Criterion) {
    let pairs = create_date_pairs(1_000);
    let mut group = c.benchmark_group("year_fraction");
    group.throughput(Throughput::Elements(pairs.len() as u64));

    for convention in Convention::all() {
        group.bench_with_input(
            BenchmarkId::from_parameter(convention),
            convention,
            |b, convention| {
                b.iter(|| {
                    pairs
                        .iter()
                        .map(|(from, to)| {
                            year_fraction(black_box(*from), black_box(*to), *convention)
                        })
                        .sum::<f64>()
                });
            },
        );
    }

    group.finish();
}

fn bench_code_dispatch(c: &mut Criterion) {
    let from = Date::from_ymd(2007, 12, 28).unwrap();
    let to = Date::from_ymd(2008, 2, 29).unwrap();

    let mut group = c.benchmark_group("dispatch");
    group.bench_function("in_range_code", |b| {
        b.iter(|| year_fraction_for_code(black_box(from), black_box(to), black_box(1)))
    });
    group.bench_function("fallback_code", |b| {
        b.iter(|| year_fraction_for_code(black_box(from), black_box(to), black_box(666)))
    });
    group.finish();
}

// =============================================================================
// BUSINESS DAYS
// =============================================================================

fn bench_business_days(c: &mut Criterion) {
    let start = Date::from_ymd(2020, 1, 1).unwrap();
    let mut group = c.benchmark_group("business_days");

    for span in [10_i64, 365, 3650] {
        let end = start.add_days(span);
        group.throughput(Throughput::Elements(span as u64));
        group.bench_with_input(BenchmarkId::new("enumerate", span), &end, |b, end| {
            b.iter(|| business_times(black_box(start), black_box(*end)))
        });
        group.bench_with_input(BenchmarkId::new("count", span), &end, |b, end| {
            b.iter(|| business_days_between(black_box(start), black_box(*end)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_year_fraction_by_convention,
    bench_code_dispatch,
    bench_business_days,
);
criterion_main!(benches);
