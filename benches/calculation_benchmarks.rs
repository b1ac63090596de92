//! Performance benchmarks for the vacation calculation engine.
//!
//! This benchmark suite verifies that the calculation engine meets
//! performance targets:
//! - Single-year holiday catalog: < 10μs mean
//! - Full-year working-day count: < 100μs mean
//! - Balance for an employee with 10 entries: < 500μs mean
//! - Balances for 100 employees: < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use vacation_engine::calculation::{
    balance_for_employee, count_working_days, holidays_for_year, holidays_for_years,
    validate_vacation_request, HolidayCache,
};
use vacation_engine::models::{Employee, Region, VacationEntry};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates an employee in Bavaria with a standard 30-day allowance.
fn create_employee(id: usize) -> Employee {
    Employee {
        id: format!("emp_{:03}", id),
        name: format!("Employee {:03}", id),
        allowance_days: Decimal::new(30, 0),
        region: Region::Bavaria,
    }
}

/// Creates `count` non-overlapping one-week entries spread over the year.
fn create_entries(employee_id: &str, count: usize) -> Vec<VacationEntry> {
    (0..count)
        .map(|i| {
            let start = date(2025, 1, 6) + chrono::Duration::weeks(i as i64 * 4);
            VacationEntry {
                id: format!("vac_{:03}", i + 1),
                employee_id: employee_id.to_string(),
                start_date: start,
                end_date: start + chrono::Duration::days(4),
                note: None,
            }
        })
        .collect()
}

/// Benchmark: single-year holiday catalog generation.
///
/// Target: < 10μs mean
fn bench_holiday_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("holiday_catalog");

    group.bench_function("full_set", |b| {
        b.iter(|| holidays_for_year(black_box(2025), None))
    });
    group.bench_function("bavaria", |b| {
        b.iter(|| holidays_for_year(black_box(2025), Some(Region::Bavaria)))
    });
    group.bench_function("ten_year_span", |b| {
        b.iter(|| holidays_for_years(black_box(2020), black_box(2029), None))
    });

    group.finish();
}

/// Benchmark: working-day counting over ranges of growing size.
///
/// Target: < 100μs mean for a full year
fn bench_working_day_count(c: &mut Criterion) {
    let holidays = holidays_for_year(2025, Some(Region::Bavaria));
    let start = date(2025, 1, 1);

    let mut group = c.benchmark_group("working_days");
    for days in [7u64, 30, 365] {
        group.throughput(Throughput::Elements(days));
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            let end = start + chrono::Duration::days(days as i64 - 1);
            b.iter(|| count_working_days(black_box(start), black_box(end), &holidays).unwrap())
        });
    }
    group.finish();
}

/// Benchmark: balance derivation for one employee.
///
/// Target: < 500μs mean with 10 entries
fn bench_balance(c: &mut Criterion) {
    let employee = create_employee(1);
    let entries = create_entries(&employee.id, 10);
    let holidays = holidays_for_year(2025, Some(employee.region));

    c.bench_function("balance_ten_entries", |b| {
        b.iter(|| {
            balance_for_employee(black_box(&employee), 2025, &entries, &holidays).unwrap()
        })
    });
}

/// Benchmark: balances for a batch of employees, with and without a
/// holiday cache.
///
/// Target: < 50ms mean for 100 employees
fn bench_balance_batch(c: &mut Criterion) {
    let employees: Vec<Employee> = (0..100).map(create_employee).collect();
    let entries: Vec<VacationEntry> = employees
        .iter()
        .flat_map(|e| create_entries(&e.id, 5))
        .collect();

    let mut group = c.benchmark_group("balance_batch");
    group.throughput(Throughput::Elements(employees.len() as u64));

    group.bench_function("regenerating_catalogs", |b| {
        b.iter(|| {
            for employee in &employees {
                let holidays = holidays_for_year(2025, Some(employee.region));
                balance_for_employee(employee, 2025, &entries, &holidays).unwrap();
            }
        })
    });

    group.bench_function("cached_catalogs", |b| {
        b.iter(|| {
            let mut cache = HolidayCache::new();
            for employee in &employees {
                let holidays = cache.holidays(2025, Some(employee.region)).to_vec();
                balance_for_employee(employee, 2025, &entries, &holidays).unwrap();
            }
        })
    });

    group.finish();
}

/// Benchmark: request validation against a populated entry list.
fn bench_validation(c: &mut Criterion) {
    let employee = create_employee(1);
    let entries = create_entries(&employee.id, 10);
    let holidays = holidays_for_year(2025, Some(employee.region));

    c.bench_function("validate_request", |b| {
        b.iter(|| {
            validate_vacation_request(
                black_box(&employee),
                date(2025, 9, 1),
                date(2025, 9, 12),
                &entries,
                &holidays,
                2025,
                None,
            )
            .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_holiday_catalog,
    bench_working_day_count,
    bench_balance,
    bench_balance_batch,
    bench_validation
);
criterion_main!(benches);
