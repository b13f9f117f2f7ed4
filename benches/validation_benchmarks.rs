//! Performance benchmarks for the staffing validator.
//!
//! Covers the rule engine on its own and the full HTTP path:
//! - Employee rule set, valid and fully invalid records
//! - Staff rule set, valid and empty records
//! - POST /api/employee round trip
//! - Batch of 1000 staff validations
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use staffing_validator::api::{AppState, create_router};
use staffing_validator::clock::FixedClock;
use staffing_validator::config::{ConfigLoader, EmployeeLimits, StaffLimits};
use staffing_validator::models::{EmployeeRecord, StaffRecord};
use staffing_validator::validation::{employee_rules, staff_rules};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()
}

fn valid_employee() -> EmployeeRecord {
    EmployeeRecord {
        name: "Jonathan Doe".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
        email: Some("jonathan@example.com".to_string()),
        phone: Some("+1 (555) 123-4567 ext. 12".to_string()),
        hourly_salary: 250.0,
    }
}

fn invalid_employee() -> EmployeeRecord {
    EmployeeRecord {
        name: "Jo".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
        email: Some("nope".to_string()),
        phone: Some("??".to_string()),
        hourly_salary: 10.0,
    }
}

/// Benchmark: Employee rule set without HTTP.
fn bench_employee_rules(c: &mut Criterion) {
    let rules = employee_rules(&EmployeeLimits::default());
    let valid = valid_employee();
    let invalid = invalid_employee();

    let mut group = c.benchmark_group("employee_rules");
    group.bench_function("valid", |b| {
        b.iter(|| black_box(rules.validate(black_box(&valid), today())))
    });
    group.bench_function("all_checks_fail", |b| {
        b.iter(|| black_box(rules.validate(black_box(&invalid), today())))
    });
    group.finish();
}

/// Benchmark: Staff rule set without HTTP.
fn bench_staff_rules(c: &mut Criterion) {
    let rules = staff_rules(&StaffLimits::default());
    let valid = StaffRecord {
        name: Some("Margaret Hughes".to_string()),
        email: Some("margaret@example.com".to_string()),
        phone: Some("(02) 9876 5432".to_string()),
        hourly_salary: Some(Decimal::from(45)),
    };
    let empty = StaffRecord::default();

    let mut group = c.benchmark_group("staff_rules");
    group.bench_function("valid", |b| {
        b.iter(|| black_box(rules.validate(black_box(&valid), today())))
    });
    group.bench_function("empty", |b| {
        b.iter(|| black_box(rules.validate(black_box(&empty), today())))
    });
    group.finish();
}

/// Benchmark: Full HTTP round trip for an employee submission.
fn bench_employee_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::with_clock(ConfigLoader::default(), FixedClock::new(today()));
    let router = create_router(state);
    let body = serde_json::to_string(&valid_employee()).unwrap();

    c.bench_function("employee_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/employee")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 1000 staff records.
fn bench_staff_batch_1000(c: &mut Criterion) {
    let rules = staff_rules(&StaffLimits::default());
    let records: Vec<StaffRecord> = (0..1000)
        .map(|i| StaffRecord {
            name: Some(format!("Staff Member {:04}", i)),
            email: (i % 2 == 0).then(|| format!("staff{}@example.com", i)),
            phone: (i % 3 == 0).then(|| "555-123-4567".to_string()),
            hourly_salary: Some(Decimal::from(20 + (i % 400))),
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("staff_batch_1000", |b| {
        b.iter(|| {
            let failures: usize = records
                .iter()
                .map(|record| rules.validate(record, today()).len())
                .sum();
            black_box(failures)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_employee_rules,
    bench_staff_rules,
    bench_employee_endpoint,
    bench_staff_batch_1000
);
criterion_main!(benches);
