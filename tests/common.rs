// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup plus subject and growth record fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nurture_growth`

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use nurture_growth::models::{GrowthRecord, Sex, Subject};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for floating point comparisons
pub const EPSILON: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats are equal within `EPSILON`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Fixed birth date used across fixtures
pub fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Subject born on [`birth_date`]
pub fn newborn(sex: Sex) -> Subject {
    Subject::new(birth_date(), sex)
}

/// Noon UTC `days` after the subject's birth (negative for before birth)
pub fn days_after_birth(subject: &Subject, days: i64) -> DateTime<Utc> {
    (subject.birth_date + Duration::days(days))
        .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
        .and_utc()
}

/// Record carrying only a weight
pub fn weight_record(subject: &Subject, days: i64, kg: f64) -> GrowthRecord {
    GrowthRecord::new(subject.id, days_after_birth(subject, days)).with_weight(kg)
}

/// Record carrying all three metrics
pub fn full_record(
    subject: &Subject,
    days: i64,
    kg: f64,
    height_cm: f64,
    head_cm: f64,
) -> GrowthRecord {
    GrowthRecord::new(subject.id, days_after_birth(subject, days))
        .with_weight(kg)
        .with_height(height_cm)
        .with_head_circumference(head_cm)
}

/// Weight records three days apart, all within the first month
pub fn weight_series(subject: &Subject, weights: &[f64]) -> Vec<GrowthRecord> {
    weights
        .iter()
        .enumerate()
        .map(|(i, &kg)| weight_record(subject, i as i64 * 3, kg))
        .collect()
}
