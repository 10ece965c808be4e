// ABOUTME: Benchmark fixtures for generating realistic infant growth histories
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating realistic infant growth histories.
//!
//! Values follow the median curves loosely with a small deterministic wobble,
//! so every percentile category and trend direction shows up across a batch.

use chrono::{Duration, NaiveDate, NaiveTime};
use nurture_growth::models::{GrowthRecord, Sex, Subject};

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryLength {
    /// A few weeks of weekly measurements
    Short,
    /// Two years of weekly measurements
    Long,
}

impl HistoryLength {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Short => 6,
            Self::Long => 104,
        }
    }
}

fn birth_date(index: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default() + Duration::days((index % 365) as i64)
}

/// Deterministic subject; sexes alternate
#[must_use]
pub fn generate_subject(index: usize) -> Subject {
    let sex = if index % 2 == 0 { Sex::Male } else { Sex::Female };
    Subject::new(birth_date(index), sex).with_name(format!("Bench Baby {index}"))
}

/// Weekly records for `subject`, starting on the birth date
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_history(subject: &Subject, count: usize, seed: usize) -> Vec<GrowthRecord> {
    (0..count)
        .map(|week| {
            let months = week as f64 * 7.0 / 30.44;
            let wobble = ((week * 7 + seed * 13) % 11) as f64 / 10.0 - 0.5;
            let date = (subject.birth_date + Duration::weeks(week as i64))
                .and_time(NaiveTime::MIN)
                .and_utc();
            let record = GrowthRecord::new(subject.id, date)
                .with_weight(3.3 + months * 0.55 + wobble * 0.4)
                .with_height(49.9 + months * 1.6 + wobble);
            if week % 4 == 0 {
                record.with_head_circumference(34.5 + months * 0.5)
            } else {
                record
            }
        })
        .collect()
}

/// A batch of subjects each paired with a history
#[must_use]
pub fn generate_cohort(subjects: usize, length: HistoryLength) -> Vec<(Subject, Vec<GrowthRecord>)> {
    (0..subjects)
        .map(|index| {
            let subject = generate_subject(index);
            let history = generate_history(&subject, length.count(), index);
            (subject, history)
        })
        .collect()
}
