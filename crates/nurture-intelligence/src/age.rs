// ABOUTME: Converts a birth date and measurement time into whole months of age
// ABOUTME: Uses a fixed days-per-month divisor with round-half-away-from-zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::AgeConfig;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

/// Age-in-months calculator
///
/// `age = round(days_between(birth, measured) / days_per_month)`, with the
/// divisor fixed at 30.44 by default. Calendar months are not used; month
/// boundaries are decided by the rounding alone.
#[derive(Debug, Clone, Copy)]
pub struct AgeCalculator {
    days_per_month: f64,
}

impl Default for AgeCalculator {
    fn default() -> Self {
        Self::new(AgeConfig::default())
    }
}

impl AgeCalculator {
    /// Create a calculator from configuration
    #[must_use]
    pub const fn new(config: AgeConfig) -> Self {
        Self {
            days_per_month: config.days_per_month,
        }
    }

    /// Whole days from birth to the measurement's UTC calendar date
    #[must_use]
    pub fn days_since_birth(birth_date: NaiveDate, measured_at: DateTime<Utc>) -> i64 {
        (measured_at.date_naive() - birth_date).num_days()
    }

    /// Age in whole months at `measured_at`
    ///
    /// Measurements dated before birth saturate at 0.
    #[must_use]
    pub fn age_in_months(&self, birth_date: NaiveDate, measured_at: DateTime<Utc>) -> u32 {
        let days = Self::days_since_birth(birth_date, measured_at);
        if days < 0 {
            warn!(
                birth_date = %birth_date,
                measured_at = %measured_at,
                "Measurement predates birth date, treating age as 0 months"
            );
            return 0;
        }

        (days as f64 / self.days_per_month).round() as u32
    }
}
