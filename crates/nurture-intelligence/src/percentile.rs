// ABOUTME: Percentile interpolator placing a measurement against the reference bands
// ABOUTME: Produces a coarse percentile rank, an approximate z-score, and a risk category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Percentile standing for a single measurement.
//!
//! The percentile is only continuous between the 10th and 90th bands. Outside
//! that range a fixed midpoint is reported for the band the value falls into.
//! The z-score uses `(value - p50) / ((p90 - p10) / 2.56)`, a normal
//! approximation that is not an LMS z-score. Consumers rely on this scale, so
//! it must not be swapped for a clinical formula without telling them.

use crate::reference_table::{PercentileBands, ReferenceTable};
use crate::round_to;
use nurture_core::models::{GrowthMetric, ReferenceMetric, Sex};
use serde::{Deserialize, Serialize};

/// Percentile reported for values below the 3rd band
const BELOW_THIRD_PERCENTILE: f64 = 1.5;
/// Percentile reported for values in `[p3, p10)`
const BELOW_TENTH_PERCENTILE: f64 = 6.5;
/// Percentile reported for values in `(p90, p97]`
const ABOVE_NINETIETH_PERCENTILE: f64 = 93.5;
/// Percentile reported for values above the 97th band
const ABOVE_NINETY_SEVENTH_PERCENTILE: f64 = 98.5;
/// Width in percentile points of each half of the normal range
const NORMAL_HALF_SPAN: f64 = 40.0;
/// Width of the 10th-90th interval in standard deviations
const P10_P90_STANDARD_DEVIATIONS: f64 = 2.56;

/// Risk category of a measurement relative to the reference bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PercentileCategory {
    /// Below the 3rd percentile
    #[serde(rename = "below_3rd")]
    BelowThird,
    /// At or above the 3rd but below the 10th percentile
    #[serde(rename = "below_10th")]
    BelowTenth,
    /// Between the 10th and 90th percentiles inclusive
    #[serde(rename = "normal")]
    Normal,
    /// Above the 90th, at or below the 97th percentile
    #[serde(rename = "above_90th")]
    AboveNinetieth,
    /// Above the 97th percentile
    #[serde(rename = "above_97th")]
    AboveNinetySeventh,
}

/// Percentile standing of one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPercentile {
    /// Metric measured
    pub metric: GrowthMetric,
    /// Percentile rank (0-100), coarse outside the 10th-90th range
    pub percentile: f64,
    /// Approximate z-score, rounded to 2 decimals
    pub zscore: f64,
    /// Risk category
    pub category: PercentileCategory,
}

/// Classifies measurements against interpolated reference bands
pub struct PercentileInterpolator;

impl PercentileInterpolator {
    /// Percentile standing of `value` at `age_months`
    ///
    /// Non-finite inputs propagate as NaN outputs; callers should skip them.
    #[must_use]
    pub fn percentile_of(
        age_months: f64,
        value: f64,
        sex: Sex,
        metric: ReferenceMetric,
    ) -> GrowthPercentile {
        let bands = ReferenceTable::bands_at(metric, sex, age_months);
        let (category, percentile) = Self::classify(value, &bands);

        GrowthPercentile {
            metric: metric.into(),
            percentile,
            zscore: round_to(Self::approximate_zscore(value, &bands), 2),
            category,
        }
    }

    /// Category and percentile rank of `value` against `bands`
    #[must_use]
    pub fn classify(value: f64, bands: &PercentileBands) -> (PercentileCategory, f64) {
        if value < bands.p3 {
            (PercentileCategory::BelowThird, BELOW_THIRD_PERCENTILE)
        } else if value < bands.p10 {
            (PercentileCategory::BelowTenth, BELOW_TENTH_PERCENTILE)
        } else if value > bands.p97 {
            (
                PercentileCategory::AboveNinetySeventh,
                ABOVE_NINETY_SEVENTH_PERCENTILE,
            )
        } else if value > bands.p90 {
            (PercentileCategory::AboveNinetieth, ABOVE_NINETIETH_PERCENTILE)
        } else {
            (PercentileCategory::Normal, Self::normal_range_rank(value, bands))
        }
    }

    /// Approximate z-score from the 10th-90th spread
    #[must_use]
    pub fn approximate_zscore(value: f64, bands: &PercentileBands) -> f64 {
        let standard_deviation = (bands.p90 - bands.p10) / P10_P90_STANDARD_DEVIATIONS;
        if standard_deviation == 0.0 {
            return 0.0;
        }
        (value - bands.p50) / standard_deviation
    }

    /// Piecewise-linear rank inside the 10th-90th range, rounded to a whole number
    fn normal_range_rank(value: f64, bands: &PercentileBands) -> f64 {
        let (base, low, high) = if value <= bands.p50 {
            (10.0, bands.p10, bands.p50)
        } else {
            (50.0, bands.p50, bands.p90)
        };

        let width = high - low;
        if width == 0.0 {
            return 50.0;
        }

        ((value - low) / width).mul_add(NORMAL_HALF_SPAN, base).round()
    }
}
