// ABOUTME: Growth trend estimation with direction, rate, confidence, and short-range predictions
// ABOUTME: Wraps index-based linear regression with the stable band and point-count confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend estimation for one growth metric.
//!
//! `change_rate` is the regression slope in units per data point. It reads as
//! "per month" only when measurements are roughly monthly. Irregular spacing
//! is a known simplification of this estimator.
//!
//! Confidence grows with the number of points (`min(n / 5, 1)` by default) and
//! ignores residual fit quality.

use crate::config::TrendConfig;
use crate::round_to;
use crate::statistical_analysis::StatisticalAnalyzer;
use nurture_core::constants::growth_defaults::PREDICTION_HORIZONS_MONTHS;
use nurture_core::models::GrowthMetric;
use serde::{Deserialize, Serialize};

/// Direction of a metric over recorded history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Slope above the stable band
    Increasing,
    /// Slope below the stable band
    Decreasing,
    /// Slope within the stable band
    Stable,
}

/// Projected values at fixed horizons after the last measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPredictions {
    /// One month ahead
    pub one_month: f64,
    /// Three months ahead
    pub three_months: f64,
    /// Six months ahead
    pub six_months: f64,
}

/// Trend of one metric across a subject's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Metric analyzed
    pub metric: GrowthMetric,
    /// Trend direction
    pub trend: TrendDirection,
    /// Units per data point
    pub change_rate: f64,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    /// Point predictions
    pub predictions: TrendPredictions,
}

impl TrendAnalysis {
    /// Neutral result for series too short to fit
    #[must_use]
    pub const fn neutral(metric: GrowthMetric) -> Self {
        Self {
            metric,
            trend: TrendDirection::Stable,
            change_rate: 0.0,
            confidence: 0.0,
            predictions: TrendPredictions {
                one_month: 0.0,
                three_months: 0.0,
                six_months: 0.0,
            },
        }
    }
}

/// Estimates trends from chronologically ordered values
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendEstimator {
    config: TrendConfig,
}

impl TrendEstimator {
    /// Create an estimator with custom thresholds
    #[must_use]
    pub const fn new(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Trend of `series`, which must be sorted oldest first
    #[must_use]
    pub fn trend_of(&self, series: &[f64], metric: GrowthMetric) -> TrendAnalysis {
        let (Some(regression), Some(&last_value)) =
            (StatisticalAnalyzer::linear_regression(series), series.last())
        else {
            return TrendAnalysis::neutral(metric);
        };

        let change_rate = regression.slope;
        let [one, three, six] = PREDICTION_HORIZONS_MONTHS.map(|months| {
            round_to(change_rate.mul_add(f64::from(months), last_value), 2)
        });

        TrendAnalysis {
            metric,
            trend: self.direction(change_rate),
            change_rate,
            confidence: self.confidence(series.len()),
            predictions: TrendPredictions {
                one_month: one,
                three_months: three,
                six_months: six,
            },
        }
    }

    /// Classify a slope against the stable band
    #[must_use]
    pub fn direction(&self, change_rate: f64) -> TrendDirection {
        if change_rate > self.config.stable_threshold {
            TrendDirection::Increasing
        } else if change_rate < -self.config.stable_threshold {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }

    /// Confidence from the number of points, saturating at 1.0
    #[must_use]
    pub fn confidence(&self, sample_count: usize) -> f64 {
        (sample_count as f64 / self.config.full_confidence_points as f64).min(1.0)
    }
}
