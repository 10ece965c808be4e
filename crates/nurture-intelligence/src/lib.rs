// ABOUTME: Infant growth analytics engine for the Nurture platform
// ABOUTME: Reference tables, age conversion, percentiles, trends, and insight aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nurture Intelligence
//!
//! Pure computation over growth records. Nothing here performs I/O; every
//! result is recomputed from the records passed in.
//!
//! ## Modules
//!
//! - **reference_table**: Embedded percentile anchors and band interpolation
//! - **age**: Birth date to whole months of age
//! - **percentile**: Percentile rank, approximate z-score, and category
//! - **trend_estimator**: Direction, rate, confidence, and predictions
//! - **insights**: Alerts and recommendations for a subject
//! - **curves**: Monthly reference series for chart overlays

/// Age-in-months calculation
pub mod age;

/// Analytics configuration and message templates
pub mod config;

/// Reference curve series for charting
pub mod curves;

/// Insight aggregation
pub mod insights;

/// Percentile interpolation
pub mod percentile;

/// Embedded reference anchors
pub mod reference_table;

/// Least-squares regression
pub mod statistical_analysis;

/// Trend estimation
pub mod trend_estimator;

pub use age::AgeCalculator;
pub use config::GrowthAnalyticsConfig;
pub use curves::{reference_curve, ReferenceCurvePoint};
pub use insights::{
    AlertLevel, AnalyticsInsights, GrowthAlert, GrowthInsightGenerator, SubjectInsights,
};
pub use percentile::{GrowthPercentile, PercentileCategory, PercentileInterpolator};
pub use reference_table::{PercentileBands, ReferenceAnchor, ReferenceTable};
pub use statistical_analysis::{RegressionResult, StatisticalAnalyzer};
pub use trend_estimator::{TrendAnalysis, TrendDirection, TrendEstimator, TrendPredictions};

/// Round to a fixed number of decimal places, half away from zero
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
