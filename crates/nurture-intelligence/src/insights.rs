// ABOUTME: Growth insight aggregation combining percentiles, trends, alerts, and recommendations
// ABOUTME: Pure function of growth records and subject metadata, with parallel batch support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight generation for a subject's growth history

use crate::age::AgeCalculator;
use crate::config::{AnalyticsMessages, GrowthAnalyticsConfig};
use crate::percentile::{GrowthPercentile, PercentileCategory, PercentileInterpolator};
use crate::trend_estimator::{TrendAnalysis, TrendDirection, TrendEstimator};
use nurture_core::models::{GrowthMetric, GrowthRecord, Subject};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// Severity of a growth alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// Worth watching
    Warning,
    /// Needs professional attention
    Critical,
}

/// An alert raised from percentile standing or trend direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthAlert {
    /// Severity
    pub level: AlertLevel,
    /// Caregiver-facing message
    pub message: String,
    /// Metric the alert concerns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<GrowthMetric>,
}

/// Caller-facing analytics bundle for one subject
///
/// Computed on every request and never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsInsights {
    /// Trends for metrics with at least two finite measurements
    pub trends: Vec<TrendAnalysis>,
    /// Percentile standing for reference metrics on the latest record
    pub percentiles: Vec<GrowthPercentile>,
    /// Caregiver recommendations
    pub recommendations: Vec<String>,
    /// Alerts raised
    pub alerts: Vec<GrowthAlert>,
}

impl AnalyticsInsights {
    /// Whether any critical alert was raised
    #[must_use]
    pub fn has_critical_alerts(&self) -> bool {
        self.alerts
            .iter()
            .any(|alert| alert.level == AlertLevel::Critical)
    }

    /// Percentile entry for `metric`, if computed
    #[must_use]
    pub fn percentile_for(&self, metric: GrowthMetric) -> Option<&GrowthPercentile> {
        self.percentiles.iter().find(|p| p.metric == metric)
    }

    /// Trend entry for `metric`, if computed
    #[must_use]
    pub fn trend_for(&self, metric: GrowthMetric) -> Option<&TrendAnalysis> {
        self.trends.iter().find(|t| t.metric == metric)
    }
}

/// Insights for one subject in a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectInsights {
    /// Subject identifier
    pub subject_id: Uuid,
    /// Computed insights
    pub insights: AnalyticsInsights,
}

/// Aggregates percentile, trend, and alert analysis into insights
#[derive(Debug, Clone, Default)]
pub struct GrowthInsightGenerator {
    config: GrowthAnalyticsConfig,
}

impl GrowthInsightGenerator {
    /// Create a generator with default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom config
    #[must_use]
    pub const fn with_config(config: GrowthAnalyticsConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &GrowthAnalyticsConfig {
        &self.config
    }

    /// Build insights from a subject's growth records
    ///
    /// Records may arrive in any order. Metrics absent from the latest record,
    /// or holding non-finite values, are left out entirely.
    #[must_use]
    pub fn aggregate(&self, records: &[GrowthRecord], subject: &Subject) -> AnalyticsInsights {
        let messages = &self.config.messages;

        if records.is_empty() {
            debug!(subject_id = %subject.id, "No growth records, returning empty insights");
            return AnalyticsInsights {
                recommendations: vec![messages.empty_history.clone()],
                ..AnalyticsInsights::default()
            };
        }

        let mut history: Vec<&GrowthRecord> = records.iter().collect();
        history.sort_by_key(|record| record.date);
        let Some(latest) = history.last() else {
            return AnalyticsInsights::default();
        };

        let age_months =
            AgeCalculator::new(self.config.age).age_in_months(subject.birth_date, latest.date);
        let estimator = TrendEstimator::new(self.config.trend);

        let mut percentiles = Vec::new();
        let mut trends = Vec::new();

        for metric in GrowthMetric::ALL {
            let Some(value) = latest.value(metric) else {
                continue;
            };
            if !value.is_finite() {
                warn!(
                    subject_id = %subject.id,
                    record_id = %latest.id,
                    metric = %metric,
                    "Skipping non-finite measurement on latest record"
                );
                continue;
            }

            if let Some(reference) = metric.reference_metric() {
                percentiles.push(PercentileInterpolator::percentile_of(
                    f64::from(age_months),
                    value,
                    subject.sex,
                    reference,
                ));
            }

            let series: Vec<f64> = history
                .iter()
                .filter_map(|record| record.value(metric))
                .filter(|value| value.is_finite())
                .collect();
            if series.len() >= 2 {
                trends.push(estimator.trend_of(&series, metric));
            }
        }

        let alerts = self.alerts(&percentiles, &trends);
        let recommendations = self.recommendations(&alerts);

        debug!(
            subject_id = %subject.id,
            records = records.len(),
            age_months,
            percentiles = percentiles.len(),
            trends = trends.len(),
            alerts = alerts.len(),
            "Growth insights aggregated"
        );

        AnalyticsInsights {
            trends,
            percentiles,
            recommendations,
            alerts,
        }
    }

    /// Aggregate many subjects in parallel, preserving input order
    #[must_use]
    pub fn aggregate_batch(&self, subjects: &[(Subject, Vec<GrowthRecord>)]) -> Vec<SubjectInsights> {
        subjects
            .par_iter()
            .map(|(subject, records)| SubjectInsights {
                subject_id: subject.id,
                insights: self.aggregate(records, subject),
            })
            .collect()
    }

    /// Alerts from percentile categories, then from confidently decreasing trends
    fn alerts(&self, percentiles: &[GrowthPercentile], trends: &[TrendAnalysis]) -> Vec<GrowthAlert> {
        let messages = &self.config.messages;
        let mut alerts = Vec::new();

        for percentile in percentiles {
            let (level, template) = match percentile.category {
                PercentileCategory::BelowThird => {
                    (AlertLevel::Critical, &messages.below_third_percentile)
                }
                PercentileCategory::AboveNinetySeventh => (
                    AlertLevel::Warning,
                    &messages.above_ninety_seventh_percentile,
                ),
                PercentileCategory::BelowTenth
                | PercentileCategory::Normal
                | PercentileCategory::AboveNinetieth => continue,
            };
            alerts.push(GrowthAlert {
                level,
                message: AnalyticsMessages::render(template, percentile.metric),
                metric: Some(percentile.metric),
            });
        }

        for trend in trends {
            if trend.trend == TrendDirection::Decreasing
                && trend.confidence > self.config.alerts.decline_confidence_threshold
            {
                alerts.push(GrowthAlert {
                    level: AlertLevel::Warning,
                    message: AnalyticsMessages::render(&messages.declining_trend, trend.metric),
                    metric: Some(trend.metric),
                });
            }
        }

        alerts
    }

    /// One consultation suggestion per critical alert, or reassurance when nothing was flagged
    fn recommendations(&self, alerts: &[GrowthAlert]) -> Vec<String> {
        let messages = &self.config.messages;

        if alerts.is_empty() {
            return vec![messages.on_track.clone(), messages.keep_monitoring.clone()];
        }

        alerts
            .iter()
            .filter(|alert| alert.level == AlertLevel::Critical)
            .filter_map(|alert| alert.metric)
            .map(|metric| AnalyticsMessages::render(&messages.consult_professional, metric))
            .collect()
    }
}
