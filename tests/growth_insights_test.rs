// ABOUTME: Tests for growth insight aggregation, alerts, and recommendations
// ABOUTME: Covers empty history, sparse metrics, critical and warning alerts, and batch runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    assert_close, days_after_birth, full_record, init_test_logging, newborn, weight_record,
    weight_series,
};
use nurture_growth::intelligence::config::{AnalyticsMessages, GrowthAnalyticsConfig};
use nurture_growth::intelligence::{
    AlertLevel, GrowthInsightGenerator, PercentileCategory, TrendDirection,
};
use nurture_growth::models::{GrowthMetric, GrowthRecord, Sex};

#[test]
fn test_empty_history_prompts_for_measurements() {
    init_test_logging();
    let subject = newborn(Sex::Female);
    let insights = GrowthInsightGenerator::new().aggregate(&[], &subject);

    assert!(insights.trends.is_empty());
    assert!(insights.percentiles.is_empty());
    assert!(insights.alerts.is_empty());
    assert_eq!(
        insights.recommendations,
        vec![AnalyticsMessages::default().empty_history]
    );
}

#[test]
fn test_median_newborn_gets_reassurance() {
    init_test_logging();
    let subject = newborn(Sex::Male);
    let insights =
        GrowthInsightGenerator::new().aggregate(&[weight_record(&subject, 0, 3.3)], &subject);

    assert_eq!(insights.percentiles.len(), 1);
    let weight = insights.percentile_for(GrowthMetric::Weight).unwrap();
    assert_eq!(weight.category, PercentileCategory::Normal);
    assert_close(weight.percentile, 50.0);
    assert_close(weight.zscore, 0.0);

    // A single measurement has no trend
    assert!(insights.trends.is_empty());
    assert!(insights.alerts.is_empty());

    let messages = AnalyticsMessages::default();
    assert_eq!(
        insights.recommendations,
        vec![messages.on_track, messages.keep_monitoring]
    );
}

#[test]
fn test_low_weight_raises_critical_alert() {
    init_test_logging();
    let subject = newborn(Sex::Male);
    let insights =
        GrowthInsightGenerator::new().aggregate(&[weight_record(&subject, 0, 2.0)], &subject);

    assert_eq!(
        insights.percentile_for(GrowthMetric::Weight).unwrap().category,
        PercentileCategory::BelowThird
    );
    assert!(insights.has_critical_alerts());
    assert_eq!(insights.alerts.len(), 1);
    assert_eq!(insights.alerts[0].level, AlertLevel::Critical);
    assert_eq!(insights.alerts[0].metric, Some(GrowthMetric::Weight));
    assert_eq!(
        insights.alerts[0].message,
        "Weight is below the 3rd percentile for age"
    );
    assert_eq!(
        insights.recommendations,
        vec!["Consult a pediatrician or healthcare professional about weight".to_owned()]
    );
}

#[test]
fn test_high_weight_raises_warning_without_recommendations() {
    let subject = newborn(Sex::Male);
    let insights =
        GrowthInsightGenerator::new().aggregate(&[weight_record(&subject, 0, 4.5)], &subject);

    assert_eq!(insights.alerts.len(), 1);
    assert_eq!(insights.alerts[0].level, AlertLevel::Warning);
    assert!(!insights.has_critical_alerts());
    assert!(insights.recommendations.is_empty());
}

#[test]
fn test_confident_decline_raises_warning() {
    let subject = newborn(Sex::Male);
    let records = weight_series(&subject, &[3.9, 3.7, 3.5, 3.3]);
    let insights = GrowthInsightGenerator::new().aggregate(&records, &subject);

    let trend = insights.trend_for(GrowthMetric::Weight).unwrap();
    assert_eq!(trend.trend, TrendDirection::Decreasing);
    assert_close(trend.confidence, 0.8);

    assert_eq!(insights.alerts.len(), 1);
    assert_eq!(insights.alerts[0].level, AlertLevel::Warning);
    assert_eq!(
        insights.alerts[0].message,
        "Weight has been decreasing across recent measurements"
    );
    assert!(insights.recommendations.is_empty());
}

#[test]
fn test_decline_at_threshold_confidence_is_not_alerted() {
    let subject = newborn(Sex::Male);
    let records = weight_series(&subject, &[3.7, 3.5, 3.3]);
    let insights = GrowthInsightGenerator::new().aggregate(&records, &subject);

    let trend = insights.trend_for(GrowthMetric::Weight).unwrap();
    assert_eq!(trend.trend, TrendDirection::Decreasing);
    assert_close(trend.confidence, 0.6);
    assert!(insights.alerts.is_empty());
    assert_eq!(insights.recommendations.len(), 2);
}

#[test]
fn test_head_circumference_gets_trend_but_no_percentile() {
    let subject = newborn(Sex::Female);
    let records = vec![
        full_record(&subject, 0, 3.2, 49.1, 34.0),
        full_record(&subject, 30, 4.2, 53.7, 36.5),
        full_record(&subject, 61, 5.1, 57.1, 38.3),
    ];
    let insights = GrowthInsightGenerator::new().aggregate(&records, &subject);

    let percentile_metrics: Vec<GrowthMetric> =
        insights.percentiles.iter().map(|p| p.metric).collect();
    assert_eq!(
        percentile_metrics,
        vec![GrowthMetric::Weight, GrowthMetric::Height]
    );

    let trend_metrics: Vec<GrowthMetric> = insights.trends.iter().map(|t| t.metric).collect();
    assert_eq!(
        trend_metrics,
        vec![
            GrowthMetric::Weight,
            GrowthMetric::Height,
            GrowthMetric::HeadCircumference
        ]
    );
    assert_eq!(
        insights.trend_for(GrowthMetric::HeadCircumference).unwrap().trend,
        TrendDirection::Increasing
    );
}

#[test]
fn test_metric_missing_on_latest_record_is_omitted() {
    let subject = newborn(Sex::Male);
    let records = vec![
        GrowthRecord::new(subject.id, days_after_birth(&subject, 0))
            .with_weight(3.3)
            .with_height(49.9),
        GrowthRecord::new(subject.id, days_after_birth(&subject, 10)).with_height(51.0),
    ];
    let insights = GrowthInsightGenerator::new().aggregate(&records, &subject);

    assert!(insights.percentile_for(GrowthMetric::Weight).is_none());
    assert!(insights.trend_for(GrowthMetric::Weight).is_none());
    assert!(insights.percentile_for(GrowthMetric::Height).is_some());
    assert!(insights.trend_for(GrowthMetric::Height).is_some());
}

#[test]
fn test_zero_is_a_measurement_not_an_absence() {
    let subject = newborn(Sex::Male);
    let insights =
        GrowthInsightGenerator::new().aggregate(&[weight_record(&subject, 0, 0.0)], &subject);
    assert_eq!(
        insights.percentile_for(GrowthMetric::Weight).unwrap().category,
        PercentileCategory::BelowThird
    );
}

#[test]
fn test_non_finite_values_are_skipped() {
    init_test_logging();
    let subject = newborn(Sex::Male);

    let latest_nan = vec![
        weight_record(&subject, 0, 3.3),
        weight_record(&subject, 3, f64::NAN),
    ];
    let insights = GrowthInsightGenerator::new().aggregate(&latest_nan, &subject);
    assert!(insights.percentiles.is_empty());
    assert!(insights.trends.is_empty());

    let history_nan = vec![
        weight_record(&subject, 0, f64::INFINITY),
        weight_record(&subject, 3, 3.4),
        weight_record(&subject, 6, 3.5),
    ];
    let insights = GrowthInsightGenerator::new().aggregate(&history_nan, &subject);
    let trend = insights.trend_for(GrowthMetric::Weight).unwrap();
    assert_close(trend.confidence, 0.4);
    assert!(trend.change_rate.is_finite());
}

#[test]
fn test_record_order_does_not_matter() {
    let subject = newborn(Sex::Female);
    let records = vec![
        full_record(&subject, 0, 3.2, 49.1, 34.0),
        full_record(&subject, 30, 4.2, 53.7, 36.5),
        full_record(&subject, 61, 5.1, 57.1, 38.3),
    ];
    let mut shuffled = records.clone();
    shuffled.reverse();

    let generator = GrowthInsightGenerator::new();
    let sorted_insights = generator.aggregate(&records, &subject);
    assert_eq!(sorted_insights, generator.aggregate(&shuffled, &subject));
    // Idempotent across repeated calls
    assert_eq!(sorted_insights, generator.aggregate(&records, &subject));
}

#[test]
fn test_measurement_before_birth_uses_birth_bands() {
    init_test_logging();
    let subject = newborn(Sex::Male);
    let insights =
        GrowthInsightGenerator::new().aggregate(&[weight_record(&subject, -5, 3.3)], &subject);
    assert_close(
        insights.percentile_for(GrowthMetric::Weight).unwrap().percentile,
        50.0,
    );
}

#[test]
fn test_custom_messages() {
    let config = GrowthAnalyticsConfig {
        messages: AnalyticsMessages {
            below_third_percentile: "low {metric}".to_owned(),
            consult_professional: "call the clinic about {metric}".to_owned(),
            ..AnalyticsMessages::default()
        },
        ..GrowthAnalyticsConfig::default()
    };
    let subject = newborn(Sex::Male);
    let insights = GrowthInsightGenerator::with_config(config)
        .aggregate(&[weight_record(&subject, 0, 2.0)], &subject);

    assert_eq!(insights.alerts[0].message, "Low weight");
    assert_eq!(insights.recommendations, vec!["Call the clinic about weight"]);
}

#[test]
fn test_batch_matches_sequential_results() {
    let generator = GrowthInsightGenerator::new();
    let subjects: Vec<_> = (0..16)
        .map(|i| {
            let subject = newborn(if i % 2 == 0 { Sex::Male } else { Sex::Female });
            let base = 2.0 + f64::from(i) * 0.15;
            let records = weight_series(&subject, &[base, base + 0.2, base + 0.4]);
            (subject, records)
        })
        .collect();

    let batch = generator.aggregate_batch(&subjects);
    assert_eq!(batch.len(), subjects.len());
    for ((subject, records), result) in subjects.iter().zip(&batch) {
        assert_eq!(result.subject_id, subject.id);
        assert_eq!(result.insights, generator.aggregate(records, subject));
    }
}

#[test]
fn test_insights_serialize_with_wire_labels() {
    let subject = newborn(Sex::Male);
    let records = vec![
        weight_record(&subject, 0, 2.3),
        weight_record(&subject, 3, 2.1),
        weight_record(&subject, 6, 1.9),
        weight_record(&subject, 9, 1.7),
    ];
    let insights = GrowthInsightGenerator::new().aggregate(&records, &subject);
    let json = serde_json::to_value(&insights).unwrap();

    assert_eq!(json["percentiles"][0]["category"], "below_3rd");
    assert_eq!(json["trends"][0]["trend"], "decreasing");
    assert_eq!(json["alerts"][0]["level"], "critical");
    assert_eq!(json["alerts"][0]["metric"], "weight");
    assert_eq!(json["alerts"][1]["level"], "warning");
    assert_eq!(json["recommendations"].as_array().unwrap().len(), 1);
}
