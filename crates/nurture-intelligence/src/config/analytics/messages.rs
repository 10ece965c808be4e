// ABOUTME: Message templates for growth alerts and caregiver recommendations
// ABOUTME: Templates use a {metric} placeholder filled with the metric's display name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nurture_core::models::GrowthMetric;
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the metric display name
const METRIC_PLACEHOLDER: &str = "{metric}";

/// Template messages for growth alerts and recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsMessages {
    /// Sole recommendation when no measurements exist yet
    pub empty_history: String,
    /// Critical alert for a measurement below the 3rd percentile
    pub below_third_percentile: String,
    /// Warning for a measurement above the 97th percentile
    pub above_ninety_seventh_percentile: String,
    /// Warning for a confidently decreasing trend
    pub declining_trend: String,
    /// Recommendation attached to each critical alert
    pub consult_professional: String,
    /// First reassurance message when nothing was flagged
    pub on_track: String,
    /// Second reassurance message when nothing was flagged
    pub keep_monitoring: String,
}

impl AnalyticsMessages {
    /// Fill a template with the metric name, capitalizing the first letter
    #[must_use]
    pub fn render(template: &str, metric: GrowthMetric) -> String {
        capitalize_first(&template.replace(METRIC_PLACEHOLDER, metric.display_name()))
    }
}

impl Default for AnalyticsMessages {
    fn default() -> Self {
        Self {
            empty_history: "Add growth measurements to start tracking your baby's growth".into(),
            below_third_percentile: "{metric} is below the 3rd percentile for age".into(),
            above_ninety_seventh_percentile: "{metric} is above the 97th percentile for age"
                .into(),
            declining_trend: "{metric} has been decreasing across recent measurements".into(),
            consult_professional: "Consult a pediatrician or healthcare professional about {metric}"
                .into(),
            on_track: "Growth is tracking within the expected range for age".into(),
            keep_monitoring: "Keep recording measurements regularly to monitor progress"
                .to_owned(),
        }
    }
}

/// Uppercase the first character of a string
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
