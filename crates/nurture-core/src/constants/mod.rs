// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names and environment variable keys for the Nurture platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Growth analytics service name
    pub const NURTURE_GROWTH: &str = "nurture-growth";
    /// Command-line tool name
    pub const NURTURE_CLI: &str = "nurture-cli";
}

/// Environment variable keys
pub mod env_vars {
    /// Log level / filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include source file and line in log lines when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Include thread ids and names in log lines when set
    pub const LOG_INCLUDE_THREAD: &str = "LOG_INCLUDE_THREAD";
    /// Emit span open/close events when set
    pub const LOG_INCLUDE_SPANS: &str = "LOG_INCLUDE_SPANS";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Default dataset file for the CLI
    pub const DATA_FILE: &str = "NURTURE_DATA_FILE";
    /// Trend stable-band threshold (units per data point)
    pub const TREND_STABLE_THRESHOLD: &str = "NURTURE_TREND_STABLE_THRESHOLD";
    /// Number of data points at which trend confidence saturates
    pub const TREND_FULL_CONFIDENCE_POINTS: &str = "NURTURE_TREND_FULL_CONFIDENCE_POINTS";
    /// Minimum confidence for a decreasing trend to raise an alert
    pub const ALERT_DECLINE_CONFIDENCE: &str = "NURTURE_ALERT_DECLINE_CONFIDENCE";
    /// Days per month divisor used by the age calculator
    pub const DAYS_PER_MONTH: &str = "NURTURE_DAYS_PER_MONTH";
}

/// Defaults for the growth analytics engine
pub mod growth_defaults {
    /// Fixed day-per-month divisor for age-in-months
    pub const DAYS_PER_MONTH: f64 = 30.44;
    /// Absolute slope below which a trend is stable
    pub const TREND_STABLE_THRESHOLD: f64 = 0.1;
    /// Data points needed for full trend confidence
    pub const TREND_FULL_CONFIDENCE_POINTS: usize = 5;
    /// Prediction horizons in months
    pub const PREDICTION_HORIZONS_MONTHS: [u32; 3] = [1, 3, 6];
    /// Confidence above which a decreasing trend raises a warning
    pub const DECLINE_ALERT_CONFIDENCE: f64 = 0.6;
    /// Default chart overlay span in months
    pub const CURVE_MAX_AGE_MONTHS: u32 = 24;
}
