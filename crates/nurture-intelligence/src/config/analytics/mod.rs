// ABOUTME: Growth analytics configuration with defaults, environment overrides, and validation
// ABOUTME: Covers the age divisor, trend thresholds, alert confidence, and message templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Growth Analytics Configuration
//!
//! Defaults reproduce the reference behavior exactly; environment variables
//! may override the numeric thresholds for experimentation.

/// Configuration error types
pub mod error;
/// Alert and recommendation message templates
pub mod messages;

pub use error::ConfigError;
pub use messages::AnalyticsMessages;

use nurture_core::constants::{env_vars, growth_defaults};
use serde::{Deserialize, Serialize};
use std::env;

/// Complete growth analytics configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthAnalyticsConfig {
    /// Age calculation settings
    pub age: AgeConfig,
    /// Trend estimation settings
    pub trend: TrendConfig,
    /// Alert generation settings
    pub alerts: AlertConfig,
    /// Message templates
    pub messages: AnalyticsMessages,
}

/// Age-in-months calculation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeConfig {
    /// Fixed divisor converting elapsed days to months
    pub days_per_month: f64,
}

/// Trend estimation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Slope magnitude (units per data point) at or below which a trend is stable
    pub stable_threshold: f64,
    /// Number of data points at which confidence reaches 1.0
    pub full_confidence_points: usize,
}

/// Alert generation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Confidence a decreasing trend must exceed to raise a warning
    pub decline_confidence_threshold: f64,
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            days_per_month: growth_defaults::DAYS_PER_MONTH,
        }
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            stable_threshold: growth_defaults::TREND_STABLE_THRESHOLD,
            full_confidence_points: growth_defaults::TREND_FULL_CONFIDENCE_POINTS,
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            decline_confidence_threshold: growth_defaults::DECLINE_ALERT_CONFIDENCE,
        }
    }
}

impl GrowthAnalyticsConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its acceptable range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.age.days_per_month.is_finite() || self.age.days_per_month <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "days_per_month must be a positive number",
            ));
        }

        if !self.trend.stable_threshold.is_finite() || self.trend.stable_threshold < 0.0 {
            return Err(ConfigError::InvalidRange(
                "trend stable_threshold must be a non-negative number",
            ));
        }

        if self.trend.full_confidence_points == 0 {
            return Err(ConfigError::InvalidRange(
                "full_confidence_points must be at least 1",
            ));
        }

        if !(0.0..=1.0).contains(&self.alerts.decline_confidence_threshold) {
            return Err(ConfigError::InvalidRange(
                "decline_confidence_threshold must be between 0 and 1",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = env::var(env_vars::DAYS_PER_MONTH) {
            self.age.days_per_month = val.parse().map_err(|_| {
                ConfigError::Parse(format!("Invalid {}", env_vars::DAYS_PER_MONTH))
            })?;
        }

        if let Ok(val) = env::var(env_vars::TREND_STABLE_THRESHOLD) {
            self.trend.stable_threshold = val.parse().map_err(|_| {
                ConfigError::Parse(format!("Invalid {}", env_vars::TREND_STABLE_THRESHOLD))
            })?;
        }

        if let Ok(val) = env::var(env_vars::TREND_FULL_CONFIDENCE_POINTS) {
            self.trend.full_confidence_points = val.parse().map_err(|_| {
                ConfigError::Parse(format!(
                    "Invalid {}",
                    env_vars::TREND_FULL_CONFIDENCE_POINTS
                ))
            })?;
        }

        if let Ok(val) = env::var(env_vars::ALERT_DECLINE_CONFIDENCE) {
            self.alerts.decline_confidence_threshold = val.parse().map_err(|_| {
                ConfigError::Parse(format!("Invalid {}", env_vars::ALERT_DECLINE_CONFIDENCE))
            })?;
        }

        Ok(self)
    }
}
