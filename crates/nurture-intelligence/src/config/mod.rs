// ABOUTME: Configuration module for nurture-intelligence crate
// ABOUTME: Re-exports growth analytics configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Growth analytics configuration (age, trend, alerts, messages)
pub mod analytics;

pub use analytics::{
    AgeConfig, AlertConfig, AnalyticsMessages, ConfigError, GrowthAnalyticsConfig, TrendConfig,
};
