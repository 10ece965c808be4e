// ABOUTME: Configuration management module for the growth analytics application
// ABOUTME: Environment-only configuration for deployment mode, logging, data file, and analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Nurture Growth
//!
//! All settings come from environment variables. Engine thresholds live in
//! [`GrowthAnalyticsConfig`](crate::intelligence::GrowthAnalyticsConfig) and
//! are loaded as part of [`AppConfig`].

/// Environment and application configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};
