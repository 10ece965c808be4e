// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses deployment mode, log level, dataset location, and analytics overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::env_vars;
use crate::errors::AppResult;
use crate::intelligence::GrowthAnalyticsConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    /// Base level of an `EnvFilter` directive such as `nurture_growth=trace,warn`
    ///
    /// Target-specific entries are ignored; the last bare level wins.
    #[must_use]
    pub fn from_directive(directive: &str) -> Self {
        directive
            .split(',')
            .map(str::trim)
            .rev()
            .find(|part| !part.is_empty() && !part.contains('='))
            .map_or(Self::Info, Self::from_str_or_default)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Base log level
    pub log_level: LogLevel,
    /// Default dataset file for the CLI
    pub data_file: Option<PathBuf>,
    /// Growth analytics engine configuration
    pub analytics: GrowthAnalyticsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if analytics overrides fail to parse or validate
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_directive(&env_var_or(env_vars::RUST_LOG, "info")),
            data_file: env::var(env_vars::DATA_FILE)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            analytics: GrowthAnalyticsConfig::load()?,
        })
    }

    /// Dataset path, preferring an explicit override over the environment
    #[must_use]
    pub fn data_file_or(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| self.data_file.clone())
    }

    /// One-line summary for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} log_level={} data_file={} stable_threshold={} decline_confidence={}",
            self.environment,
            self.log_level,
            self.data_file
                .as_ref()
                .map_or_else(|| "<unset>".to_owned(), |path| path.display().to_string()),
            self.analytics.trend.stable_threshold,
            self.analytics.alerts.decline_confidence_threshold,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
