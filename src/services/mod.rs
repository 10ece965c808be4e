// ABOUTME: Service layer combining record storage with the growth analytics engine
// ABOUTME: Entry points used by the CLI and by embedding applications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Growth analytics service
pub mod growth_analytics;

pub use growth_analytics::{ChartMeasurement, GrowthAnalyticsService, ReferenceOverlay};
