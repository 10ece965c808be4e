// ABOUTME: Main library entry point for the Nurture growth analytics application layer
// ABOUTME: Wires configuration, logging, record storage, and the analytics service around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nurture Growth
//!
//! Application layer for infant growth analytics. Growth records are read from
//! a [`store::GrowthRecordStore`] and turned into percentile standing, trends,
//! alerts, and recommendations by the engine in [`intelligence`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nurture_growth::intelligence::GrowthAnalyticsConfig;
//! use nurture_growth::services::GrowthAnalyticsService;
//! use nurture_growth::store::InMemoryGrowthStore;
//!
//! # async fn example() -> nurture_growth::errors::AppResult<()> {
//! let store = Arc::new(InMemoryGrowthStore::new());
//! let service = GrowthAnalyticsService::new(store, GrowthAnalyticsConfig::default());
//! let all = service.insights_for_all().await?;
//! println!("{} subjects analysed", all.len());
//! # Ok(())
//! # }
//! ```

/// Environment-driven application configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Growth record storage abstraction and in-memory backend
pub mod store;

/// Analytics services combining storage and the engine
pub mod services;

/// Unified error handling, re-exported from `nurture-core`
pub use nurture_core::errors;

/// Growth data model, re-exported from `nurture-core`
pub use nurture_core::models;

/// Application constants, re-exported from `nurture-core`
pub use nurture_core::constants;

/// Growth analytics engine
pub use nurture_intelligence as intelligence;
