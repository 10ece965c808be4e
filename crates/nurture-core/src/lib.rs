// ABOUTME: Core types and constants for the Nurture growth analytics platform
// ABOUTME: Foundation crate with error handling, growth data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nurture Core
//!
//! Foundation crate providing shared types and constants for the Nurture
//! baby-care platform. Both the analytics engine and the application layer
//! depend on it, so it is kept small and changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Growth records, subjects, and metric identifiers
//! - **constants**: Service names and environment variable keys

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (`GrowthRecord`, `Subject`, `GrowthMetric`)
pub mod models;

/// Application constants organized by domain
pub mod constants;
