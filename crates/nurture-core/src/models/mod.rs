// ABOUTME: Data model re-exports for the Nurture platform
// ABOUTME: Growth records, subjects, and metric identifiers consumed by the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models shared between the record store and the analytics engine.

/// Growth measurement records and tracked subjects
pub mod growth;

pub use growth::{GrowthMetric, GrowthRecord, ReferenceMetric, Sex, Subject};
