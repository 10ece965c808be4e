// ABOUTME: Re-exports command modules for nurture-cli
// ABOUTME: Provides dataset-backed analytics commands and reference curve output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analytics;
pub mod curves;
