// ABOUTME: Common benchmark utilities and fixtures for growth analytics benchmarks
// ABOUTME: Provides deterministic subject and measurement generators for Criterion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;
