// ABOUTME: Ordinary least-squares regression of a value series against its sample index
// ABOUTME: Supplies the slope and intercept used by growth trend estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Linear regression results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (change per sample)
    pub slope: f64,
    /// Y-intercept of the regression line at index 0
    pub intercept: f64,
    /// Number of samples fitted
    pub sample_count: usize,
}

/// Regression over evenly indexed samples
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Fit `value = slope * index + intercept` over indices `0..n`
    ///
    /// Elapsed time between samples is ignored; the sample order is the
    /// independent variable. Returns `None` for fewer than two samples.
    /// The slope numerator is computed unfused so a constant series yields
    /// an exact zero slope.
    #[must_use]
    pub fn linear_regression(values: &[f64]) -> Option<RegressionResult> {
        if values.len() < 2 {
            return None;
        }

        let n = values.len() as f64;
        let x_values = (0..values.len()).map(|i| i as f64);

        let sum_x: f64 = x_values.clone().sum();
        let sum_y: f64 = values.iter().sum();
        let sum_xx: f64 = x_values.clone().map(|x| x * x).sum();
        let sum_xy: f64 = x_values.zip(values).map(|(x, y)| x * y).sum();

        // Indices 0..n are distinct, so the denominator is non-zero for n >= 2
        #[allow(clippy::suboptimal_flops)]
        let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
        let intercept = slope.mul_add(-sum_x, sum_y) / n;

        Some(RegressionResult {
            slope,
            intercept,
            sample_count: values.len(),
        })
    }
}
