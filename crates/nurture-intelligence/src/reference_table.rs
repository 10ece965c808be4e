// ABOUTME: Embedded weight-for-age and length-for-age percentile anchors by sex
// ABOUTME: Provides anchor lookup and linear interpolation of the five percentile bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Population reference anchors for infant growth.
//!
//! The table is a small set of anchor ages (0 to 24 months) approximating the
//! WHO child growth standards. Values between anchors are linearly
//! interpolated per band. This is not an LMS model and carries no clinical
//! accuracy guarantee.
//!
//! Both percentile classification and chart overlays read from this one table.

use nurture_core::models::{ReferenceMetric, Sex};
use serde::{Deserialize, Serialize};

/// Percentile band values at one anchor age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceAnchor {
    /// Anchor age in whole months
    pub age_months: u32,
    /// 3rd percentile value
    pub p3: f64,
    /// 10th percentile value
    pub p10: f64,
    /// 50th percentile (median) value
    pub p50: f64,
    /// 90th percentile value
    pub p90: f64,
    /// 97th percentile value
    pub p97: f64,
}

impl ReferenceAnchor {
    const fn new(age_months: u32, p3: f64, p10: f64, p50: f64, p90: f64, p97: f64) -> Self {
        Self {
            age_months,
            p3,
            p10,
            p50,
            p90,
            p97,
        }
    }

    /// The five band values at this anchor
    #[must_use]
    pub const fn bands(&self) -> PercentileBands {
        PercentileBands {
            p3: self.p3,
            p10: self.p10,
            p50: self.p50,
            p90: self.p90,
            p97: self.p97,
        }
    }
}

/// The five reference curve values at a single age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileBands {
    /// 3rd percentile
    pub p3: f64,
    /// 10th percentile
    pub p10: f64,
    /// 50th percentile
    pub p50: f64,
    /// 90th percentile
    pub p90: f64,
    /// 97th percentile
    pub p97: f64,
}

impl PercentileBands {
    /// Interpolate each band independently toward `upper` by `ratio`
    #[must_use]
    pub fn lerp(&self, upper: &Self, ratio: f64) -> Self {
        Self {
            p3: (upper.p3 - self.p3).mul_add(ratio, self.p3),
            p10: (upper.p10 - self.p10).mul_add(ratio, self.p10),
            p50: (upper.p50 - self.p50).mul_add(ratio, self.p50),
            p90: (upper.p90 - self.p90).mul_add(ratio, self.p90),
            p97: (upper.p97 - self.p97).mul_add(ratio, self.p97),
        }
    }

    /// True when p3 <= p10 <= p50 <= p90 <= p97
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.p3 <= self.p10 && self.p10 <= self.p50 && self.p50 <= self.p90 && self.p90 <= self.p97
    }
}

// Weight-for-age (kg)
const MALE_WEIGHT: [ReferenceAnchor; 9] = [
    ReferenceAnchor::new(0, 2.5, 2.8, 3.3, 3.9, 4.3),
    ReferenceAnchor::new(1, 3.4, 3.8, 4.5, 5.3, 5.7),
    ReferenceAnchor::new(2, 4.4, 4.8, 5.6, 6.5, 7.0),
    ReferenceAnchor::new(3, 5.1, 5.6, 6.4, 7.3, 7.8),
    ReferenceAnchor::new(6, 6.4, 6.9, 7.9, 8.9, 9.5),
    ReferenceAnchor::new(9, 7.2, 7.8, 8.9, 10.0, 10.6),
    ReferenceAnchor::new(12, 7.8, 8.4, 9.6, 10.9, 11.5),
    ReferenceAnchor::new(18, 8.9, 9.5, 10.9, 12.4, 13.2),
    ReferenceAnchor::new(24, 9.8, 10.5, 12.2, 13.8, 14.7),
];

const FEMALE_WEIGHT: [ReferenceAnchor; 9] = [
    ReferenceAnchor::new(0, 2.4, 2.7, 3.2, 3.7, 4.2),
    ReferenceAnchor::new(1, 3.2, 3.5, 4.2, 4.9, 5.4),
    ReferenceAnchor::new(2, 4.0, 4.4, 5.1, 6.0, 6.5),
    ReferenceAnchor::new(3, 4.6, 5.0, 5.8, 6.8, 7.4),
    ReferenceAnchor::new(6, 5.8, 6.3, 7.3, 8.5, 9.2),
    ReferenceAnchor::new(9, 6.6, 7.1, 8.2, 9.6, 10.4),
    ReferenceAnchor::new(12, 7.1, 7.7, 8.9, 10.4, 11.3),
    ReferenceAnchor::new(18, 8.2, 8.8, 10.2, 11.9, 12.9),
    ReferenceAnchor::new(24, 9.2, 9.9, 11.5, 13.4, 14.6),
];

// Length/height-for-age (cm)
const MALE_HEIGHT: [ReferenceAnchor; 9] = [
    ReferenceAnchor::new(0, 46.3, 47.5, 49.9, 52.3, 53.4),
    ReferenceAnchor::new(1, 51.1, 52.3, 54.7, 57.1, 58.4),
    ReferenceAnchor::new(2, 54.7, 56.0, 58.4, 60.9, 62.2),
    ReferenceAnchor::new(3, 57.6, 59.0, 61.4, 63.9, 65.3),
    ReferenceAnchor::new(6, 63.6, 65.0, 67.6, 70.1, 71.6),
    ReferenceAnchor::new(9, 67.7, 69.2, 72.0, 74.7, 76.2),
    ReferenceAnchor::new(12, 71.3, 72.8, 75.7, 78.6, 80.2),
    ReferenceAnchor::new(18, 77.2, 78.9, 82.3, 85.6, 87.3),
    ReferenceAnchor::new(24, 82.1, 84.1, 87.8, 91.5, 93.6),
];

const FEMALE_HEIGHT: [ReferenceAnchor; 9] = [
    ReferenceAnchor::new(0, 45.6, 46.8, 49.1, 51.5, 52.7),
    ReferenceAnchor::new(1, 50.0, 51.2, 53.7, 56.2, 57.4),
    ReferenceAnchor::new(2, 53.2, 54.5, 57.1, 59.6, 60.9),
    ReferenceAnchor::new(3, 55.8, 57.1, 59.8, 62.4, 63.8),
    ReferenceAnchor::new(6, 61.5, 63.0, 65.7, 68.5, 70.0),
    ReferenceAnchor::new(9, 65.6, 67.2, 70.1, 73.1, 74.7),
    ReferenceAnchor::new(12, 69.2, 70.8, 74.0, 77.1, 78.9),
    ReferenceAnchor::new(18, 75.2, 77.0, 80.7, 84.4, 86.2),
    ReferenceAnchor::new(24, 80.3, 82.3, 86.4, 90.4, 92.5),
];

/// Lookup and interpolation over the embedded reference anchors
pub struct ReferenceTable;

impl ReferenceTable {
    /// Anchor sequence for a metric and sex, ascending by age
    #[must_use]
    pub const fn anchors(metric: ReferenceMetric, sex: Sex) -> &'static [ReferenceAnchor] {
        match (metric, sex) {
            (ReferenceMetric::Weight, Sex::Male) => &MALE_WEIGHT,
            (ReferenceMetric::Weight, Sex::Female) => &FEMALE_WEIGHT,
            (ReferenceMetric::Height, Sex::Male) => &MALE_HEIGHT,
            (ReferenceMetric::Height, Sex::Female) => &FEMALE_HEIGHT,
        }
    }

    /// Interpolated percentile bands at `age_months`
    ///
    /// Ages outside the table use the first or last anchor pair and extend
    /// that segment linearly.
    #[must_use]
    pub fn bands_at(metric: ReferenceMetric, sex: Sex, age_months: f64) -> PercentileBands {
        let (lower, upper) = Self::bracket(Self::anchors(metric, sex), age_months);

        let span = f64::from(upper.age_months - lower.age_months);
        let ratio = if span == 0.0 {
            0.0
        } else {
            (age_months - f64::from(lower.age_months)) / span
        };

        lower.bands().lerp(&upper.bands(), ratio)
    }

    /// Find the anchor pair bracketing `age_months`, falling back to the edge pairs
    fn bracket(anchors: &[ReferenceAnchor], age_months: f64) -> (ReferenceAnchor, ReferenceAnchor) {
        let last_pair = anchors.len().saturating_sub(2);
        let index = anchors
            .windows(2)
            .position(|pair| age_months <= f64::from(pair[1].age_months))
            .unwrap_or(last_pair);

        (anchors[index], anchors[index + 1])
    }
}
