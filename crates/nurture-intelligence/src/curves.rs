// ABOUTME: Monthly reference curve series for growth chart overlays
// ABOUTME: Samples the same interpolated bands used by percentile classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::reference_table::ReferenceTable;
use nurture_core::models::{ReferenceMetric, Sex};
use serde::{Deserialize, Serialize};

/// Reference band values at one whole-month age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCurvePoint {
    /// Age in months
    pub age_months: u32,
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

/// One curve point per month from 0 through `max_age_months` inclusive
#[must_use]
pub fn reference_curve(metric: ReferenceMetric, sex: Sex, max_age_months: u32) -> Vec<ReferenceCurvePoint> {
    (0..=max_age_months)
        .map(|age_months| {
            let bands = ReferenceTable::bands_at(metric, sex, f64::from(age_months));
            ReferenceCurvePoint {
                age_months,
                p3: bands.p3,
                p10: bands.p10,
                p50: bands.p50,
                p90: bands.p90,
                p97: bands.p97,
            }
        })
        .collect()
}
