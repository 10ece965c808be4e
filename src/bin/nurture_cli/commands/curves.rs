// ABOUTME: Reference curve command for nurture-cli
// ABOUTME: Prints monthly percentile bands without needing a dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nurture_growth::{
    errors::AppResult,
    intelligence::reference_curve,
    models::{ReferenceMetric, Sex},
};

use crate::helpers::display::print_json;

/// Print reference curves for `metric` and `sex` from month 0 through `max_age_months`
pub fn print(metric: ReferenceMetric, sex: Sex, max_age_months: u32) -> AppResult<()> {
    print_json(&reference_curve(metric, sex, max_age_months))
}
