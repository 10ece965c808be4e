// ABOUTME: Growth measurement models for infant weight, height, and head circumference
// ABOUTME: GrowthRecord, Subject, Sex, GrowthMetric, and ReferenceMetric definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Biological sex used to select population reference curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male reference curves
    Male,
    /// Female reference curves
    Female,
}

impl Sex {
    /// Lowercase identifier used in serialized data and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" | "boy" => Ok(Self::Male),
            "female" | "f" | "girl" => Ok(Self::Female),
            other => Err(format!("unknown sex '{other}', expected male or female")),
        }
    }
}

/// A growth metric tracked on a [`GrowthRecord`]
///
/// Declaration order is the order metrics appear in analytics output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthMetric {
    /// Body weight in kilograms
    Weight,
    /// Body length/height in centimeters
    Height,
    /// Head circumference in centimeters
    HeadCircumference,
}

impl GrowthMetric {
    /// All tracked metrics in output order
    pub const ALL: [Self; 3] = [Self::Weight, Self::Height, Self::HeadCircumference];

    /// Human-readable label for messages
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::HeadCircumference => "head circumference",
        }
    }

    /// Measurement unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Height | Self::HeadCircumference => "cm",
        }
    }

    /// The reference curve family for this metric, if one exists
    ///
    /// Head circumference is tracked but has no embedded reference table.
    #[must_use]
    pub const fn reference_metric(self) -> Option<ReferenceMetric> {
        match self {
            Self::Weight => Some(ReferenceMetric::Weight),
            Self::Height => Some(ReferenceMetric::Height),
            Self::HeadCircumference => None,
        }
    }
}

impl fmt::Display for GrowthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for GrowthMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "weight" => Ok(Self::Weight),
            "height" | "length" => Ok(Self::Height),
            "head_circumference" | "head" => Ok(Self::HeadCircumference),
            other => Err(format!("unknown growth metric '{other}'")),
        }
    }
}

/// Metrics that have population reference curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceMetric {
    /// Weight-for-age
    Weight,
    /// Length/height-for-age
    Height,
}

impl From<ReferenceMetric> for GrowthMetric {
    fn from(metric: ReferenceMetric) -> Self {
        match metric {
            ReferenceMetric::Weight => Self::Weight,
            ReferenceMetric::Height => Self::Height,
        }
    }
}

impl FromStr for ReferenceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let metric: GrowthMetric = s.parse()?;
        metric
            .reference_metric()
            .ok_or_else(|| format!("no reference curves exist for {metric}"))
    }
}

/// The child whose growth is being tracked
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use nurture_core::models::{Sex, Subject};
///
/// let birth = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let subject = Subject::new(birth, Sex::Female).with_name("Ada");
/// assert_eq!(subject.name.as_deref(), Some("Ada"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique identifier used to key growth records
    pub id: Uuid,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Sex used for reference curve selection
    pub sex: Sex,
}

impl Subject {
    /// Create a subject with a fresh identifier
    #[must_use]
    pub fn new(birth_date: NaiveDate, sex: Sex) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            birth_date,
            sex,
        }
    }

    /// Attach a display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A single growth measurement session
///
/// Any subset of the three metrics may be present. An absent metric (`None`)
/// is distinct from a measured value of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRecord {
    /// Unique record identifier
    pub id: Uuid,
    /// Subject this record belongs to
    pub subject_id: Uuid,
    /// When the measurement was taken
    pub date: DateTime<Utc>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Length/height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Head circumference in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_circumference: Option<f64>,
    /// Free-form caregiver note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl GrowthRecord {
    /// Create an empty record for a subject at the given time
    #[must_use]
    pub fn new(subject_id: Uuid, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject_id,
            date,
            weight: None,
            height: None,
            head_circumference: None,
            note: None,
        }
    }

    /// Set the weight in kilograms
    #[must_use]
    pub fn with_weight(mut self, kg: f64) -> Self {
        self.weight = Some(kg);
        self
    }

    /// Set the height in centimeters
    #[must_use]
    pub fn with_height(mut self, cm: f64) -> Self {
        self.height = Some(cm);
        self
    }

    /// Set the head circumference in centimeters
    #[must_use]
    pub fn with_head_circumference(mut self, cm: f64) -> Self {
        self.head_circumference = Some(cm);
        self
    }

    /// Attach a note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Value recorded for `metric`, if present
    #[must_use]
    pub const fn value(&self, metric: GrowthMetric) -> Option<f64> {
        match metric {
            GrowthMetric::Weight => self.weight,
            GrowthMetric::Height => self.height,
            GrowthMetric::HeadCircumference => self.head_circumference,
        }
    }
}
