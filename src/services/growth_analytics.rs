// ABOUTME: Growth analytics service reading subjects and records from a store
// ABOUTME: Produces per-subject insights, batch insights, and chart overlays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    reference_curve, AgeCalculator, AnalyticsInsights, GrowthAnalyticsConfig,
    GrowthInsightGenerator, ReferenceCurvePoint, SubjectInsights,
};
use crate::models::{GrowthMetric, Sex, Subject};
use crate::store::GrowthRecordStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task;
use tracing::{info, instrument};
use uuid::Uuid;

/// A subject's measurement placed on the chart's age axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMeasurement {
    /// Age at measurement in whole months
    pub age_months: u32,
    /// Measured value
    pub value: f64,
}

/// Reference curves for a subject's sex with their measurements overlaid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceOverlay {
    /// Subject identifier
    pub subject_id: Uuid,
    /// Charted metric
    pub metric: GrowthMetric,
    /// Unit of the curve and measurement values
    pub unit: String,
    /// Sex the curves were selected for
    pub sex: Sex,
    /// Monthly reference points
    pub curve: Vec<ReferenceCurvePoint>,
    /// Subject measurements, oldest first
    pub measurements: Vec<ChartMeasurement>,
}

/// Runs the analytics engine over data held in a store
pub struct GrowthAnalyticsService<S> {
    store: Arc<S>,
    generator: GrowthInsightGenerator,
}

impl<S: GrowthRecordStore> GrowthAnalyticsService<S> {
    /// Create a service over `store` with the given engine configuration
    #[must_use]
    pub fn new(store: Arc<S>, config: GrowthAnalyticsConfig) -> Self {
        Self {
            store,
            generator: GrowthInsightGenerator::with_config(config),
        }
    }

    /// Underlying store
    #[must_use]
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Insights for one subject
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the subject does not exist, or any store error
    #[instrument(skip_all, fields(subject_id = %subject_id))]
    pub async fn insights_for(&self, subject_id: Uuid) -> AppResult<AnalyticsInsights> {
        let subject = self.require_subject(subject_id).await?;
        let records = self.store.records_for_subject(subject_id).await?;

        let insights = self.generator.aggregate(&records, &subject);
        info!(
            records = records.len(),
            alerts = insights.alerts.len(),
            critical = insights.has_critical_alerts(),
            "Computed growth insights"
        );
        Ok(insights)
    }

    /// Insights for every subject in the store, ordered by subject id
    ///
    /// # Errors
    ///
    /// Returns any store error, or an internal error if the worker task fails
    #[instrument(skip_all)]
    pub async fn insights_for_all(&self) -> AppResult<Vec<SubjectInsights>> {
        let subjects = self.store.list_subjects().await?;
        let mut batch = Vec::with_capacity(subjects.len());
        for subject in subjects {
            let records = self.store.records_for_subject(subject.id).await?;
            batch.push((subject, records));
        }

        let generator = self.generator.clone();
        let results = task::spawn_blocking(move || generator.aggregate_batch(&batch))
            .await
            .map_err(|e| {
                AppError::internal(format!("Batch aggregation failed: {e}")).with_source(e)
            })?;

        info!(subjects = results.len(), "Computed batch growth insights");
        Ok(results)
    }

    /// Reference curves for the subject's sex with the subject's measurements overlaid
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for metrics without reference curves, `ResourceNotFound`
    /// for unknown subjects, or any store error
    #[instrument(skip_all, fields(subject_id = %subject_id, metric = %metric, max_age_months = max_age_months))]
    pub async fn reference_overlay(
        &self,
        subject_id: Uuid,
        metric: GrowthMetric,
        max_age_months: u32,
    ) -> AppResult<ReferenceOverlay> {
        let Some(reference) = metric.reference_metric() else {
            return Err(AppError::invalid_input(format!(
                "No reference curves exist for {metric}"
            )));
        };

        let subject = self.require_subject(subject_id).await?;
        let records = self.store.records_for_subject(subject_id).await?;
        let ages = AgeCalculator::new(self.generator.config().age);

        let measurements = records
            .iter()
            .filter_map(|record| {
                record
                    .value(metric)
                    .filter(|value| value.is_finite())
                    .map(|value| ChartMeasurement {
                        age_months: ages.age_in_months(subject.birth_date, record.date),
                        value,
                    })
            })
            .collect();

        Ok(ReferenceOverlay {
            subject_id,
            metric,
            unit: metric.unit().to_owned(),
            sex: subject.sex,
            curve: reference_curve(reference, subject.sex, max_age_months),
            measurements,
        })
    }

    async fn require_subject(&self, subject_id: Uuid) -> AppResult<Subject> {
        self.store
            .get_subject(subject_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Subject {subject_id}")))
    }
}
