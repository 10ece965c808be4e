// ABOUTME: Dataset-backed analytics commands for nurture-cli
// ABOUTME: Loads a dataset into the in-memory store and prints service results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nurture_growth::{
    config::AppConfig,
    constants::env_vars,
    errors::{AppError, AppResult},
    models::GrowthMetric,
    services::GrowthAnalyticsService,
    store::{GrowthDataset, InMemoryGrowthStore},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::helpers::display::print_json;

type Result<T> = AppResult<T>;

/// Load the dataset and build a service over it
pub async fn open_service(
    config: &AppConfig,
    data: Option<PathBuf>,
) -> Result<GrowthAnalyticsService<InMemoryGrowthStore>> {
    let path = config.data_file_or(data).ok_or_else(|| {
        AppError::config(format!(
            "No dataset given; pass --data or set {}",
            env_vars::DATA_FILE
        ))
    })?;

    info!("Loading dataset from {}", path.display());
    let dataset = GrowthDataset::load(&path).await?;
    let store = InMemoryGrowthStore::from_dataset(dataset).await?;
    info!("Loaded {} growth records", store.record_count().await);

    Ok(GrowthAnalyticsService::new(
        Arc::new(store),
        config.analytics.clone(),
    ))
}

/// Print insights for one subject
pub async fn insights(
    service: &GrowthAnalyticsService<InMemoryGrowthStore>,
    subject_id: Uuid,
) -> Result<()> {
    let insights = service.insights_for(subject_id).await?;
    print_json(&insights)
}

/// Print insights for all subjects
pub async fn batch(service: &GrowthAnalyticsService<InMemoryGrowthStore>) -> Result<()> {
    let results = service.insights_for_all().await?;
    print_json(&results)
}

/// Print a reference overlay for one subject
pub async fn chart(
    service: &GrowthAnalyticsService<InMemoryGrowthStore>,
    subject_id: Uuid,
    metric: GrowthMetric,
    max_age_months: u32,
) -> Result<()> {
    let overlay = service
        .reference_overlay(subject_id, metric, max_age_months)
        .await?;
    print_json(&overlay)
}
