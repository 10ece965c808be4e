// ABOUTME: In-memory growth record store backed by async read-write locks
// ABOUTME: Used by the CLI and tests; holds subjects and records keyed by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{GrowthDataset, GrowthRecordStore};
use crate::errors::{AppError, AppResult};
use crate::models::{GrowthRecord, Subject};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// In-memory store
///
/// Each instance is independent; there is no process-wide state.
#[derive(Debug, Default)]
pub struct InMemoryGrowthStore {
    subjects: RwLock<BTreeMap<Uuid, Subject>>,
    records: RwLock<HashMap<Uuid, GrowthRecord>>,
}

impl InMemoryGrowthStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from a dataset
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset references unknown subjects or repeats record ids
    pub async fn from_dataset(dataset: GrowthDataset) -> AppResult<Self> {
        let store = Self::new();
        dataset.seed(&store).await?;
        Ok(store)
    }

    /// Number of records held
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl GrowthRecordStore for InMemoryGrowthStore {
    async fn upsert_subject(&self, subject: Subject) -> AppResult<()> {
        debug!(subject_id = %subject.id, "Upserting subject");
        self.subjects.write().await.insert(subject.id, subject);
        Ok(())
    }

    async fn get_subject(&self, subject_id: Uuid) -> AppResult<Option<Subject>> {
        Ok(self.subjects.read().await.get(&subject_id).cloned())
    }

    async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        Ok(self.subjects.read().await.values().cloned().collect())
    }

    async fn add_record(&self, record: GrowthRecord) -> AppResult<()> {
        if !self.subjects.read().await.contains_key(&record.subject_id) {
            return Err(AppError::not_found(format!(
                "Subject {}",
                record.subject_id
            )));
        }

        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(AppError::already_exists(format!(
                "Growth record {}",
                record.id
            )));
        }
        debug!(record_id = %record.id, subject_id = %record.subject_id, "Adding growth record");
        records.insert(record.id, record);
        Ok(())
    }

    async fn records_for_subject(&self, subject_id: Uuid) -> AppResult<Vec<GrowthRecord>> {
        let mut records: Vec<GrowthRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|record| record.subject_id == subject_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(records)
    }

    async fn delete_record(&self, record_id: Uuid) -> AppResult<bool> {
        Ok(self.records.write().await.remove(&record_id).is_some())
    }
}
