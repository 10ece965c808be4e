// ABOUTME: Growth record storage abstraction with pluggable backends
// ABOUTME: Defines the async store trait and the JSON dataset format used to seed it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory store implementation
pub mod memory;

pub use memory::InMemoryGrowthStore;

use crate::errors::{AppError, AppResult};
use crate::models::{GrowthRecord, Subject};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

/// Persistence for subjects and their growth records
///
/// The analytics engine never touches a store directly; services read from
/// one and hand plain record slices to the engine.
#[async_trait]
pub trait GrowthRecordStore: Send + Sync {
    /// Insert or replace a subject
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    async fn upsert_subject(&self, subject: Subject) -> AppResult<()>;

    /// Look up a subject by id
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    async fn get_subject(&self, subject_id: Uuid) -> AppResult<Option<Subject>>;

    /// All subjects, ordered by id
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    async fn list_subjects(&self) -> AppResult<Vec<Subject>>;

    /// Add a growth record
    ///
    /// # Errors
    ///
    /// Returns an error if the subject is unknown or a record with the same id exists
    async fn add_record(&self, record: GrowthRecord) -> AppResult<()>;

    /// Records for one subject, ascending by date
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    async fn records_for_subject(&self, subject_id: Uuid) -> AppResult<Vec<GrowthRecord>>;

    /// Remove a record, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    async fn delete_record(&self, record_id: Uuid) -> AppResult<bool>;
}

/// Serialized subjects and records used to seed a store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthDataset {
    /// Subjects
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Growth records referencing the subjects above
    #[serde(default)]
    pub records: Vec<GrowthRecord>,
}

impl GrowthDataset {
    /// Parse a dataset from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the dataset format
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub async fn load(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read dataset {}", path.display())).with_source(e)
        })?;
        let dataset = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            subjects = dataset.subjects.len(),
            records = dataset.records.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Write every subject then every record into `store`
    ///
    /// # Errors
    ///
    /// Returns the first store error, e.g. a record for an unknown subject
    pub async fn seed<S: GrowthRecordStore + ?Sized>(self, store: &S) -> AppResult<()> {
        for subject in self.subjects {
            store.upsert_subject(subject).await?;
        }
        for record in self.records {
            store.add_record(record).await?;
        }
        Ok(())
    }
}
