// ABOUTME: Tests for the in-memory growth record store and dataset loading
// ABOUTME: Validates ordering, unknown-subject and duplicate rejection, and JSON datasets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, newborn, weight_record};
use nurture_growth::errors::ErrorCode;
use nurture_growth::models::Sex;
use nurture_growth::store::{GrowthDataset, GrowthRecordStore, InMemoryGrowthStore};
use std::io::Write;
use tempfile::NamedTempFile;

const DATASET_JSON: &str = r#"{
  "subjects": [
    {
      "id": "8b0f6a4e-2c1d-4f3b-9a57-1e2d3c4b5a69",
      "name": "Ada",
      "birth_date": "2025-01-01",
      "sex": "female"
    }
  ],
  "records": [
    {
      "id": "0d9e8f7a-6b5c-4d3e-8f1a-2b3c4d5e6f70",
      "subject_id": "8b0f6a4e-2c1d-4f3b-9a57-1e2d3c4b5a69",
      "date": "2025-02-01T09:30:00Z",
      "weight": 4.2,
      "height": 53.7
    },
    {
      "id": "1a2b3c4d-5e6f-4a7b-8c9d-0e1f2a3b4c5d",
      "subject_id": "8b0f6a4e-2c1d-4f3b-9a57-1e2d3c4b5a69",
      "date": "2025-01-01T08:00:00Z",
      "weight": 3.2,
      "height": 49.1,
      "head_circumference": 34.0,
      "note": "birth"
    }
  ]
}"#;

#[tokio::test]
async fn test_records_are_returned_oldest_first() {
    init_test_logging();
    let store = InMemoryGrowthStore::new();
    let subject = newborn(Sex::Male);
    store.upsert_subject(subject.clone()).await.unwrap();

    for days in [60, 0, 30] {
        store
            .add_record(weight_record(&subject, days, 3.0 + days as f64 / 30.0))
            .await
            .unwrap();
    }

    let records = store.records_for_subject(subject.id).await.unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.windows(2).all(|pair| pair[0].date <= pair[1].date));
}

#[tokio::test]
async fn test_records_for_unknown_subject_are_empty() {
    let store = InMemoryGrowthStore::new();
    let records = store
        .records_for_subject(newborn(Sex::Female).id)
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_add_record_rejects_unknown_subject() {
    let store = InMemoryGrowthStore::new();
    let stranger = newborn(Sex::Female);
    let error = store
        .add_record(weight_record(&stranger, 0, 3.2))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_add_record_rejects_duplicate_ids() {
    let store = InMemoryGrowthStore::new();
    let subject = newborn(Sex::Female);
    store.upsert_subject(subject.clone()).await.unwrap();

    let record = weight_record(&subject, 0, 3.2);
    store.add_record(record.clone()).await.unwrap();
    let error = store.add_record(record).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(store.record_count().await, 1);
}

#[tokio::test]
async fn test_delete_record() {
    let store = InMemoryGrowthStore::new();
    let subject = newborn(Sex::Male);
    store.upsert_subject(subject.clone()).await.unwrap();
    let record = weight_record(&subject, 0, 3.3);
    let record_id = record.id;
    store.add_record(record).await.unwrap();

    assert!(store.delete_record(record_id).await.unwrap());
    assert!(!store.delete_record(record_id).await.unwrap());
    assert!(store.records_for_subject(subject.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upsert_replaces_subject() {
    let store = InMemoryGrowthStore::new();
    let subject = newborn(Sex::Male);
    store.upsert_subject(subject.clone()).await.unwrap();
    store
        .upsert_subject(subject.clone().with_name("Theo"))
        .await
        .unwrap();

    let subjects = store.list_subjects().await.unwrap();
    assert_eq!(subjects.len(), 1);
    let stored = store.get_subject(subject.id).await.unwrap().unwrap();
    assert_eq!(stored.name.as_deref(), Some("Theo"));
}

#[tokio::test]
async fn test_dataset_parses_sparse_records() {
    let dataset = GrowthDataset::from_json(DATASET_JSON).unwrap();
    assert_eq!(dataset.subjects.len(), 1);
    assert_eq!(dataset.subjects[0].sex, Sex::Female);
    assert_eq!(dataset.records.len(), 2);
    assert!(dataset.records[0].head_circumference.is_none());
    assert_eq!(dataset.records[1].note.as_deref(), Some("birth"));

    let store = InMemoryGrowthStore::from_dataset(dataset).await.unwrap();
    let records = store
        .records_for_subject("8b0f6a4e-2c1d-4f3b-9a57-1e2d3c4b5a69".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(records[0].note.as_deref(), Some("birth"));
}

#[tokio::test]
async fn test_dataset_round_trips_through_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DATASET_JSON.as_bytes()).unwrap();

    let loaded = GrowthDataset::load(file.path()).await.unwrap();
    assert_eq!(loaded, GrowthDataset::from_json(DATASET_JSON).unwrap());
}

#[tokio::test]
async fn test_dataset_errors_map_to_error_codes() {
    let error = GrowthDataset::from_json("{\"subjects\": 42}").unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);

    let dir = tempfile::tempdir().unwrap();
    let error = GrowthDataset::load(&dir.path().join("missing.json"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_dataset_with_orphan_record_is_rejected() {
    let subject = newborn(Sex::Male);
    let dataset = GrowthDataset {
        subjects: vec![],
        records: vec![weight_record(&subject, 0, 3.3)],
    };
    let error = InMemoryGrowthStore::from_dataset(dataset).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}
