// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! JSON file store workflow tests.
//!
//! These tests validate the on-disk format and how the engine reacts to missing,
//! partially broken or unreadable files.

use std::sync::Arc;

use farmcal_core::{Category, EventStore, FarmCalendar, JsonFileStore, MemoryStore};
use serde_json::Value;
use tokio::fs;

use crate::common::{
    FailingStore, TestConfigBuilder, assert_ids, setup_temp_dirs, test_event, ymd,
};

#[tokio::test]
async fn file_store_missing_file_loads_nothing() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let store = JsonFileStore::new(&temp_dirs.events_path);

    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn file_store_writes_camel_case_records() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs.data_dir.join("nested/dir/events.json");
    let store = JsonFileStore::new(&path);
    let mut event = test_event("1", "Plant Maize", ymd(2024, 5, 3), "08:00");
    event.related_crop = Some("Maize".to_string());
    event.category = Category::PestControl;

    // Act
    store.save(&[event]).await.unwrap();

    // Assert
    let raw: Value = serde_json::from_str(&fs::read_to_string(&path).await.unwrap()).unwrap();
    let record = &raw[0];
    assert_eq!(record["id"], "1");
    assert_eq!(record["date"], "2024-05-03");
    assert_eq!(record["startTime"], "08:00");
    assert_eq!(record["endTime"], "09:00");
    assert_eq!(record["category"], "Pest Control");
    assert_eq!(record["priority"], "Medium");
    assert_eq!(record["isCompleted"], false);
    assert_eq!(record["weatherDependent"], true);
    assert_eq!(record["relatedCrop"], "Maize");
    assert!(record.get("location").is_none());
}

#[tokio::test]
async fn file_store_skips_malformed_records() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    temp_dirs
        .write_events_file(
            r#"[
                {"id": "1", "title": "Good", "date": "2024-05-03", "startTime": "08:00", "endTime": "09:00"},
                {"id": "2", "title": "No date"},
                {"id": "3", "title": "Bad date", "date": "someday"},
                "garbage",
                {"id": 4, "title": "Timestamp", "date": "2024-05-04T00:00:00.000", "category": "planting"}
            ]"#,
        )
        .await
        .unwrap();
    let store = JsonFileStore::new(&temp_dirs.events_path);

    // Act
    let events = store.load().await.unwrap().unwrap();

    // Assert
    assert_ids(&events, &["1", "4"]);
    assert_eq!(events[1].date, ymd(2024, 5, 4));
    assert_eq!(events[1].category, Category::Other("planting".to_string()));
}

#[tokio::test]
async fn file_store_round_trips_through_the_engine() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let store = Arc::new(JsonFileStore::new(&temp_dirs.events_path));
    let events = vec![
        test_event("b", "Second", ymd(2024, 5, 3), "10:00"),
        test_event("a", "First", ymd(2024, 5, 3), "08:00"),
    ];
    store.save(&events).await.unwrap();

    // Act
    let config = TestConfigBuilder::new().seed_samples(true).build();
    let calendar = FarmCalendar::with_store(config, store, ymd(2024, 5, 1)).await;

    // Assert - stored events win over samples and are sorted for display
    assert_ids(calendar.events(), &["b", "a"]);
    assert_ids(calendar.visible_events(), &["a", "b"]);
}

#[tokio::test]
async fn file_store_unreadable_file_falls_back_to_samples() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    temp_dirs.write_events_file("{ not json").await.unwrap();
    let store = Arc::new(JsonFileStore::new(&temp_dirs.events_path));
    let config = TestConfigBuilder::new().seed_samples(true).build();

    // Act
    let calendar = FarmCalendar::with_store(config, store.clone(), ymd(2024, 5, 15)).await;

    // Assert - samples are shown but the broken file is left for the user to repair
    assert_eq!(calendar.events().len(), 5);
    let content = fs::read_to_string(&temp_dirs.events_path).await.unwrap();
    assert_eq!(content, "{ not json");
    assert!(store.load().await.is_err());
}

#[tokio::test]
async fn file_store_duplicate_ids_keep_the_first_record() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    temp_dirs
        .write_events_file(
            r#"[
                {"id": "1", "title": "Plant Maize", "date": "2024-05-03"},
                {"id": "2", "title": "Harvest Beans", "date": "2024-05-04"},
                {"id": "1", "title": "Copy of Plant Maize", "date": "2024-05-05"}
            ]"#,
        )
        .await
        .unwrap();
    let store = Arc::new(JsonFileStore::new(&temp_dirs.events_path));
    let config = TestConfigBuilder::new().seed_samples(false).build();
    let mut calendar = FarmCalendar::with_store(config, store.clone(), ymd(2024, 5, 1)).await;
    assert_ids(calendar.events(), &["1", "2"]);

    // Act
    calendar.delete_event("1").await.unwrap();

    // Assert - no record with the deleted id survives, in memory or on disk
    assert!(calendar.get("1").is_none());
    let stored = store.load().await.unwrap().unwrap();
    assert_ids(&stored, &["2"]);
}

#[tokio::test]
async fn file_store_failing_store_still_opens() {
    let config = TestConfigBuilder::new().seed_samples(true).build();
    let calendar = FarmCalendar::with_store(config, Arc::new(FailingStore), ymd(2024, 5, 15)).await;

    assert_eq!(calendar.events().len(), 5);
}

#[tokio::test]
async fn file_store_empty_list_is_not_reseeded() {
    let store = Arc::new(MemoryStore::with_events(Vec::new()));
    let config = TestConfigBuilder::new().seed_samples(true).build();
    let calendar = FarmCalendar::with_store(config, store, ymd(2024, 5, 15)).await;

    assert!(calendar.events().is_empty());
}
