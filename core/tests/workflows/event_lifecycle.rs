// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.
//!
//! These tests validate complete workflows from event creation through modification,
//! completion and deletion, ensuring the JSON file always mirrors the engine.

use std::sync::Arc;

use farmcal_core::{
    CalendarError, EventPatch, EventStore, FarmCalendar, JsonFileStore, ValidationError, ViewMode,
};

use crate::common::{
    FailingStore, assert_file_exists, assert_stored_ids, setup_temp_dirs, test_config,
    test_event_draft, ymd,
};

#[tokio::test]
async fn event_lifecycle_create_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(&temp_dirs.events_path);
    let mut calendar = FarmCalendar::new(config).await.unwrap();
    let draft = test_event_draft("Plant Maize", ymd(2024, 5, 3));

    // Act
    let created = calendar.add_event(draft).await.unwrap();

    // Assert - verify event created
    assert!(created.is_persisted());
    let event = created.value;
    assert_eq!(event.title, "Plant Maize");
    assert!(!event.is_completed);

    // Assert - verify file written
    assert_file_exists(&temp_dirs.events_path);
    let store = JsonFileStore::new(&temp_dirs.events_path);
    assert_stored_ids(&store, &[event.id.as_str()]).await;
}

#[tokio::test]
async fn event_lifecycle_update_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let store = Arc::new(JsonFileStore::new(&temp_dirs.events_path));
    let config = test_config(&temp_dirs.events_path);
    let mut calendar = FarmCalendar::with_store(config, store.clone(), ymd(2024, 5, 1)).await;
    let id = calendar
        .add_event(test_event_draft("Original Title", ymd(2024, 5, 3)))
        .await
        .unwrap()
        .value
        .id;

    // Act
    let patch = EventPatch {
        title: Some("Plant Beans".to_string()),
        location: Some(Some("East Field".to_string())),
        start_time: Some("07:00".to_string()),
        ..Default::default()
    };
    let updated = calendar.update_event(&id, patch).await.unwrap().value;

    // Assert - verify engine state
    assert_eq!(updated.id, id);
    assert_eq!(updated.title, "Plant Beans");
    assert_eq!(calendar.get(&id), Some(&updated));

    // Assert - verify file contents after reload
    let stored = store.load().await.unwrap().unwrap();
    assert_eq!(stored, vec![updated]);
}

#[tokio::test]
async fn event_lifecycle_toggle_and_delete_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let store = Arc::new(JsonFileStore::new(&temp_dirs.events_path));
    let config = test_config(&temp_dirs.events_path);
    let mut calendar = FarmCalendar::with_store(config, store.clone(), ymd(2024, 5, 1)).await;
    let keep = calendar
        .add_event(test_event_draft("Keep", ymd(2024, 5, 3)))
        .await
        .unwrap()
        .value
        .id;
    let gone = calendar
        .add_event(test_event_draft("Drop", ymd(2024, 5, 4)))
        .await
        .unwrap()
        .value
        .id;

    // Act - toggle completion
    let toggled = calendar.toggle_completion(&keep).await.unwrap().value;

    // Assert
    assert!(toggled.is_completed);
    let stored = store.load().await.unwrap().unwrap();
    assert!(stored.iter().find(|e| e.id == keep).unwrap().is_completed);

    // Act - delete
    let removed = calendar.delete_event(&gone).await.unwrap().value;

    // Assert
    assert_eq!(removed.title, "Drop");
    assert!(calendar.get(&gone).is_none());
    assert_stored_ids(store.as_ref(), &[keep.as_str()]).await;
}

#[tokio::test]
async fn event_lifecycle_rejects_invalid_input() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let store = Arc::new(JsonFileStore::new(&temp_dirs.events_path));
    let config = test_config(&temp_dirs.events_path);
    let mut calendar = FarmCalendar::with_store(config, store.clone(), ymd(2024, 5, 1)).await;
    let id = calendar
        .add_event(test_event_draft("Plant Maize", ymd(2024, 5, 3)))
        .await
        .unwrap()
        .value
        .id;
    let before = store.load().await.unwrap();

    // Act
    let patch = EventPatch {
        start_time: Some("18:00".to_string()),
        end_time: Some("06:00".to_string()),
        ..Default::default()
    };
    let err = calendar.update_event(&id, patch).await.unwrap_err();

    // Assert - nothing changed
    assert!(matches!(
        err,
        CalendarError::Validation(ValidationError::InvertedTimes { .. })
    ));
    assert_eq!(calendar.get(&id).unwrap().start_time, "08:00");
    assert_eq!(store.load().await.unwrap(), before);
}

#[tokio::test]
async fn event_lifecycle_keeps_changes_when_save_fails() {
    // Arrange
    let config = test_config("/unused/events.json");
    let mut calendar =
        FarmCalendar::with_store(config, Arc::new(FailingStore), ymd(2024, 5, 1)).await;
    calendar.set_mode(ViewMode::Agenda);

    // Act
    let created = calendar
        .add_event(test_event_draft("Plant Maize", ymd(2024, 5, 3)))
        .await
        .unwrap();

    // Assert - reported, not rolled back
    assert!(!created.is_persisted());
    assert_eq!(calendar.events().len(), 1);
    assert_eq!(calendar.visible_events().len(), 1);
    assert!(matches!(
        created.into_result(),
        Err(CalendarError::Persistence(_))
    ));
}
