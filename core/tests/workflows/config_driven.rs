// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.
//!
//! These tests validate how configuration affects the engine: default values of new events,
//! day view hours, sample seeding and path handling.

use std::sync::Arc;

use farmcal_core::{CalendarView, Category, Config, FarmCalendar, MemoryStore, Priority, ViewMode};

use crate::common::{TestConfigBuilder, setup_temp_dirs, test_config, ymd};

#[tokio::test]
async fn config_defaults_applied_to_new_drafts() {
    // Arrange
    let config = TestConfigBuilder::new()
        .default_category(Category::Irrigation)
        .default_priority(Priority::Low)
        .seed_samples(false)
        .build();
    let calendar =
        FarmCalendar::with_store(config, Arc::new(MemoryStore::new()), ymd(2024, 5, 15)).await;

    // Act
    let draft = calendar.default_draft();

    // Assert
    assert_eq!(draft.category, Category::Irrigation);
    assert_eq!(draft.priority, Priority::Low);
    assert_eq!(draft.date, Some(ymd(2024, 5, 15)));
}

#[tokio::test]
async fn config_day_hours_shape_the_day_view() {
    // Arrange
    let config = TestConfigBuilder::new()
        .day_hours(6, 18)
        .seed_samples(false)
        .build();
    let mut calendar =
        FarmCalendar::with_store(config, Arc::new(MemoryStore::new()), ymd(2024, 5, 15)).await;

    // Act
    calendar.set_mode(ViewMode::Day);

    // Assert
    match calendar.current_view() {
        CalendarView::Day { slots, .. } => {
            assert_eq!(slots.len(), 12);
            assert_eq!(slots[0].label(), "06:00");
            assert_eq!(slots[11].label(), "17:00");
        }
        other => panic!("expected day view, got {other:?}"),
    }
}

#[tokio::test]
async fn config_new_rejects_invalid_hours() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = Config {
        day_start_hour: 12,
        day_end_hour: 12,
        ..test_config(&temp_dirs.events_path)
    };

    // Act
    let result = FarmCalendar::new(config).await;

    // Assert
    let err = result.err().expect("invalid hours should be rejected");
    assert!(err.to_string().contains("day hours"), "unexpected error: {err}");
}

#[tokio::test]
async fn config_new_seeds_samples_into_the_configured_file() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .events_path(&temp_dirs.events_path)
        .seed_samples(true)
        .build();

    // Act
    let calendar = FarmCalendar::new(config).await.unwrap();

    // Assert
    assert_eq!(calendar.events().len(), 5);
    assert!(temp_dirs.events_path.exists());
    assert_eq!(
        calendar.config().events_path.as_deref(),
        Some(temp_dirs.events_path.as_path())
    );
}
