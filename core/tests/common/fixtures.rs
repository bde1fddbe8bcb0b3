// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! This module provides helper functions to create test data including
//! configurations, drafts, events and a store that always fails.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use farmcal_core::{Category, Config, Event, EventDraft, EventStore, Priority, StoreError};

/// Shorthand for a calendar date.
///
/// # Panics
///
/// Panics if the date does not exist.
#[must_use]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Creates a test configuration writing to the given event file, without samples.
///
/// # Example
///
/// ```ignore
/// let config = test_config("/tmp/farm/events.json");
/// ```
#[must_use]
pub fn test_config(events_path: impl AsRef<Path>) -> Config {
    TestConfigBuilder::new()
        .events_path(events_path.as_ref())
        .seed_samples(false)
        .build()
}

/// Builder for custom test configurations.
#[derive(Debug, Default)]
pub struct TestConfigBuilder {
    config: Config,
}

#[allow(dead_code)]
impl TestConfigBuilder {
    /// Creates a new builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the event file.
    #[must_use]
    pub fn events_path(mut self, path: &Path) -> Self {
        self.config.events_path = Some(PathBuf::from(path));
        self
    }

    /// Sets the category of new events.
    #[must_use]
    pub fn default_category(mut self, category: Category) -> Self {
        self.config.default_category = category;
        self
    }

    /// Sets the priority of new events.
    #[must_use]
    pub fn default_priority(mut self, priority: Priority) -> Self {
        self.config.default_priority = priority;
        self
    }

    /// Sets the hours of the day view.
    #[must_use]
    pub fn day_hours(mut self, start: u32, end: u32) -> Self {
        self.config.day_start_hour = start;
        self.config.day_end_hour = end;
        self
    }

    /// Enables or disables the sample events.
    #[must_use]
    pub fn seed_samples(mut self, seed: bool) -> Self {
        self.config.seed_samples = seed;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}

/// Creates a draft with the given title and date and default everything else.
#[must_use]
pub fn test_event_draft(title: &str, date: NaiveDate) -> EventDraft {
    EventDraft::new(title, date)
}

/// Creates a stored event directly, bypassing the engine.
///
/// # Arguments
///
/// * `id` - Event id
/// * `title` - Event title
/// * `date` - Event date
/// * `start_time` - Start time as `HH:MM`, the event lasts one hour
#[must_use]
pub fn test_event(id: &str, title: &str, date: NaiveDate, start_time: &str) -> Event {
    let hour: u32 = start_time[..2].parse().expect("valid hour");
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        date,
        start_time: start_time.to_string(),
        end_time: format!("{:02}{}", hour + 1, &start_time[2..]),
        location: None,
        category: Category::Planting,
        priority: Priority::Medium,
        is_completed: false,
        reminder_set: true,
        weather_dependent: true,
        notes: None,
        related_crop: None,
        labor: 1,
    }
}

/// A store whose loads and saves always fail, like a read-only disk.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl EventStore for FailingStore {
    async fn load(&self) -> Result<Option<Vec<Event>>, StoreError> {
        Err(io_error())
    }

    async fn save(&self, _events: &[Event]) -> Result<(), StoreError> {
        Err(io_error())
    }
}

fn io_error() -> StoreError {
    let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    StoreError::Io {
        action: "access",
        path: PathBuf::from("/read-only/events.json"),
        source,
    }
}
