// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::datetime::parse_stored_date;
use crate::event::non_empty;
use crate::{Category, Event, Priority, StoreError, ValidationError};

/// Durable storage of the event collection. Only whole-collection load and save are needed.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Loads the stored events, or `None` when nothing was ever saved.
    async fn load(&self) -> Result<Option<Vec<Event>>, StoreError>;

    /// Replaces the stored events with `events`.
    async fn save(&self, events: &[Event]) -> Result<(), StoreError>;
}

/// Stores the events as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EventStore for JsonFileStore {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Option<Vec<Event>>, StoreError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|source| StoreError::io("inspect", &self.path, source))?;
        if !exists {
            tracing::debug!("no event file yet");
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::io("read", &self.path, source))?;
        let records: Vec<Value> =
            serde_json::from_str(&content).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;

        let total = records.len();
        let mut events: Vec<Event> = records
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| match decode_record(value) {
                Ok(event) => Some(event),
                Err(reason) => {
                    tracing::warn!(index = i, reason, "skipping malformed event record");
                    None
                }
            })
            .collect();
        retain_unique_ids(&mut events);

        tracing::debug!(total, loaded = events.len(), "loaded events");
        Ok(Some(events))
    }

    #[tracing::instrument(
        skip(self, events),
        fields(path = %self.path.display(), count = events.len())
    )]
    async fn save(&self, events: &[Event]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::io("create directory for", &self.path, source))?;
        }

        let content = serde_json::to_string_pretty(events).map_err(StoreError::Encode)?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|source| StoreError::io("write", &self.path, source))?;

        tracing::debug!("saved events");
        Ok(())
    }
}

/// Keeps the events in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Mutex<Option<Vec<Event>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `events`.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(Some(events)),
        }
    }

    /// A copy of the stored events.
    pub fn snapshot(&self) -> Option<Vec<Event>> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn load(&self) -> Result<Option<Vec<Event>>, StoreError> {
        Ok(self.snapshot())
    }

    async fn save(&self, events: &[Event]) -> Result<(), StoreError> {
        let mut guard = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(events.to_vec());
        Ok(())
    }
}

/// Shape of a stored record before validation. Every field is optional so a single bad
/// record cannot fail the whole file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    id: Option<Value>,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    location: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    is_completed: Option<bool>,
    reminder_set: Option<bool>,
    weather_dependent: Option<bool>,
    notes: Option<String>,
    related_crop: Option<String>,
    labor: Option<u32>,
}

fn decode_record(value: Value) -> Result<Event, &'static str> {
    let record: EventRecord = serde_json::from_value(value).map_err(|_| "unexpected shape")?;

    let id = match record.id {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err("missing id"),
    };

    let title = record
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or("missing title")?;

    let date = record
        .date
        .as_deref()
        .and_then(parse_stored_date)
        .ok_or("missing or invalid date")?;

    let defaults = crate::EventDraft::default();
    let event = Event {
        id,
        title,
        description: non_empty(record.description),
        date,
        start_time: record.start_time.unwrap_or(defaults.start_time),
        end_time: record.end_time.unwrap_or(defaults.end_time),
        location: non_empty(record.location),
        category: record.category.map(Category::from).unwrap_or_default(),
        priority: record
            .priority
            .and_then(|p| p.parse::<Priority>().ok())
            .unwrap_or_default(),
        is_completed: record.is_completed.unwrap_or(false),
        reminder_set: record.reminder_set.unwrap_or(defaults.reminder_set),
        weather_dependent: record.weather_dependent.unwrap_or(defaults.weather_dependent),
        notes: non_empty(record.notes),
        related_crop: non_empty(record.related_crop),
        labor: record.labor.unwrap_or(defaults.labor),
    };

    // same rules as new events, except the category which may be a legacy label
    event.validate().map_err(|e| match e {
        ValidationError::InvalidTime { .. } => "invalid time",
        ValidationError::InvertedTimes { .. } => "start time after end time",
        ValidationError::ZeroLabor => "zero labor",
        _ => "invalid record",
    })?;
    Ok(event)
}

/// Drops every event whose id was already seen, keeping the first occurrence.
pub(crate) fn retain_unique_ids(events: &mut Vec<Event>) {
    let mut seen = HashSet::with_capacity(events.len());
    events.retain(|event| {
        let fresh = seen.insert(event.id.clone());
        if !fresh {
            tracing::warn!(id = %event.id, "skipping event with duplicate id");
        }
        fresh
    });
}
