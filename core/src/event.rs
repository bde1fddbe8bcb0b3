// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::datetime::parse_clock;
use crate::{Category, Priority, ValidationError};

/// Default start time for new events.
pub const DEFAULT_START_TIME: &str = "08:00";

/// Default end time for new events.
pub const DEFAULT_END_TIME: &str = "09:00";

/// A scheduled farm activity.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier, assigned at creation and never reused.
    pub id: String,

    /// Short title of the activity.
    pub title: String,

    /// Longer description, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Calendar date of the activity.
    pub date: NaiveDate,

    /// Start time, zero-padded `HH:MM`.
    pub start_time: String,

    /// End time, zero-padded `HH:MM`.
    pub end_time: String,

    /// Where the activity takes place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    pub category: Category,

    pub priority: Priority,

    pub is_completed: bool,

    pub reminder_set: bool,

    /// Whether the activity should be moved when the weather is bad.
    pub weather_dependent: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// The crop this activity is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_crop: Option<String>,

    /// Number of people required.
    pub labor: u32,
}

impl Event {
    /// Whether the lower-cased `query` occurs in the title, description, location or related
    /// crop. The query must already be lower-cased.
    pub(crate) fn matches_query(&self, query: &str) -> bool {
        let contains = |s: &str| s.to_lowercase().contains(query);
        contains(&self.title)
            || self.description.as_deref().is_some_and(contains)
            || self.location.as_deref().is_some_and(contains)
            || self.related_crop.as_deref().is_some_and(contains)
    }

    /// Hour at which the event starts, if the start time is well formed.
    pub fn start_hour(&self) -> Option<u32> {
        parse_clock(&self.start_time).map(|(h, _)| h)
    }

    /// Hour at which the event ends, if the end time is well formed.
    pub fn end_hour(&self) -> Option<u32> {
        parse_clock(&self.end_time).map(|(h, _)| h)
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        if parse_clock(&self.start_time).is_none() {
            return Err(ValidationError::InvalidTime {
                field: "start time",
                value: self.start_time.clone(),
            });
        }

        if parse_clock(&self.end_time).is_none() {
            return Err(ValidationError::InvalidTime {
                field: "end time",
                value: self.end_time.clone(),
            });
        }

        // both are zero-padded, so the lexical order is the chronological order
        if self.start_time > self.end_time {
            return Err(ValidationError::InvertedTimes {
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            });
        }

        if self.labor == 0 {
            return Err(ValidationError::ZeroLabor);
        }

        Ok(())
    }
}

/// Draft for an event, used for creating new events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// The title of the event, required.
    pub title: String,

    /// The date of the event, required.
    pub date: Option<NaiveDate>,

    pub start_time: String,

    pub end_time: String,

    pub description: Option<String>,

    pub location: Option<String>,

    pub category: Category,

    pub priority: Priority,

    pub reminder_set: bool,

    pub weather_dependent: bool,

    pub notes: Option<String>,

    pub related_crop: Option<String>,

    pub labor: u32,
}

impl EventDraft {
    /// Creates a draft with the default times and flags.
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date: Some(date),
            ..Self::default()
        }
    }

    /// Converts the draft into an event with the given id.
    pub(crate) fn into_event(self, id: String) -> Result<Event, ValidationError> {
        let date = self.date.ok_or(ValidationError::MissingDate)?;
        ensure_known(&self.category)?;
        let event = Event {
            id,
            title: self.title.trim().to_string(),
            description: non_empty(self.description),
            date,
            start_time: self.start_time,
            end_time: self.end_time,
            location: non_empty(self.location),
            category: self.category,
            priority: self.priority,
            is_completed: false,
            reminder_set: self.reminder_set,
            weather_dependent: self.weather_dependent,
            notes: non_empty(self.notes),
            related_crop: non_empty(self.related_crop),
            labor: self.labor,
        };
        event.validate()?;
        Ok(event)
    }
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: None,
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            description: None,
            location: None,
            category: Category::default(),
            priority: Priority::default(),
            reminder_set: true,
            weather_dependent: true,
            notes: None,
            related_crop: None,
            labor: 1,
        }
    }
}

/// Patch for an event, allowing partial updates.
///
/// `Some(None)` on an optional field clears it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<Option<String>>,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub is_completed: Option<bool>,
    pub reminder_set: Option<bool>,
    pub weather_dependent: Option<bool>,
    pub notes: Option<Option<String>>,
    pub related_crop: Option<Option<String>>,
    pub labor: Option<u32>,
}

impl EventPatch {
    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.location.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.is_completed.is_none()
            && self.reminder_set.is_none()
            && self.weather_dependent.is_none()
            && self.notes.is_none()
            && self.related_crop.is_none()
            && self.labor.is_none()
    }

    /// Applies the patch to a copy of `event`. The id is never changed.
    pub(crate) fn apply_to(&self, event: &Event) -> Result<Event, ValidationError> {
        let mut e = event.clone();

        if let Some(title) = &self.title {
            e.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            e.description = non_empty(description.clone());
        }
        if let Some(date) = self.date {
            e.date = date;
        }
        if let Some(start) = &self.start_time {
            e.start_time = start.clone();
        }
        if let Some(end) = &self.end_time {
            e.end_time = end.clone();
        }
        if let Some(location) = &self.location {
            e.location = non_empty(location.clone());
        }
        if let Some(category) = &self.category {
            ensure_known(category)?;
            e.category = category.clone();
        }
        if let Some(priority) = self.priority {
            e.priority = priority;
        }
        if let Some(completed) = self.is_completed {
            e.is_completed = completed;
        }
        if let Some(reminder) = self.reminder_set {
            e.reminder_set = reminder;
        }
        if let Some(weather) = self.weather_dependent {
            e.weather_dependent = weather;
        }
        if let Some(notes) = &self.notes {
            e.notes = non_empty(notes.clone());
        }
        if let Some(crop) = &self.related_crop {
            e.related_crop = non_empty(crop.clone());
        }
        if let Some(labor) = self.labor {
            e.labor = labor;
        }

        e.validate()?;
        Ok(e)
    }
}

/// Legacy labels are only kept on stored events, never assigned.
pub(crate) fn ensure_known(category: &Category) -> Result<(), ValidationError> {
    if category.is_known() {
        Ok(())
    } else {
        Err(ValidationError::UnknownCategory(category.label().to_string()))
    }
}

/// Empty strings are stored as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
