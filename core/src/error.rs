// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// A draft or patch that cannot be applied. The event collection is left untouched.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The title is empty or only whitespace.
    #[error("Title is required")]
    MissingTitle,

    /// No date was given.
    #[error("Date is required")]
    MissingDate,

    /// A time is not a zero-padded 24-hour `HH:MM` string.
    #[error("Invalid {field} {value:?}, expected HH:MM")]
    InvalidTime { field: &'static str, value: String },

    /// The start time is later than the end time.
    #[error("Start time {start} is after end time {end}")]
    InvertedTimes { start: String, end: String },

    /// At least one person is needed.
    #[error("Labor must be at least 1")]
    ZeroLabor,

    /// New and edited events must use one of the fixed categories.
    #[error("Unknown category {0:?}")]
    UnknownCategory(String),
}

/// Failure reading or writing the persisted event list.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// File system error.
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored document is not a JSON array of records.
    #[error("Malformed event file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The events could not be serialized.
    #[error("Failed to encode events: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(action: &'static str, path: &std::path::Path, source: std::io::Error) -> Self {
        StoreError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Errors returned by the calendar engine.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// The draft or patch was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No event carries the given id.
    #[error("Event not found: {id}")]
    NotFound { id: String },

    /// The store could not be read or written.
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl CalendarError {
    pub(crate) fn not_found(id: &str) -> Self {
        CalendarError::NotFound { id: id.to_string() }
    }
}
