// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::path::Path;

use farmcal_core::{Event, EventStore};

/// Asserts that the events carry exactly the given ids, in order.
///
/// # Panics
///
/// Panics if the ids differ.
pub fn assert_ids(events: &[Event], expected: &[&str]) {
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, expected, "Event ids mismatch");
}

/// Asserts that the store holds events with exactly the given ids, in order.
///
/// # Panics
///
/// Panics if the store cannot be loaded, is empty or holds other ids.
pub async fn assert_stored_ids(store: &dyn EventStore, expected: &[&str]) {
    let stored = store
        .load()
        .await
        .expect("store should load")
        .expect("store should hold events");
    assert_ids(&stored, expected);
}

/// Asserts that a file exists at the given path.
///
/// # Panics
///
/// Panics if the file does not exist.
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist: {}", path.display());
}
