// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scratch directories for integration tests, removed when dropped.

use std::error::Error;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokio::fs;

/// A scratch data directory with a not yet created `events.json` inside.
#[derive(Debug)]
pub struct TempDirs {
    root: TempDir,
    /// Directory holding the event file.
    pub data_dir: PathBuf,
    /// Event file inside `data_dir`.
    pub events_path: PathBuf,
}

impl TempDirs {
    /// Creates the scratch directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    pub async fn new() -> Result<Self, Box<dyn Error>> {
        let root = tempfile::tempdir()?;
        let data_dir = root.path().join("data");
        fs::create_dir_all(&data_dir).await?;

        Ok(Self {
            events_path: data_dir.join("events.json"),
            data_dir,
            root,
        })
    }

    /// The root of the scratch tree.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Replaces the event file with raw `content`, e.g. a hand-written JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn write_events_file(&self, content: &str) -> Result<PathBuf, Box<dyn Error>> {
        fs::write(&self.events_path, content).await?;
        Ok(self.events_path.clone())
    }
}

/// Shorthand for [`TempDirs::new`].
///
/// # Errors
///
/// Returns an error if a directory cannot be created.
pub async fn setup_temp_dirs() -> Result<TempDirs, Box<dyn Error>> {
    TempDirs::new().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_an_empty_data_dir() {
        let dirs = TempDirs::new().await.unwrap();

        assert!(dirs.data_dir.is_dir());
        assert!(dirs.data_dir.starts_with(dirs.root()));
        assert!(!dirs.events_path.exists());
    }

    #[tokio::test]
    async fn writes_the_events_file() {
        let dirs = TempDirs::new().await.unwrap();

        let path = dirs.write_events_file("[]").await.unwrap();

        assert_eq!(path, dirs.events_path);
        assert_eq!(fs::read_to_string(&path).await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn removes_everything_on_drop() {
        let root = {
            let dirs = TempDirs::new().await.unwrap();
            dirs.write_events_file("[]").await.unwrap();
            dirs.root().to_path_buf()
        };

        assert!(!root.exists());
    }
}
