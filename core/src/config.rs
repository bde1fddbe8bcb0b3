// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::schedule::DEFAULT_DAY_HOURS;
use crate::{Category, Priority};

/// The name of the farmcal application.
pub const APP_NAME: &str = "farmcal";

/// File name of the event list inside the state directory.
const EVENTS_FILE: &str = "events.json";

/// Configuration for the farmcal application.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the JSON file holding the events.
    pub events_path: Option<PathBuf>,

    /// Category of new events.
    pub default_category: Category,

    /// Priority of new events.
    pub default_priority: Priority,

    /// First hour shown by the day view.
    pub day_start_hour: u32,

    /// Hour at which the day view stops, exclusive.
    pub day_end_hour: u32,

    /// Whether to create the sample events when nothing is stored yet.
    pub seed_samples: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_path: None,
            default_category: Category::default(),
            default_priority: Priority::default(),
            day_start_hour: DEFAULT_DAY_HOURS.start,
            day_end_hour: DEFAULT_DAY_HOURS.end,
            seed_samples: true,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        // Normalize events path
        match &self.events_path {
            Some(a) => {
                self.events_path = Some(
                    expand_path(a).map_err(|e| format!("Failed to expand events path: {e}"))?,
                )
            }

            None => match get_state_dir() {
                Ok(a) => self.events_path = Some(a.join(APP_NAME).join(EVENTS_FILE)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        };

        if !self.default_category.is_known() {
            let label = self.default_category.label();
            return Err(format!("Unknown default category {label:?}").into());
        }

        // Validate day view hours
        if self.day_start_hour >= self.day_end_hour || self.day_end_hour > 24 {
            return Err(format!(
                "Invalid day hours {}..{}, expected start < end <= 24",
                self.day_start_hour, self.day_end_hour
            )
            .into());
        }

        Ok(())
    }

    /// Hours shown by the day view.
    pub fn day_hours(&self) -> Range<u32> {
        self.day_start_hour..self.day_end_hour
    }

    /// The events file, falling back to `events.json` in the working directory when no state
    /// directory is available.
    pub fn events_path(&self) -> PathBuf {
        self.events_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(EVENTS_FILE))
    }
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

/// The user configuration directory, e.g. `$XDG_CONFIG_HOME`.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific config directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or("User-specific state directory not found".into())
}
