// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use farmcal_core::{APP_NAME, Config as CoreConfig};

const FARMCAL_CONFIG_ENV: &str = "FARMCAL_CONFIG";

/// Looks up and reads the configuration file.
///
/// The file is taken from `path`, then from the `FARMCAL_CONFIG` environment variable, then
/// from the user configuration directory. Only the last one may be missing, in which case the
/// defaults are used.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(FARMCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok((CoreConfig::default(), Config::default()));
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, a.cli))
}

/// Configuration of the command-line interface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Show all columns by default.
    pub verbose: bool,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigRaw {
    core: CoreConfig,
    cli: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
