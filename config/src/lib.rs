//! Configuration for Safeguard.
//!
//! Read from `~/.safeguard/config.toml`. Every section and key is optional:
//!
//! ```toml
//! [app]
//! ascii_only = false
//!
//! [tracking]
//! step_interval_secs = 8
//! ```
//!
//! The initial theme is deliberately not configurable; it always starts at
//! `light` and only changes through direct user selection.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

/// Seconds between automatic status advances when `[tracking]` is absent.
pub const DEFAULT_STEP_INTERVAL_SECS: u64 = 8;

/// Lower bound on `step_interval_secs`; zero would advance every frame.
pub const MIN_STEP_INTERVAL_SECS: u64 = 1;

const CONFIG_DIR: &str = ".safeguard";
const CONFIG_FILE: &str = "config.toml";
const ASCII_ENV: &str = "SAFEGUARD_ASCII";

#[derive(Debug, Default, Deserialize)]
pub struct SafeguardConfig {
    pub app: Option<AppConfig>,
    pub tracking: Option<TrackingConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for the status timeline and markers.
    #[serde(default)]
    pub ascii_only: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrackingConfig {
    /// Seconds between automatic status advances of the active case.
    pub step_interval_secs: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl SafeguardConfig {
    /// Load the user config. `Ok(None)` when there is no home directory or
    /// no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Interval between status advances, clamped to
    /// [`MIN_STEP_INTERVAL_SECS`].
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        let secs = self
            .tracking
            .as_ref()
            .and_then(|tracking| tracking.step_interval_secs)
            .unwrap_or(DEFAULT_STEP_INTERVAL_SECS);
        if secs < MIN_STEP_INTERVAL_SECS {
            tracing::warn!(
                configured = secs,
                minimum = MIN_STEP_INTERVAL_SECS,
                "step_interval_secs below minimum; clamping"
            );
        }
        Duration::from_secs(secs.max(MIN_STEP_INTERVAL_SECS))
    }

    /// `[app] ascii_only`, or `SAFEGUARD_ASCII` set to a truthy value.
    #[must_use]
    pub fn ascii_only(&self) -> bool {
        let configured = self.app.as_ref().is_some_and(|app| app.ascii_only);
        configured || ascii_from_env()
    }
}

fn ascii_from_env() -> bool {
    env::var(ASCII_ENV).is_ok_and(|value| is_truthy(&value))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Directory holding the config file, used for logs as well.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR))
}
