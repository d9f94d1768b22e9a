// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application settings.
//!
//! Resolution order, later wins: built-in defaults, optional TOML file,
//! `SM_*` environment variables. The CLI applies its own flags last.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default log retention window
pub const DEFAULT_LOG_RETENTION_DAYS: u32 = 30;

/// Errors from loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Script manager settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory containing the `app` root; empty means "use the default"
    pub app_dir: PathBuf,
    /// Application's own script directory, also swept for bytecode caches.
    /// Unset means no internal root.
    pub internal_dir: Option<PathBuf>,
    /// Write a log file under `<root>/logs`
    pub log_mode: bool,
    /// Echo housekeeping successes to the console
    pub debug_mode: bool,
    /// Log files older than this many days are removed
    pub log_retention_days: u32,
    /// Keep `<downloads>/selenium` between runs
    pub keep_downloaded_custom_driver: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_dir: PathBuf::new(),
            internal_dir: None,
            log_mode: true,
            debug_mode: false,
            log_retention_days: DEFAULT_LOG_RETENTION_DAYS,
            keep_downloaded_custom_driver: false,
        }
    }
}

impl Settings {
    /// Load settings from an optional TOML file, then apply environment overrides.
    ///
    /// A missing file is not an error when no path was given explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_env();
        Ok(settings)
    }

    /// Parse a TOML settings file; unspecified keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| SettingsError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml(&text).map_err(|source| SettingsError::Parse { path: path.to_path_buf(), source })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    fn apply_env(&mut self) {
        if let Some(dir) = crate::env::app_dir() {
            self.app_dir = dir;
        }
        if let Some(dir) = crate::env::internal_dir() {
            self.internal_dir = Some(dir);
        }
        if let Some(debug) = crate::env::debug_mode() {
            self.debug_mode = debug;
        }
        if let Some(log) = crate::env::log_mode() {
            self.log_mode = log;
        }
        if let Some(days) = crate::env::log_retention_days() {
            self.log_retention_days = days;
        }
        if let Some(keep) = crate::env::keep_driver() {
            self.keep_downloaded_custom_driver = keep;
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
