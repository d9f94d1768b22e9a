// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Application directory override (`SM_APP_DIR`); the root lives at `<dir>/app`
pub fn app_dir() -> Option<PathBuf> {
    non_empty("SM_APP_DIR").map(PathBuf::from)
}

/// Root directory override (`SM_ROOT_DIR`), used when no app dir is configured
pub fn root_dir() -> Option<PathBuf> {
    non_empty("SM_ROOT_DIR").map(PathBuf::from)
}

/// Directory holding the application's own scripts (`SM_INTERNAL_DIR`)
pub fn internal_dir() -> Option<PathBuf> {
    non_empty("SM_INTERNAL_DIR").map(PathBuf::from)
}

/// Debug mode override (`SM_DEBUG`)
pub fn debug_mode() -> Option<bool> {
    flag("SM_DEBUG")
}

/// Log file mode override (`SM_LOG_MODE`)
pub fn log_mode() -> Option<bool> {
    flag("SM_LOG_MODE")
}

/// Keep the downloaded custom driver folder (`SM_KEEP_DRIVER`)
pub fn keep_driver() -> Option<bool> {
    flag("SM_KEEP_DRIVER")
}

/// Log retention window in days (`SM_LOG_RETENTION_DAYS`)
pub fn log_retention_days() -> Option<u32> {
    non_empty("SM_LOG_RETENTION_DAYS").and_then(|s| s.trim().parse::<u32>().ok())
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

fn flag(key: &str) -> Option<bool> {
    non_empty(key).and_then(|s| parse_flag(&s))
}

pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
