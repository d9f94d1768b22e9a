// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retention sweeper.
//!
//! Error granularity differs per sweep and is intentional:
//! - cache and log sweeps recover per item and continue
//! - the CSV sweep recovers once for the whole pass and stops at the first failure
//! - the driver folder sweep propagates its failure to the caller
//!
//! Directories that cannot be read during a tree walk are recorded as error
//! events and skipped. They do not count toward `failed`, which tracks
//! deletions only. Entries that vanish mid-walk are skipped silently.

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use std::time::{Duration, SystemTime};

use sm_core::{Clock, DirectoryResolver, Event, EventSink, Settings, SystemClock};
use walkdir::WalkDir;

use crate::{CleanupError, SweepOutcome, SweepReport};

/// Reserved bytecode cache folder name
pub const CACHE_DIR_NAME: &str = "__pycache__";

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Inputs for [`RetentionSweeper::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOptions {
    /// Log files created more than this many days ago are deleted
    pub retention_days: u32,
    /// Keep the downloaded custom driver folder
    pub keep_driver: bool,
    /// Skip CSV downloads whose name contains this token (case-insensitive)
    pub ignore_csv: Option<String>,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            retention_days: sm_core::DEFAULT_LOG_RETENTION_DAYS,
            keep_driver: false,
            ignore_csv: None,
        }
    }
}

impl SweepOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            retention_days: settings.log_retention_days,
            keep_driver: settings.keep_downloaded_custom_driver,
            ignore_csv: None,
        }
    }
}

/// Removes caches, stale logs, the driver folder and CSV downloads.
pub struct RetentionSweeper<S, C = SystemClock> {
    sink: S,
    clock: C,
    debug_mode: bool,
}

impl<S: EventSink> RetentionSweeper<S, SystemClock> {
    pub fn new(sink: S) -> Self {
        Self::with_clock(sink, SystemClock)
    }
}

impl<S: EventSink, C: Clock> RetentionSweeper<S, C> {
    pub fn with_clock(sink: S, clock: C) -> Self {
        Self { sink, clock, debug_mode: false }
    }

    /// Echo success events to the console
    pub fn debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    /// Run every sweep in order: caches (internal root, then root), driver
    /// folder, stale logs, CSV downloads.
    ///
    /// A driver folder failure does not stop the later sweeps; it is returned
    /// once they have finished.
    pub fn run(
        &self,
        dirs: &impl DirectoryResolver,
        options: &SweepOptions,
    ) -> Result<SweepReport, CleanupError> {
        let mut report = SweepReport::default();

        for root in [dirs.internal_root(), dirs.root()].into_iter().flatten() {
            report.caches.merge(self.sweep_bytecode_caches(&root));
        }

        let driver = match dirs.driver_dir() {
            Some(path) => self.sweep_driver_folder(&path, options.keep_driver),
            None => Ok(false),
        };

        if let Some(logs) = dirs.logs() {
            report.logs = self.sweep_stale_logs(&logs, options.retention_days);
        }
        if let Some(downloads) = dirs.downloads() {
            report.csv =
                self.sweep_downloaded_csv_files(&downloads, options.ignore_csv.as_deref());
        }

        report.driver_removed = driver?;
        tracing::info!(
            removed = report.removed_count(),
            failed = report.failed_count(),
            "housekeeping finished"
        );
        Ok(report)
    }

    /// Delete every `__pycache__` directory under `root`, without descending
    /// into the deleted folders. `root` itself is never removed.
    pub fn sweep_bytecode_caches(&self, root: &Path) -> SweepOutcome {
        let mut outcome = SweepOutcome::default();
        if !is_configured_dir(root) {
            return outcome;
        }

        let mut walker = WalkDir::new(root).into_iter();
        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.unreadable(&e);
                    continue;
                }
            };
            if entry.depth() == 0
                || !entry.file_type().is_dir()
                || entry.file_name() != CACHE_DIR_NAME
            {
                continue;
            }
            walker.skip_current_dir();

            let path = entry.into_path();
            match remove_dir(&path) {
                Ok(()) => {
                    self.success(format!("Deleted {}", path.display()));
                    outcome.removed.push(path);
                }
                Err(e) => {
                    self.failure(&path, &e);
                    outcome.failed += 1;
                }
            }
        }
        outcome
    }

    /// Delete files under `logs_root` whose creation time is strictly older
    /// than `retention_days` before now. Files exactly at the cutoff are kept.
    pub fn sweep_stale_logs(&self, logs_root: &Path, retention_days: u32) -> SweepOutcome {
        let mut outcome = SweepOutcome::default();
        if !is_configured_dir(logs_root) {
            return outcome;
        }

        let cutoff = self.clock.cutoff(DAY * retention_days);
        for entry in WalkDir::new(logs_root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.unreadable(&e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let created = match entry
                .metadata()
                .map_err(io::Error::from)
                .and_then(|metadata| creation_time(&metadata))
            {
                Ok(created) => created,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    self.failure(path, &e);
                    outcome.failed += 1;
                    continue;
                }
            };
            if created >= cutoff {
                continue;
            }

            match remove_file(path) {
                Ok(()) => {
                    self.success(format!("Deleted log file: {}", path.display()));
                    outcome.removed.push(path.to_path_buf());
                }
                Err(e) => {
                    self.failure(path, &e);
                    outcome.failed += 1;
                }
            }
        }
        outcome
    }

    /// Delete the custom driver folder unless `keep` is set.
    ///
    /// Returns whether the folder was deleted. Failures propagate.
    pub fn sweep_driver_folder(&self, driver_path: &Path, keep: bool) -> Result<bool, CleanupError> {
        if keep || driver_path.as_os_str().is_empty() || !driver_path.exists() {
            return Ok(false);
        }
        remove_dir(driver_path).map_err(|source| CleanupError::DriverFolder {
            path: driver_path.to_path_buf(),
            source,
        })?;
        self.success(format!("Deleted {}", driver_path.display()));
        Ok(true)
    }

    /// Delete `*.csv` entries directly inside `downloads_root`.
    ///
    /// Names matching `ignore` (case-insensitive substring) are kept. The
    /// first listing or deletion error is recorded once and ends the pass.
    pub fn sweep_downloaded_csv_files(
        &self,
        downloads_root: &Path,
        ignore: Option<&str>,
    ) -> SweepOutcome {
        let mut outcome = SweepOutcome::default();
        if !is_configured_dir(downloads_root) {
            return outcome;
        }

        let ignore = ignore.map(str::to_lowercase).filter(|token| !token.is_empty());
        if let Err(e) = self.remove_csv_files(downloads_root, ignore.as_deref(), &mut outcome) {
            self.sink.record(
                Event::error(format!("An error occurred: {e}"))
                    .detail("path", downloads_root.display()),
            );
            outcome.failed += 1;
        }
        outcome
    }

    fn remove_csv_files(
        &self,
        downloads_root: &Path,
        ignore: Option<&str>,
        outcome: &mut SweepOutcome,
    ) -> io::Result<()> {
        let mut entries = fs::read_dir(downloads_root)?.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy().to_lowercase();
            if !name.ends_with(".csv") {
                continue;
            }

            let path = entry.path();
            if ignore.is_some_and(|token| name.contains(token)) {
                self.sink.record(Event::info(format!("Skipped deleting {name}")));
                outcome.skipped.push(path);
                continue;
            }

            remove_file(&path)?;
            self.success(format!("Removed {}", file_name.to_string_lossy()));
            outcome.removed.push(path);
        }
        Ok(())
    }

    fn success(&self, message: String) {
        self.sink.record(Event::debug(message).echo(self.debug_mode));
    }

    fn unreadable(&self, error: &walkdir::Error) {
        if error.io_error().is_some_and(|e| e.kind() == io::ErrorKind::NotFound) {
            return;
        }
        let path = error.path().map_or_else(|| "entry".to_string(), |p| p.display().to_string());
        self.sink.record(Event::error(format!("Unable to read {path}.")).detail("error", error));
    }

    fn failure(&self, path: &Path, error: &io::Error) {
        self.sink.record(
            Event::error(format!("Unable to delete {}.", path.display())).detail("error", error),
        );
    }
}

/// Creation time of a file.
///
/// Uses the birth time when the platform and filesystem record one. Where
/// they do not (older Linux kernels, some network filesystems) this falls
/// back to the last modification time, which is the closest stable proxy.
pub fn creation_time(metadata: &Metadata) -> io::Result<SystemTime> {
    metadata.created().or_else(|_| metadata.modified())
}

fn is_configured_dir(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_dir()
}

/// Remove a directory tree; a tree that is already gone counts as removed.
fn remove_dir(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        result => result,
    }
}

/// Remove a file; a file that is already gone counts as removed.
fn remove_file(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        result => result,
    }
}

#[cfg(test)]
#[path = "sweeper_tests.rs"]
mod tests;
