// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use serde::Serialize;

/// Result of a single sweep
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepOutcome {
    /// Paths deleted (or already gone when deletion was attempted)
    pub removed: Vec<PathBuf>,
    /// Paths matched but intentionally kept
    pub skipped: Vec<PathBuf>,
    /// Failures recorded as error events
    pub failed: usize,
}

impl SweepOutcome {
    pub fn merge(&mut self, other: SweepOutcome) {
        self.removed.extend(other.removed);
        self.skipped.extend(other.skipped);
        self.failed += other.failed;
    }

    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Result of a full housekeeping run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub caches: SweepOutcome,
    pub driver_removed: bool,
    pub logs: SweepOutcome,
    pub csv: SweepOutcome,
}

impl SweepReport {
    pub fn removed_count(&self) -> usize {
        self.caches.removed.len()
            + usize::from(self.driver_removed)
            + self.logs.removed.len()
            + self.csv.removed.len()
    }

    pub fn failed_count(&self) -> usize {
        self.caches.failed + self.logs.failed + self.csv.failed
    }
}
