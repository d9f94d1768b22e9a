// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// Errors that escape a sweep.
///
/// Only the driver folder sweep propagates failures; the other sweeps record
/// them as error events and keep going.
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("failed to delete driver folder {}: {source}", path.display())]
    DriverFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
