// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// Errors from CSV helpers
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("{}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid search pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },

    #[error("row {index} out of range ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("row {row} has {found} fields, expected at most {expected}")]
    RowWidth { row: usize, found: usize, expected: usize },
}

impl CsvError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        CsvError::Csv { path: path.into(), source: source.into() }
    }
}
