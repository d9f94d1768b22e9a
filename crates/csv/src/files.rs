// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-level CSV helpers used by scripts.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{CsvError, CsvTable};

/// Value written by [`update_csv_entry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus<'a> {
    Updated,
    Skipped,
    Value(&'a str),
}

impl<'a> EntryStatus<'a> {
    /// `skipped` wins over `value`; neither means "Updated".
    pub fn from_flags(skipped: bool, value: Option<&'a str>) -> Self {
        match (skipped, value) {
            (true, _) => EntryStatus::Skipped,
            (false, Some(value)) if !value.is_empty() => EntryStatus::Value(value),
            (false, _) => EntryStatus::Updated,
        }
    }

    pub fn as_str(&self) -> &'a str {
        match *self {
            EntryStatus::Updated => "Updated",
            EntryStatus::Skipped => "Skipped",
            EntryStatus::Value(value) => value,
        }
    }
}

/// Find a CSV file in `directory` whose name contains `name`.
///
/// Matches `<directory>/*<name>*.csv`; when several files match, the last in
/// lexicographic order wins.
pub fn find_csv_file(name: &str, directory: &Path) -> Result<Option<PathBuf>, CsvError> {
    let pattern = format!(
        "{}/*{}*.csv",
        glob::Pattern::escape(&directory.to_string_lossy()),
        glob::Pattern::escape(name)
    );
    let paths = glob::glob(&pattern)
        .map_err(|e| CsvError::Pattern { pattern: pattern.clone(), message: e.msg.to_string() })?;

    // Unreadable entries (e.g. permission denied) are not candidates
    let found = paths.filter_map(Result::ok).filter(|path| path.is_file()).last();
    tracing::debug!(name, directory = %directory.display(), found = ?found, "searched for csv file");
    Ok(found)
}

/// Read a CSV file into a table.
pub fn extract_csv(path: &Path) -> Result<CsvTable, CsvError> {
    CsvTable::read(path)
}

/// Set `table[index][column]` to `status` and rewrite `path` from the table.
pub fn update_csv_entry(
    table: &mut CsvTable,
    index: usize,
    column: &str,
    path: &Path,
    status: EntryStatus<'_>,
) -> Result<(), CsvError> {
    table.set(index, column, status.as_str())?;
    table.write(path)?;
    tracing::debug!(path = %path.display(), index, column, status = status.as_str(), "updated csv entry");
    Ok(())
}

/// Serialize `records` to `<directory>/<name>.csv` with a header row.
///
/// Returns the written path.
pub fn save_to_csv<T: Serialize>(
    records: &[T],
    name: &str,
    directory: &Path,
) -> Result<PathBuf, CsvError> {
    let path = csv_path(name, directory);
    let mut writer = csv::Writer::from_path(&path).map_err(|e| CsvError::csv(&path, e))?;
    for record in records {
        writer.serialize(record).map_err(|e| CsvError::csv(&path, e))?;
    }
    writer.flush().map_err(|e| CsvError::csv(&path, e))?;
    tracing::debug!(path = %path.display(), rows = records.len(), "saved csv");
    Ok(path)
}

/// Write `table` to `<directory>/<name>.csv`. Returns the written path.
pub fn save_table(table: &CsvTable, name: &str, directory: &Path) -> Result<PathBuf, CsvError> {
    let path = csv_path(name, directory);
    table.write(&path)?;
    tracing::debug!(path = %path.display(), rows = table.len(), "saved csv");
    Ok(path)
}

fn csv_path(name: &str, directory: &Path) -> PathBuf {
    directory.join(format!("{name}.csv"))
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
