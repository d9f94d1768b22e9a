// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory CSV table with a header row and string cells.

use std::path::Path;

use crate::CsvError;

/// Headered table of string cells.
///
/// Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { headers: headers.into_iter().map(Into::into).collect(), rows: Vec::new() }
    }

    /// Read a headered CSV file. Short rows are padded with empty cells.
    pub fn read(path: &Path) -> Result<Self, CsvError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| CsvError::csv(path, e))?;
        let headers = reader
            .headers()
            .map_err(|e| CsvError::csv(path, e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut table = Self { headers, rows: Vec::new() };
        for record in reader.records() {
            let record = record.map_err(|e| CsvError::csv(path, e))?;
            table.push_row(record.iter())?;
        }
        Ok(table)
    }

    /// Write the table with its header row, replacing `path`.
    pub fn write(&self, path: &Path) -> Result<(), CsvError> {
        let mut writer = csv::Writer::from_path(path).map_err(|e| CsvError::csv(path, e))?;
        writer.write_record(&self.headers).map_err(|e| CsvError::csv(path, e))?;
        for row in &self.rows {
            writer.write_record(row).map_err(|e| CsvError::csv(path, e))?;
        }
        writer.flush().map_err(|e| CsvError::csv(path, e))
    }

    /// Append a row, padding it to the header width.
    pub fn push_row<I, S>(&mut self, cells: I) -> Result<(), CsvError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        if row.len() > self.headers.len() {
            return Err(CsvError::RowWidth {
                row: self.rows.len(),
                found: row.len(),
                expected: self.headers.len(),
            });
        }
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|cells| cells[col].as_str())
    }

    /// Set a cell, adding the column (empty for other rows) if it is new.
    pub fn set(&mut self, row: usize, column: &str, value: impl Into<String>) -> Result<(), CsvError> {
        if row >= self.rows.len() {
            return Err(CsvError::RowOutOfRange { index: row, len: self.rows.len() });
        }
        let col = match self.column_index(column) {
            Some(col) => col,
            None => {
                self.headers.push(column.to_string());
                for cells in &mut self.rows {
                    cells.push(String::new());
                }
                self.headers.len() - 1
            }
        };
        self.rows[row][col] = value.into();
        Ok(())
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
