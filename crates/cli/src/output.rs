// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;
use sm_cleanup::{SweepOutcome, SweepReport};
use sm_csv::CsvTable;

use crate::color;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a housekeeping report in text or JSON format.
pub fn print_report(report: &SweepReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for line in report_lines(report) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

/// One line per removed/skipped entry, then a summary.
pub fn report_lines(report: &SweepReport) -> Vec<String> {
    let mut lines = Vec::new();
    let mut section = |label: &str, outcome: &SweepOutcome| {
        for path in &outcome.removed {
            lines.push(format!("Removed {} {}", label, color::removed(&path.display().to_string())));
        }
        for path in &outcome.skipped {
            lines.push(format!("Skipped {} {}", label, color::kept(&path.display().to_string())));
        }
    };
    section("cache", &report.caches);
    section("log", &report.logs);
    section("csv", &report.csv);
    if report.driver_removed {
        lines.push("Removed driver folder".to_string());
    }
    let failed = match report.failed_count() {
        0 => "0 failed".to_string(),
        n => color::failed(&format!("{n} failed")),
    };
    lines.push(format!("\n{} removed, {}", report.removed_count(), failed));
    lines
}

#[derive(Serialize)]
struct NamedPath<'a> {
    name: &'a str,
    path: Option<&'a PathBuf>,
}

/// Print named directories, marking unconfigured ones.
pub fn print_paths(entries: &[(&str, Option<PathBuf>)], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for line in path_lines(entries) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let named: Vec<_> =
                entries.iter().map(|(name, path)| NamedPath { name: *name, path: path.as_ref() }).collect();
            println!("{}", serde_json::to_string_pretty(&named)?);
        }
    }
    Ok(())
}

/// One aligned `name path` line per entry.
pub fn path_lines(entries: &[(&str, Option<PathBuf>)]) -> Vec<String> {
    entries
        .iter()
        .map(|(name, path)| {
            let shown = match path {
                Some(path) => path.display().to_string(),
                None => color::kept("(not configured)"),
            };
            // Pad before painting so escapes do not count toward the width
            format!("{} {}", color::label(&format!("{name:<10}")), shown)
        })
        .collect()
}

/// Print a CSV table as aligned columns or a JSON array of objects.
pub fn print_table(table: &CsvTable, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let widths: Vec<usize> = (0..table.headers().len())
                .map(|col| {
                    table
                        .rows()
                        .iter()
                        .map(|row| row[col].len())
                        .chain(std::iter::once(table.headers()[col].len()))
                        .max()
                        .unwrap_or(0)
                })
                .collect();
            let render = |cells: &[String]| {
                cells
                    .iter()
                    .zip(&widths)
                    .map(|(cell, &width)| format!("{cell:<width$}"))
                    .collect::<Vec<_>>()
                    .join("  ")
                    .trim_end()
                    .to_string()
            };
            println!("{}", color::label(&render(table.headers())));
            for row in table.rows() {
                println!("{}", render(row));
            }
        }
        OutputFormat::Json => {
            let objects: Vec<serde_json::Map<String, serde_json::Value>> = table
                .rows()
                .iter()
                .map(|row| {
                    table
                        .headers()
                        .iter()
                        .cloned()
                        .zip(row.iter().cloned().map(serde_json::Value::String))
                        .collect()
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&objects)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
