// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sm csv` - CSV helpers for script downloads

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use sm_core::{AppDirectories, DirectoryResolver};
use sm_csv::{extract_csv, find_csv_file, update_csv_entry, EntryStatus};

use crate::exit_error::ExitError;
use crate::output::{print_table, OutputFormat};

#[derive(Args)]
pub struct CsvArgs {
    #[command(subcommand)]
    pub command: CsvCommand,
}

#[derive(Subcommand)]
pub enum CsvCommand {
    /// Find the CSV file whose name contains NAME
    Find {
        name: String,
        /// Directory to search (default: downloads)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print the contents of a CSV file
    Show { path: PathBuf },
    /// Set one cell and rewrite the file
    Update {
        path: PathBuf,
        /// Zero-based row index
        #[arg(long)]
        row: usize,
        /// Column name (added if missing)
        #[arg(long)]
        column: String,
        /// Value to write (default: "Updated")
        #[arg(long, conflicts_with = "skipped")]
        value: Option<String>,
        /// Write "Skipped"
        #[arg(long)]
        skipped: bool,
    },
}

pub fn handle(args: CsvArgs, dirs: &AppDirectories, format: OutputFormat) -> Result<()> {
    match args.command {
        CsvCommand::Find { name, dir } => {
            let dir = match dir.or_else(|| dirs.downloads()) {
                Some(dir) => dir,
                None => return Err(ExitError::not_found("downloads directory not configured").into()),
            };
            let Some(path) = find_csv_file(&name, &dir)? else {
                return Err(ExitError::not_found(format!(
                    "No CSV file matching '{}' in {}",
                    name,
                    dir.display()
                ))
                .into());
            };
            match format {
                OutputFormat::Text => println!("{}", path.display()),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "path": path }))?)
                }
            }
        }
        CsvCommand::Show { path } => {
            let table = extract_csv(&path)?;
            print_table(&table, format)?;
        }
        CsvCommand::Update { path, row, column, value, skipped } => {
            let mut table = extract_csv(&path)?;
            let status = EntryStatus::from_flags(skipped, value.as_deref());
            update_csv_entry(&mut table, row, &column, &path, status)
                .with_context(|| format!("failed to update {}", path.display()))?;
            if format == OutputFormat::Text {
                println!("Set {} row {} to '{}'", column, row, status.as_str());
            }
        }
    }
    Ok(())
}
