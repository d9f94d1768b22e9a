// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sm: script manager housekeeping CLI

mod color;
mod commands;
mod exit_error;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use sm_core::{AppDirectories, Settings};

use crate::commands::{clean, csv, dirs};
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "sm", version, about = "Script manager housekeeping", styles = color::styles())]
struct Cli {
    /// Directory containing the `app` root
    #[arg(long, global = true, value_name = "DIR")]
    app_dir: Option<PathBuf>,

    /// Enable debug mode (verbose logs, echo housekeeping to the console)
    #[arg(short, long, global = true)]
    debug: bool,

    /// Settings file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove caches, stale logs, the custom driver folder and CSV downloads
    Clean(clean::CleanArgs),
    /// Show the resolved directory layout
    Dirs(dirs::DirsArgs),
    /// Find, show and update CSV files
    Csv(csv::CsvArgs),
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        if let Some(exit) = e.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = cli.app_dir {
        settings.app_dir = dir;
    }
    settings.debug_mode |= cli.debug;

    let dirs = AppDirectories::resolve(&settings)?;
    let logs = settings.log_mode.then(|| dirs.root_path().join("logs"));
    let _guard = logging::init(settings.debug_mode, logs.as_deref());
    tracing::debug!(?settings, root = %dirs.root_path().display(), "starting");

    match command {
        Commands::Clean(args) => clean::handle(args, &settings, &dirs, cli.output),
        Commands::Dirs(args) => dirs::handle(args, &dirs, cli.output),
        Commands::Csv(args) => csv::handle(args, &dirs, cli.output),
    }
}
