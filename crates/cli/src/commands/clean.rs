// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sm clean` - Run housekeeping sweeps

use anyhow::Result;
use clap::Args;
use sm_cleanup::{RetentionSweeper, SweepOptions};
use sm_core::{AppDirectories, Settings, TracingSink};

use crate::exit_error::ExitError;
use crate::output::{print_report, OutputFormat};

#[derive(Args, Debug, Default)]
pub struct CleanArgs {
    /// Keep the downloaded custom driver folder
    #[arg(long)]
    pub keep_driver: bool,

    /// Delete log files created more than DAYS days ago
    #[arg(long, value_name = "DAYS")]
    pub log_days: Option<u32>,

    /// Keep CSV downloads whose name contains TEXT (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub ignore_csv: Option<String>,
}

impl CleanArgs {
    /// Sweep options from settings, overridden by flags
    pub fn options(&self, settings: &Settings) -> SweepOptions {
        let mut options = SweepOptions::from_settings(settings);
        options.keep_driver |= self.keep_driver;
        if let Some(days) = self.log_days {
            options.retention_days = days;
        }
        options.ignore_csv = self.ignore_csv.clone();
        options
    }
}

pub fn handle(
    args: CleanArgs,
    settings: &Settings,
    dirs: &AppDirectories,
    format: OutputFormat,
) -> Result<()> {
    let options = args.options(settings);
    // Console echo would corrupt JSON output
    let echo = settings.debug_mode && format == OutputFormat::Text;
    let sweeper = RetentionSweeper::new(TracingSink::new("CleanUp Handler")).debug_mode(echo);

    let report = sweeper.run(dirs, &options)?;
    print_report(&report, format)?;

    let failed = report.failed_count();
    if failed > 0 {
        return Err(ExitError::partial(failed).into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "clean_tests.rs"]
mod tests;
