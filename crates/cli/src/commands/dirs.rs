// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sm dirs` - Show (and optionally create) the directory layout

use anyhow::Result;
use clap::Args;
use sm_core::{AppDirectories, DirectoryResolver};

use crate::output::{print_paths, OutputFormat};

#[derive(Args, Debug, Default)]
pub struct DirsArgs {
    /// Create the root and its standard subdirectories
    #[arg(long)]
    pub create: bool,
}

pub fn handle(args: DirsArgs, dirs: &AppDirectories, format: OutputFormat) -> Result<()> {
    if args.create {
        dirs.ensure()?;
    }
    let entries = [
        ("root", dirs.root()),
        ("internal", dirs.internal_root()),
        ("logs", dirs.logs()),
        ("downloads", dirs.downloads()),
        ("driver", dirs.driver_dir()),
    ];
    print_paths(&entries, format)
}
