// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sm-cleanup: retention sweeps for the script manager working tree
//!
//! Four independent passes, each best-effort:
//! - bytecode cache folders under the application roots
//! - the downloaded custom driver folder
//! - log files past the retention window
//! - leftover CSV downloads

mod error;
mod report;
mod sweeper;

pub use error::CleanupError;
pub use report::{SweepOutcome, SweepReport};
pub use sweeper::{creation_time, RetentionSweeper, SweepOptions, CACHE_DIR_NAME};
