// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sm-csv: find, read, write and update CSV files exchanged by scripts

mod error;
mod files;
mod table;

pub use error::CsvError;
pub use files::{extract_csv, find_csv_file, save_table, save_to_csv, update_csv_entry, EntryStatus};
pub use table::CsvTable;
