// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes returned through `anyhow`.
//!
//! `main()` downcasts to [`ExitError`], prints its message to stderr and
//! exits with its code. Any other error exits with 1.

use thiserror::Error;

/// A sweep finished but some entries could not be removed
pub const EXIT_PARTIAL: i32 = 2;
/// No CSV file matched the request
pub const EXIT_NOT_FOUND: i32 = 3;

#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn partial(failed: usize) -> Self {
        Self::new(EXIT_PARTIAL, format!("{failed} item(s) could not be removed"))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(EXIT_NOT_FOUND, message)
    }
}
