// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sm-core: shared collaborators for the script manager housekeeping crates

pub mod clock;
pub mod directories;
pub mod env;
pub mod settings;
pub mod sink;

pub use clock::{Clock, SystemClock};
pub use directories::{AppDirectories, DirectoryError, DirectoryResolver};
pub use settings::{Settings, SettingsError, DEFAULT_LOG_RETENTION_DAYS};
pub use sink::{Event, EventSink, Level, TracingSink};

#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
#[cfg(any(test, feature = "test-support"))]
pub use sink::FakeSink;
