// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event sink: the logging collaborator handed to housekeeping components.
//!
//! Components never construct a logger themselves. They receive an
//! [`EventSink`] and call [`EventSink::record`] once per notable outcome,
//! which keeps them deterministic under test via [`FakeSink`].

use std::collections::BTreeMap;

/// Severity of a recorded event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single housekeeping event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub level: Level,
    pub message: String,
    /// Structured context (e.g. `"error" => "Permission denied"`)
    pub details: BTreeMap<String, String>,
    /// Also print the message to the console
    pub echo: bool,
}

impl Event {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), details: BTreeMap::new(), echo: false }
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(Level::Debug, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn detail(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.details.insert(key.into(), value.to_string());
        self
    }

    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

/// Receives housekeeping events
pub trait EventSink {
    fn record(&self, event: Event);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn record(&self, event: Event) {
        (**self).record(event)
    }
}

/// Sink that forwards events to `tracing`, tagged with a component name.
///
/// Echoed events are additionally written to stdout so they show up in the
/// terminal even when the subscriber filters them out.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    component: &'static str,
}

impl TracingSink {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl EventSink for TracingSink {
    fn record(&self, event: Event) {
        let component = self.component;
        let details = &event.details;
        let message = &event.message;
        match event.level {
            Level::Debug => tracing::debug!(component, ?details, "{message}"),
            Level::Info => tracing::info!(component, ?details, "{message}"),
            Level::Warn => tracing::warn!(component, ?details, "{message}"),
            Level::Error => tracing::error!(component, ?details, "{message}"),
        }
        if event.echo {
            println!("[{component}] {message}");
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{Event, EventSink, Level};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Recording sink for testing
    #[derive(Clone, Default)]
    pub struct FakeSink {
        events: Arc<Mutex<Vec<Event>>>,
    }

    impl FakeSink {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded events
        pub fn events(&self) -> Vec<Event> {
            self.events.lock().clone()
        }

        /// Recorded events at the given level
        pub fn at(&self, level: Level) -> Vec<Event> {
            self.events.lock().iter().filter(|e| e.level == level).cloned().collect()
        }

        pub fn is_empty(&self) -> bool {
            self.events.lock().is_empty()
        }
    }

    impl EventSink for FakeSink {
        fn record(&self, event: Event) {
            self.events.lock().push(event);
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSink;

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
