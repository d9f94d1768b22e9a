// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help text and housekeeping reports

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

/// ANSI 256 palette
pub mod palette {
    /// Headings and directory labels
    pub const LABEL: u8 = 74;
    /// Flags and placeholders in help output
    pub const FLAG: u8 = 250;
    /// Removed entries
    pub const REMOVED: u8 = 108;
    /// Kept or unconfigured entries
    pub const KEPT: u8 = 240;
    /// Failure counts
    pub const FAILED: u8 = 167;
}

const RESET: &str = "\x1b[0m";

/// `NO_COLOR=1` wins over `COLOR=1`, which wins over the TTY check.
pub fn enabled() -> bool {
    let set = |key: &str| std::env::var(key).is_ok_and(|v| v == "1");
    if set("NO_COLOR") {
        return false;
    }
    set("COLOR") || std::io::stdout().is_terminal()
}

pub fn styles() -> Styles {
    if !enabled() {
        return Styles::plain();
    }
    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    Styles::styled()
        .header(fg(palette::LABEL))
        .usage(fg(palette::LABEL))
        .literal(fg(palette::FLAG))
        .placeholder(fg(palette::FLAG))
}

fn paint(code: u8, text: &str) -> String {
    if enabled() {
        format!("\x1b[38;5;{code}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn label(text: &str) -> String {
    paint(palette::LABEL, text)
}

pub fn removed(text: &str) -> String {
    paint(palette::REMOVED, text)
}

pub fn kept(text: &str) -> String {
    paint(palette::KEPT, text)
}

pub fn failed(text: &str) -> String {
    paint(palette::FAILED, text)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
