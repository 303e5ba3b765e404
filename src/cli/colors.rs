//! Color support detection for console trace output
//!
//! Respects `NO_COLOR`, `FORCE_COLOR`, `TERM=dumb` and whether stdout is a
//! terminal.

use std::io::IsTerminal;

use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    /// No color support (NO_COLOR set, TERM=dumb, piped output)
    None,
    /// ANSI colors
    Basic,
}

impl ColorSupport {
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    /// Detection with the environment and terminal check injected.
    pub fn from_env<F>(lookup: F, is_terminal: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // https://no-color.org/
        if lookup("NO_COLOR").is_some() {
            return Self::None;
        }
        if lookup("FORCE_COLOR").is_some() {
            return Self::Basic;
        }
        if !is_terminal {
            return Self::None;
        }
        if lookup("TERM").is_some_and(|term| term == "dumb") {
            return Self::None;
        }
        Self::Basic
    }

    #[must_use]
    pub const fn has_color(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Applies this level to both `colored` and `console` styling.
    pub fn apply(self) {
        colored::control::set_override(self.has_color());
        console::set_colors_enabled(self.has_color());
    }
}

pub struct HmsStyles;

impl HmsStyles {
    #[must_use]
    pub fn banner(text: &str) -> ColoredString {
        text.blue().bold()
    }

    #[must_use]
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    #[must_use]
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    #[must_use]
    pub fn info(text: &str) -> ColoredString {
        text.yellow()
    }

    #[must_use]
    pub fn headline(text: &str) -> ColoredString {
        text.green().bold()
    }
}
