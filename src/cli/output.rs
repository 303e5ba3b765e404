use console::style;

use super::colors::{ColorSupport, HmsStyles};
use crate::error::HmsError;

const RULE_WIDTH: usize = 60;

/// Console trace for a workflow run. Diagnostic only.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    quiet: bool,
}

impl Console {
    #[must_use]
    pub fn new(color: ColorSupport) -> Self {
        color.apply();
        Self { quiet: false }
    }

    /// Console that prints nothing.
    #[must_use]
    pub const fn silent() -> Self {
        Self { quiet: true }
    }

    pub fn heading(&self, text: &str) {
        self.line(&format!("\n{}", style(text).bold()));
    }

    pub fn step(&self, number: usize, title: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        self.line(&format!("\n{}", HmsStyles::banner(&rule)));
        self.line(&HmsStyles::banner(&format!("STEP {number}: {title}")).to_string());
        self.line(&HmsStyles::banner(&rule).to_string());
    }

    pub fn success(&self, message: &str) {
        self.line(&HmsStyles::success(&format!("✓ {message}")).to_string());
    }

    pub fn error(&self, message: &str) {
        self.line(&HmsStyles::error(&format!("✗ {message}")).to_string());
    }

    pub fn info(&self, message: &str) {
        self.line(&HmsStyles::info(&format!("→ {message}")).to_string());
    }

    pub fn raw(&self, text: &str) {
        self.line(text);
    }

    /// Reports a terminal error the moment it surfaces.
    pub fn failure(&self, err: &HmsError) {
        match err {
            HmsError::UnexpectedStatus { step, status, .. } => {
                self.error(&format!("Failed to {step}: {status}"));
                if let Some(body) = err.response_body() {
                    self.raw(&body);
                }
            }
            HmsError::Connection { base_url, .. } => {
                self.error(&format!("Could not connect to {base_url}"));
                self.info("Make sure all services are running (./start-local.sh)");
            }
            HmsError::MissingField { .. } | HmsError::Verification { .. } => {
                self.error(&err.to_string());
            }
            HmsError::Config(message) => self.error(&format!("Invalid configuration: {message}")),
            other => self.error(&format!("Unexpected error: {other}")),
        }
    }

    pub fn completed(&self, layout: HumanLayout) {
        let rule = "=".repeat(RULE_WIDTH);
        self.line(&format!("\n{}", HmsStyles::headline(&rule)));
        self.line(&HmsStyles::headline("WORKFLOW COMPLETED SUCCESSFULLY!").to_string());
        self.line(&HmsStyles::headline(&rule).to_string());
        self.line(&layout.build());
    }

    fn line(&self, text: &str) {
        if !self.quiet {
            println!("{text}");
        }
    }
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 22,
        }
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(String::new());
        self.lines.push(style(text).bold().to_string());
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        // pad before styling so escape codes don't eat the width
        let padded = format!("{key:width$}", width = self.key_width);
        self.lines.push(format!("  {} {value}", style(padded).dim()));
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}
