// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use console::{style, Style};
use std::io::{self, Write};

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Whether this is an error (true) or warning (false).
    pub is_error: bool,
    /// Line of the commit message the issue refers to.
    pub line: Option<usize>,
}

impl ValidationIssue {
    /// A failing issue.
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            suggestion: None,
            is_error: true,
            line: None,
        }
    }

    /// An advisory issue.
    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self {
            is_error: false,
            ..Self::error(code, message)
        }
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach a line number (1-based).
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let location = self
            .line
            .map(|line| format!(" (line {})", line))
            .unwrap_or_default();

        let mut output = format!(
            "{} {}{} {}",
            prefix,
            code_style.apply_to(&self.code),
            location,
            self.message
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

/// One entry of a report, in the order it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportItem {
    /// A finding.
    Issue(ValidationIssue),
    /// Free-form guidance printed verbatim.
    Guidance(String),
}

/// Result of validating one commit.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Abbreviated id of the validated commit.
    pub commit_id: Option<String>,
    /// Subject of the validated commit.
    pub subject: Option<String>,
    /// Findings and guidance.
    pub items: Vec<ReportItem>,
    /// Set when a check rejected the commit.
    pub failed: bool,
}

impl ValidationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue.
    pub fn push_issue(&mut self, issue: ValidationIssue) {
        tracing::debug!(code = %issue.code, error = issue.is_error, "{}", issue.message);
        self.items.push(ReportItem::Issue(issue));
    }

    /// Record a guidance block.
    pub fn push_guidance(&mut self, text: impl Into<String>) {
        self.items.push(ReportItem::Guidance(text.into()));
    }

    /// All recorded issues.
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.items.iter().filter_map(|item| match item {
            ReportItem::Issue(issue) => Some(issue),
            ReportItem::Guidance(_) => None,
        })
    }

    /// Failing issues.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues().filter(|issue| issue.is_error)
    }

    /// Advisory issues.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues().filter(|issue| !issue.is_error)
    }

    /// Whether an issue with this code was recorded.
    pub fn has_code(&self, code: &str) -> bool {
        self.issues().any(|issue| issue.code == code)
    }

    /// Record that a check rejected the commit.
    pub fn fail(&mut self) {
        self.failed = true;
    }

    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        !self.failed
    }

    /// Process exit status: 0 when valid, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_valid() {
            0
        } else {
            1
        }
    }

    /// Write the report as text.
    ///
    /// With `header` set, the commit being checked is announced first.
    pub fn write_text<W: Write>(&self, out: &mut W, header: bool) -> io::Result<()> {
        if header {
            if let Some(ref id) = self.commit_id {
                writeln!(
                    out,
                    "Checking commit: {} {}",
                    style(id).cyan(),
                    self.subject.as_deref().unwrap_or("")
                )?;
            }
        }

        for item in &self.items {
            match item {
                ReportItem::Issue(issue) => writeln!(out, "{}", issue.format())?,
                ReportItem::Guidance(text) => writeln!(out, "{}", text)?,
            }
        }

        Ok(())
    }

    /// Print the report to stdout.
    pub fn print(&self, header: bool) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_text(&mut stdout, header)?;
        stdout.flush()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        let errors = self.errors().count();
        let warnings = self.warnings().count();
        if self.is_valid() {
            if warnings == 0 {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", warnings)
            }
        } else {
            format!("Invalid ({} errors, {} warnings)", errors, warnings)
        }
    }
}
