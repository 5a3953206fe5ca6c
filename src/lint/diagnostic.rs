//! Lint diagnostic messages.
//!
//! This module provides the [`Diagnostic`] type for representing problems
//! found while validating a file, along with its [`Severity`] and the
//! fixed [`Category`] used as the annotation title.

use std::fmt;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Fatal only when warnings are escalated.
    Warning,
    /// Always fatal to the run's exit status.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What kind of problem a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A line that could not be parsed.
    Parse,
    /// A value that violates its schema constraint.
    Schema,
    /// Something suspicious but not invalid.
    Advisory,
}

impl Category {
    /// Annotation title shown by the CI system.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Parse => ".editorconfig parse error",
            Category::Schema => ".editorconfig error",
            Category::Advisory => ".editorconfig warning",
        }
    }
}

/// A single problem found in the file under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line number (1-indexed), if known.
    pub line: Option<usize>,
    pub severity: Severity,
    pub category: Category,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// A line that could not be parsed.
    pub fn parse_error(line: usize, raw: &str) -> Self {
        Self {
            line: Some(line),
            severity: Severity::Error,
            category: Category::Parse,
            message: format!("Unrecognized line: {}", raw),
        }
    }

    /// An error without a line; attach one with [`Diagnostic::at_line`].
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            line: None,
            severity: Severity::Error,
            category: Category::Schema,
            message: message.into(),
        }
    }

    /// A warning without a line; attach one with [`Diagnostic::at_line`].
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            line: None,
            severity: Severity::Warning,
            category: Category::Advisory,
            message: message.into(),
        }
    }

    /// Attach a line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}
