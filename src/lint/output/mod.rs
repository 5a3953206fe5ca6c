//! Lint output formatters.
//!
//! This module provides formatters for writing diagnostics either as CI
//! workflow-command annotations or as a JSON document.

pub mod github;
pub mod json;

use crate::lint::Diagnostic;
use std::io::Write;
use std::path::Path;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `::error file=...::message` workflow commands
    #[default]
    Github,
    /// A single JSON document
    Json,
}

/// End-of-run information printed after the diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
    /// One-line human-readable verdict.
    pub message: String,
    /// Informational note, e.g. when a check was skipped.
    pub notice: Option<String>,
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format diagnostics for `file` to the given writer.
    fn format<W: Write>(
        &self,
        file: &Path,
        diagnostics: &[Diagnostic],
        summary: &Summary,
        writer: &mut W,
    ) -> std::io::Result<()>;
}

pub use github::GithubFormatter;
pub use json::JsonFormatter;
