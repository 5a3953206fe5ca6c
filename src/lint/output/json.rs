//! JSON output formatter.
//!
//! Formats diagnostics as machine-readable JSON for tooling integration.

use super::{LintFormatter, Summary};
use crate::lint::{Category, Diagnostic};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Formats lint output as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    file: String,
    diagnostics: Vec<JsonDiagnostic<'a>>,
    summary: JsonSummary<'a>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    severity: String,
    category: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    total: usize,
    errors: usize,
    warnings: usize,
    exit_code: i32,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<&'a str>,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn category_to_string(category: Category) -> &'static str {
        match category {
            Category::Parse => "parse",
            Category::Schema => "schema",
            Category::Advisory => "advisory",
        }
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        file: &Path,
        diagnostics: &[Diagnostic],
        summary: &Summary,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            file: file.display().to_string(),
            diagnostics: diagnostics
                .iter()
                .map(|d| JsonDiagnostic {
                    severity: d.severity.to_string(),
                    category: Self::category_to_string(d.category),
                    message: &d.message,
                    line: d.line,
                })
                .collect(),
            summary: JsonSummary {
                total: diagnostics.len(),
                errors: summary.errors,
                warnings: summary.warnings,
                exit_code: summary.exit_code,
                message: &summary.message,
                notice: summary.notice.as_deref(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}
