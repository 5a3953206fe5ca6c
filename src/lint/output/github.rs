//! Workflow-command annotation formatter.
//!
//! Emits one `::<severity> file=<path>,line=<N>,title=<title>::<message>`
//! line per diagnostic, which CI runners render as inline annotations.

use super::{LintFormatter, Summary};
use crate::lint::Diagnostic;
use std::io::Write;
use std::path::Path;

/// Formats diagnostics as CI annotations.
#[derive(Debug, Default)]
pub struct GithubFormatter;

impl GithubFormatter {
    /// Create a new annotation formatter.
    pub fn new() -> Self {
        Self
    }

    /// Render a single annotation line (without trailing newline).
    pub fn annotation(file: &Path, diag: &Diagnostic) -> String {
        let file = escape_property(&file.display().to_string());
        let location = match diag.line {
            Some(line) => format!("file={},line={}", file, line),
            None => format!("file={}", file),
        };
        format!(
            "::{} {},title={}::{}",
            diag.severity,
            location,
            escape_property(diag.category.title()),
            escape_data(&diag.message)
        )
    }
}

impl LintFormatter for GithubFormatter {
    fn format<W: Write>(
        &self,
        file: &Path,
        diagnostics: &[Diagnostic],
        summary: &Summary,
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            writeln!(writer, "{}", Self::annotation(file, diag))?;
        }

        if let Some(ref notice) = summary.notice {
            writeln!(writer, "{}", notice)?;
        }

        writeln!(writer, "{}", summary.message)
    }
}

/// Escape the message part of a workflow command.
fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a `key=value` property of a workflow command.
fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
