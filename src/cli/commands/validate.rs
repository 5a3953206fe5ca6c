//! Validate command implementation.
//!
//! Runs the validator and writes its diagnostics in the requested format.

use std::io::Write;

use crate::error::Result;
use crate::lint::{
    Diagnostic, GithubFormatter, JsonFormatter, LintFormatter, OutputFormat, Summary,
};
use crate::validate::{run, ValidatorOptions};

/// Printed after the single diagnostic of an aborted run.
const ABORTED_MESSAGE: &str = "Validation aborted: required input could not be loaded.";

/// The validate command implementation.
pub struct ValidateCommand {
    options: ValidatorOptions,
    format: OutputFormat,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(options: ValidatorOptions, format: OutputFormat) -> Self {
        Self { options, format }
    }

    fn write_output(
        &self,
        diagnostics: &[Diagnostic],
        summary: &Summary,
        mut out: &mut dyn Write,
    ) -> std::io::Result<()> {
        let file = &self.options.file_path;
        match self.format {
            OutputFormat::Github => {
                GithubFormatter::new().format(file, diagnostics, summary, &mut out)
            }
            OutputFormat::Json => {
                JsonFormatter::new().format(file, diagnostics, summary, &mut out)
            }
        }
    }

    /// Run the validation and write its report to `out`.
    ///
    /// Returns the process exit code. Missing or unreadable inputs are
    /// reported as a single error diagnostic rather than an `Err`; only a
    /// failure to write the report is returned as an error.
    pub fn execute(&self, out: &mut dyn Write) -> Result<i32> {
        let (diagnostics, summary) = match run(&self.options) {
            Ok(report) => (
                report.diagnostics(),
                report.summary(self.options.fail_on_warnings),
            ),
            Err(e) => {
                tracing::debug!("Aborting run: {}", e);
                let summary = Summary {
                    errors: 1,
                    warnings: 0,
                    exit_code: 1,
                    message: ABORTED_MESSAGE.to_string(),
                    notice: None,
                };
                (vec![Diagnostic::error(e.to_string())], summary)
            }
        };

        self.write_output(&diagnostics, &summary, out)?;
        out.flush()?;
        Ok(summary.exit_code)
    }
}
