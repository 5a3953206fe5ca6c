//! Validation results and exit status.

use std::collections::BTreeSet;

use crate::lint::{Diagnostic, Summary};

/// Printed when rule IDs were used but no reference list could be loaded.
pub const SKIPPED_NOTICE: &str =
    "Known-rule reference lists unavailable; skipping analyzer ID verification.";

/// Outcome of cross-checking rule IDs against reference lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RuleCheck {
    /// No `dotnet_diagnostic.<RULE>.severity` keys were seen.
    #[default]
    NotNeeded,
    /// Rule IDs were seen but no reference list was available.
    Skipped,
    /// Rule IDs were compared against `known` reference IDs.
    Checked { known: usize, missing: Vec<String> },
}

/// Everything a run found, grouped in reporting order.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub parse_errors: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    /// Uppercased rule IDs from `dotnet_diagnostic.<RULE>.severity` keys.
    pub used_rules: BTreeSet<String>,
    pub rule_check: RuleCheck,
}

impl ValidationReport {
    /// Parse errors, then validation errors, then warnings.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.parse_errors
            .iter()
            .chain(&self.errors)
            .chain(&self.warnings)
            .cloned()
            .collect()
    }

    /// Number of diagnostics that are always fatal.
    pub fn error_count(&self) -> usize {
        self.parse_errors.len() + self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Process exit status for this report.
    pub fn exit_code(&self, fail_on_warnings: bool) -> i32 {
        let fatal = self.error_count() > 0 || (fail_on_warnings && self.warning_count() > 0);
        i32::from(fatal)
    }

    /// Summary line and notice for the branch taken.
    pub fn summary(&self, fail_on_warnings: bool) -> Summary {
        let errors = self.error_count();
        let warnings = self.warning_count();

        let message = if errors > 0 {
            format!(
                "Validation failed: {} error(s), {} warning(s).",
                errors, warnings
            )
        } else if fail_on_warnings && warnings > 0 {
            format!(
                "Validation failed: {} warning(s) treated as errors.",
                warnings
            )
        } else {
            "Validation completed: no fatal schema violations.".to_string()
        };

        let notice =
            matches!(self.rule_check, RuleCheck::Skipped).then(|| SKIPPED_NOTICE.to_string());

        Summary {
            errors,
            warnings,
            exit_code: self.exit_code(fail_on_warnings),
            message,
            notice,
        }
    }
}
