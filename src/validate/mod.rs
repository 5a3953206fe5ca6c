//! End-to-end validation of a configuration file.
//!
//! A run moves through these stages:
//!
//! 1. Load the schema (fatal on failure)
//! 2. Load the file under test (fatal on failure)
//! 3. Parse every line, collecting parse errors
//! 4. Validate every entry against the schema and analyzer key conventions
//! 5. If any `dotnet_diagnostic.<RULE>.severity` keys were seen, fetch the
//!    reference lists and warn about rule IDs they do not mention
//!
//! The result is a [`ValidationReport`]; rendering and exit status are
//! derived from it afterwards.

mod report;

use std::path::{Path, PathBuf};

use crate::analyzers::{fetch_known_rules, KnownRuleSet};
use crate::editorconfig::{keys, parse, ParsedEntry};
use crate::error::{Result, ValidatorError};
use crate::lint::Diagnostic;
use crate::schema::{validate_value, validator::check_severity, Schema, ValueError};

pub use report::{RuleCheck, ValidationReport, SKIPPED_NOTICE};

/// Inputs of a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Path to the JSON schema document.
    pub schema_path: PathBuf,
    /// Path to the file under test.
    pub file_path: PathBuf,
    /// Reference lists of known analyzer rule IDs.
    pub known_rules_urls: Vec<String>,
    /// Treat warnings as fatal.
    pub fail_on_warnings: bool,
}

/// Validates configuration text against a loaded schema.
pub struct Validator {
    schema: Schema,
}

impl Validator {
    /// Create a validator for an already-loaded schema.
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Load the schema named in `options`.
    pub fn load(options: &ValidatorOptions) -> Result<Self> {
        let schema = Schema::load(&options.schema_path)?;
        tracing::debug!(
            "Loaded schema {} with {} patterns",
            options.schema_path.display(),
            schema.pattern_count()
        );
        Ok(Self::new(schema))
    }

    /// Parse and validate `text` without consulting reference lists.
    pub fn validate(&self, text: &str) -> ValidationReport {
        let parsed = parse(text);
        let mut report = ValidationReport {
            parse_errors: parsed
                .errors
                .iter()
                .map(|e| Diagnostic::parse_error(e.line, &e.raw))
                .collect(),
            ..ValidationReport::default()
        };

        for entry in &parsed.entries {
            self.validate_entry(entry, &mut report);
        }

        tracing::debug!(
            "Validated {} entries: {} parse error(s), {} error(s), {} warning(s)",
            parsed.entries.len(),
            report.parse_errors.len(),
            report.errors.len(),
            report.warnings.len()
        );
        report
    }

    fn validate_entry(&self, entry: &ParsedEntry, report: &mut ValidationReport) {
        let key = entry.key.as_str();
        let mut value_reported = false;

        if let Some(rule) = keys::diagnostic_rule_id(key) {
            report.used_rules.insert(rule);
            if let Err(reason) = check_severity(&entry.value) {
                let err = ValueError {
                    key: key.to_string(),
                    value: entry.value.clone(),
                    reason,
                };
                report
                    .errors
                    .push(Diagnostic::error(err.to_string()).at_line(entry.line));
                value_reported = true;
            }
        } else if keys::is_malformed_analyzer_key(key) {
            report.warnings.push(
                Diagnostic::warning(format!(
                    "Key '{}' looks like a malformed analyzer key; expected dotnet_diagnostic.<RULE>.severity",
                    key
                ))
                .at_line(entry.line),
            );
        }

        match self.schema.match_key(key) {
            Some(fragment) => {
                if let Err(err) = validate_value(&self.schema, key, &entry.value, fragment) {
                    // The analyzer check above already reported this value
                    if !value_reported {
                        report
                            .errors
                            .push(Diagnostic::error(err.to_string()).at_line(entry.line));
                    }
                }
            }
            None if keys::has_namespace_prefix(key) => {
                report.warnings.push(
                    Diagnostic::warning(format!(
                        "Unrecognized dotnet/csharp key '{}'. Not in schema - consider adding it.",
                        key
                    ))
                    .at_line(entry.line),
                );
            }
            None => {
                tracing::debug!("Accepting unmatched key '{}' on line {}", key, entry.line);
            }
        }
    }

    /// Warn about used rule IDs missing from `known`.
    ///
    /// An empty `known` set skips the check rather than failing it.
    pub fn check_rules(report: &mut ValidationReport, text: &str, known: &KnownRuleSet) {
        if report.used_rules.is_empty() {
            report.rule_check = RuleCheck::NotNeeded;
            return;
        }
        if known.is_empty() {
            tracing::debug!("No reference lists available; skipping rule ID check");
            report.rule_check = RuleCheck::Skipped;
            return;
        }

        let missing: Vec<String> = report
            .used_rules
            .iter()
            .filter(|rule| !known.contains(rule))
            .cloned()
            .collect();

        for rule in &missing {
            let line = find_rule_line(text, rule).unwrap_or(1);
            report.warnings.push(
                Diagnostic::warning(format!(
                    "Referenced analyzer '{}' not found in upstream lists; verify rule ID.",
                    rule
                ))
                .at_line(line),
            );
        }

        report.rule_check = RuleCheck::Checked {
            known: known.len(),
            missing,
        };
    }
}

/// First line whose text mentions the severity key for `rule`.
fn find_rule_line(text: &str, rule: &str) -> Option<usize> {
    let needle = keys::diagnostic_key_for(rule).to_ascii_lowercase();
    text.lines()
        .position(|line| line.to_ascii_lowercase().contains(&needle))
        .map(|idx| idx + 1)
}

/// Read the file under test, replacing invalid UTF-8.
pub fn read_config_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|_| ValidatorError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Run the whole pipeline described by `options`.
///
/// Returns an error only for the unrecoverable preconditions: a missing or
/// malformed schema and a missing file.
pub fn run(options: &ValidatorOptions) -> Result<ValidationReport> {
    let validator = Validator::load(options)?;
    let text = read_config_file(&options.file_path)?;

    let mut report = validator.validate(&text);

    let known = if report.used_rules.is_empty() {
        KnownRuleSet::new()
    } else {
        tracing::debug!(
            "Checking {} rule ID(s) against {} reference list(s)",
            report.used_rules.len(),
            options.known_rules_urls.len()
        );
        fetch_known_rules(&options.known_rules_urls)
    };
    Validator::check_rules(&mut report, &text, &known);

    Ok(report)
}

#[cfg(test)]
mod tests;
