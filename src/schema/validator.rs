//! Value validation against schema fragments.
//!
//! Built-in definitions (`severity`, `bool`, `value_with_severity`, `any`)
//! have fixed semantics. Other `$ref`s are resolved one level through the
//! schema's definitions; an unresolved reference accepts any value.

use std::fmt;

use super::fragment::{DefinitionRef, InlineConstraint, SchemaFragment};
use super::Schema;
use crate::analyzers::AnalyzerSeverity;

/// A value that failed its constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueError {
    pub key: String,
    pub value: String,
    /// What was expected, phrased for someone editing the file.
    pub reason: String,
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid value for '{}': {}", self.key, self.reason)
    }
}

impl std::error::Error for ValueError {}

/// Check `value` of `key` against `fragment`.
pub fn validate_value(
    schema: &Schema,
    key: &str,
    value: &str,
    fragment: &SchemaFragment,
) -> Result<(), ValueError> {
    let outcome = match fragment {
        SchemaFragment::Ref(DefinitionRef::Named(name)) => match schema.definition(name) {
            Some(SchemaFragment::Ref(DefinitionRef::Named(_))) | None => {
                tracing::debug!("Unresolved definition '{}' for key '{}'", name, key);
                Ok(())
            }
            Some(SchemaFragment::Ref(builtin)) => check_builtin(builtin, value),
            Some(SchemaFragment::Inline(inline)) => check_inline(inline, value),
        },
        SchemaFragment::Ref(builtin) => check_builtin(builtin, value),
        SchemaFragment::Inline(inline) => check_inline(inline, value),
    };

    outcome.map_err(|reason| ValueError {
        key: key.to_string(),
        value: value.to_string(),
        reason,
    })
}

/// Check `value` against the analyzer severity vocabulary.
pub fn check_severity(value: &str) -> Result<(), String> {
    value
        .parse::<AnalyzerSeverity>()
        .map(|_| ())
        .map_err(|e| format!("{}; expected one of {}", e, AnalyzerSeverity::vocabulary()))
}

fn check_builtin(reference: &DefinitionRef, value: &str) -> Result<(), String> {
    match reference {
        DefinitionRef::Severity => check_severity(value),
        DefinitionRef::ValueWithSeverity => check_value_with_severity(value),
        DefinitionRef::Bool => check_bool(value),
        DefinitionRef::Any | DefinitionRef::Named(_) => Ok(()),
    }
}

fn check_value_with_severity(value: &str) -> Result<(), String> {
    let (base, severity) = match value.split_once(':') {
        Some((base, severity)) => (base, Some(severity)),
        None => (value, None),
    };

    let severity_ok = severity.is_none_or(|s| s.parse::<AnalyzerSeverity>().is_ok());
    if !base.is_empty() && severity_ok {
        return Ok(());
    }

    Err(format!(
        "'{}' must be a value optionally suffixed with :severity where severity is one of {}",
        value,
        AnalyzerSeverity::vocabulary()
    ))
}

fn check_bool(value: &str) -> Result<(), String> {
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        Ok(())
    } else {
        Err(format!("boolean expected (true/false), got '{}'", value))
    }
}

fn check_inline(inline: &InlineConstraint, value: &str) -> Result<(), String> {
    // Only string-typed (or untyped) fragments constrain the value
    if !matches!(inline.ty.as_deref(), None | Some("string")) {
        return Ok(());
    }

    if let Some(allowed) = inline.allowed.as_deref().filter(|a| !a.is_empty()) {
        if allowed.iter().any(|a| a == value) {
            return Ok(());
        }
        return Err(format!(
            "value must be one of [{}], got '{}'",
            allowed.join(", "),
            value
        ));
    }

    if let Some(pattern) = &inline.pattern {
        // An uncompilable pattern accepts everything
        let Some(re) = &pattern.regex else {
            return Ok(());
        };
        if re.is_match(value) {
            return Ok(());
        }
        return Err(format!(
            "value '{}' does not match pattern /{}/",
            value, pattern.source
        ));
    }

    Ok(())
}
