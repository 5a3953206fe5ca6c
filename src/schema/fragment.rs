//! Schema constraint fragments.
//!
//! A fragment is either a `$ref` to a shared definition or an inline
//! constraint with optional `type`, `enum` and `pattern` members.

use regex::Regex;
use serde_json::Value;

/// Target of a `$ref` (`#/definitions/<name>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionRef {
    /// One of the six analyzer severity tokens.
    Severity,
    /// `true` or `false`.
    Bool,
    /// `<value>` or `<value>:<severity>`.
    ValueWithSeverity,
    /// Anything.
    Any,
    /// Any other definition name, resolved through the definitions table.
    Named(String),
}

impl DefinitionRef {
    /// Classify a `$ref` string by its final path segment.
    pub fn from_ref(reference: &str) -> Self {
        let name = reference.rsplit('/').next().unwrap_or(reference);
        match name {
            "severity" => DefinitionRef::Severity,
            "bool" => DefinitionRef::Bool,
            "value_with_severity" => DefinitionRef::ValueWithSeverity,
            "any" => DefinitionRef::Any,
            other => DefinitionRef::Named(other.to_string()),
        }
    }
}

/// An inline `pattern`, compiled anchored at the start of the value.
#[derive(Debug, Clone)]
pub struct FragmentPattern {
    /// The pattern as written in the schema.
    pub source: String,
    /// `None` if the pattern is not a valid regular expression.
    pub regex: Option<Regex>,
}

impl FragmentPattern {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let regex = compile_anchored(&source);
        Self { source, regex }
    }
}

/// Inline constraint members.
#[derive(Debug, Clone, Default)]
pub struct InlineConstraint {
    /// The `type` member (`string`, `integer`, ...).
    pub ty: Option<String>,
    /// The `enum` member: a closed set of allowed literals.
    pub allowed: Option<Vec<String>>,
    /// The `pattern` member.
    pub pattern: Option<FragmentPattern>,
}

/// A constraint node from the schema.
#[derive(Debug, Clone)]
pub enum SchemaFragment {
    Ref(DefinitionRef),
    Inline(InlineConstraint),
}

impl SchemaFragment {
    /// Build a fragment from its JSON form.
    ///
    /// Anything that is not an object is treated as an unconstrained
    /// inline fragment.
    pub fn from_json(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return SchemaFragment::Inline(InlineConstraint::default());
        };

        if let Some(reference) = obj.get("$ref").and_then(Value::as_str) {
            return SchemaFragment::Ref(DefinitionRef::from_ref(reference));
        }

        let ty = obj.get("type").and_then(Value::as_str).map(String::from);
        let allowed = obj.get("enum").and_then(Value::as_array).map(|values| {
            values
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        });
        let pattern = obj
            .get("pattern")
            .and_then(Value::as_str)
            .map(FragmentPattern::new);

        SchemaFragment::Inline(InlineConstraint {
            ty,
            allowed,
            pattern,
        })
    }
}

/// Compile `pattern` so it only matches at the start of the input.
pub(crate) fn compile_anchored(pattern: &str) -> Option<Regex> {
    match Regex::new(&format!("^(?:{})", pattern)) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("Ignoring schema pattern /{}/ that does not compile: {}", pattern, e);
            None
        }
    }
}
