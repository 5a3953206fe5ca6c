//! Analyzer severity vocabulary.

use std::fmt;
use std::str::FromStr;

/// Strictness level an `.editorconfig` assigns to an analyzer rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzerSeverity {
    None,
    Silent,
    Suggestion,
    Warning,
    Error,
    Default,
}

impl AnalyzerSeverity {
    /// Every accepted severity, in documentation order.
    pub const ALL: [AnalyzerSeverity; 6] = [
        AnalyzerSeverity::None,
        AnalyzerSeverity::Silent,
        AnalyzerSeverity::Suggestion,
        AnalyzerSeverity::Warning,
        AnalyzerSeverity::Error,
        AnalyzerSeverity::Default,
    ];

    /// Lowercase token as written in `.editorconfig` files.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyzerSeverity::None => "none",
            AnalyzerSeverity::Silent => "silent",
            AnalyzerSeverity::Suggestion => "suggestion",
            AnalyzerSeverity::Warning => "warning",
            AnalyzerSeverity::Error => "error",
            AnalyzerSeverity::Default => "default",
        }
    }

    /// Human-readable list of accepted tokens, e.g. `[none, silent, ...]`.
    pub fn vocabulary() -> String {
        let names: Vec<_> = Self::ALL.iter().map(|s| s.as_str()).collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for AnalyzerSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is not a known severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSeverity(pub String);

impl fmt::Display for UnknownSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid severity '{}'", self.0)
    }
}

impl std::error::Error for UnknownSeverity {}

impl FromStr for AnalyzerSeverity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sev| sev.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}
