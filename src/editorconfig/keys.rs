//! Naming conventions for .NET analyzer keys.
//!
//! Recognizes `dotnet_diagnostic.<RULE>.severity` keys, the other accepted
//! severity-bearing key shapes, and the namespace prefixes that make an
//! unmatched key suspicious.

use std::sync::LazyLock;

use regex::Regex;

static DIAGNOSTIC_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^dotnet_diagnostic\.([A-Za-z0-9_]+)\.severity$")
        .expect("diagnostic key regex is valid")
});

static ACCEPTED_SEVERITY_KEYS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^dotnet_naming_rule\.[^.]+\.severity$",
        r"(?i)^dotnet_analyzer_diagnostic\.severity$",
        r"(?i)^dotnet_analyzer_diagnostic\.category-[A-Za-z]+\.severity$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("accepted key regex is valid"))
    .collect()
});

/// Tokens that mark a key as belonging to the .NET tool family.
const NAMESPACE_TOKENS: &[&str] = &["dotnet_", "csharp_", "visual_basic_"];

/// Prefixes that make an unmatched key worth a warning.
const NAMESPACE_PREFIXES: &[&str] = &["dotnet_", "csharp_", "csharp.", "visual_basic_"];

/// Rule ID of a `dotnet_diagnostic.<RULE>.severity` key, uppercased.
pub fn diagnostic_rule_id(key: &str) -> Option<String> {
    DIAGNOSTIC_KEY
        .captures(key)
        .map(|caps| caps[1].to_ascii_uppercase())
}

/// The key mentions a namespace token and "severity" but has no accepted shape.
///
/// Callers check [`diagnostic_rule_id`] first; a well-formed diagnostic key
/// is not reported here either way.
pub fn is_malformed_analyzer_key(key: &str) -> bool {
    let lower = key.to_ascii_lowercase();
    let namespaced = NAMESPACE_TOKENS.iter().any(|t| lower.contains(t));
    if !namespaced || !lower.contains("severity") {
        return false;
    }
    if DIAGNOSTIC_KEY.is_match(key) {
        return false;
    }
    !ACCEPTED_SEVERITY_KEYS.iter().any(|re| re.is_match(key))
}

/// The key starts with a recognized .NET namespace prefix.
pub fn has_namespace_prefix(key: &str) -> bool {
    NAMESPACE_PREFIXES.iter().any(|p| key.starts_with(p))
}

/// Text searched for when locating the line that references `rule`.
pub fn diagnostic_key_for(rule: &str) -> String {
    format!("dotnet_diagnostic.{rule}.severity")
}
