//! Known analyzer rule identifiers.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// 1-4 uppercase letters followed by 2-5 digits, e.g. `CA1000`, `IDE0090`.
static RULE_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z]{1,4}[0-9]{2,5}\b").expect("RULE_ID_REGEX must compile")
});

/// Set of rule identifiers gathered from reference lists.
///
/// An empty set is a valid outcome: it means no reference list was
/// configured or none could be fetched, and cross-checking is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownRuleSet {
    ids: BTreeSet<String>,
}

impl KnownRuleSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every identifier-shaped token found in `text`.
    pub fn extend_from_text(&mut self, text: &str) -> usize {
        let before = self.ids.len();
        self.ids
            .extend(RULE_ID_REGEX.find_iter(text).map(|m| m.as_str().to_string()));
        self.ids.len() - before
    }

    /// Whether `rule` was seen in any reference list.
    pub fn contains(&self, rule: &str) -> bool {
        self.ids.contains(rule)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for KnownRuleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
