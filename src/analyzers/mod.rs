//! Analyzer rule identifiers and severities.
//!
//! - [`severity`] - The six-token severity vocabulary
//! - [`known`] - Set of rule IDs gathered from reference lists
//! - [`fetch`] - Best-effort HTTP retrieval of reference lists

pub mod fetch;
pub mod known;
pub mod severity;

pub use fetch::{fetch_known_rules, RuleListFetcher, DEFAULT_TIMEOUT};
pub use known::KnownRuleSet;
pub use severity::{AnalyzerSeverity, UnknownSeverity};
