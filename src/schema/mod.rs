//! Pattern-keyed schema loading and key matching.
//!
//! The schema is a JSON object with two members:
//!
//! - `patternProperties` - regex → constraint fragment, tried in document order
//! - `definitions` - name → fragment, referenced via `$ref`
//!
//! # Example
//!
//! ```
//! use editorconfig_validate::schema::Schema;
//!
//! let schema = Schema::from_json_str(r#"{
//!     "patternProperties": {
//!         "^indent_style$": { "type": "string", "enum": ["space", "tab"] }
//!     }
//! }"#).unwrap();
//!
//! assert!(schema.match_key("indent_style").is_some());
//! assert!(schema.match_key("foo").is_none());
//! ```

pub mod fragment;
pub mod validator;

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Result, ValidatorError};

pub use fragment::{DefinitionRef, FragmentPattern, InlineConstraint, SchemaFragment};
pub use validator::{validate_value, ValueError};

#[derive(Debug, Deserialize)]
struct RawSchema {
    #[serde(default, rename = "patternProperties")]
    pattern_properties: Map<String, Value>,
    #[serde(default)]
    definitions: Map<String, Value>,
}

/// One `patternProperties` entry.
#[derive(Debug, Clone)]
struct PatternProperty {
    /// `None` when the pattern does not compile; such entries never match.
    regex: Option<Regex>,
    fragment: SchemaFragment,
}

/// A loaded schema document.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    patterns: Vec<PatternProperty>,
    definitions: HashMap<String, SchemaFragment>,
}

impl Schema {
    /// Load a schema from disk.
    ///
    /// A missing or unreadable file and malformed JSON are both fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ValidatorError::SchemaNotFound {
                path: path.to_path_buf(),
            })?;

        Self::from_json_str(&content).map_err(|e| ValidatorError::SchemaParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse a schema from JSON text.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        let raw: RawSchema = serde_json::from_str(json)?;

        let patterns = raw
            .pattern_properties
            .iter()
            .map(|(source, value)| PatternProperty {
                regex: fragment::compile_anchored(source),
                fragment: SchemaFragment::from_json(value),
            })
            .collect();

        let definitions = raw
            .definitions
            .iter()
            .map(|(name, value)| (name.clone(), SchemaFragment::from_json(value)))
            .collect();

        Ok(Self {
            patterns,
            definitions,
        })
    }

    /// First fragment whose pattern matches `key` at its start.
    pub fn match_key(&self, key: &str) -> Option<&SchemaFragment> {
        self.patterns
            .iter()
            .find(|p| p.regex.as_ref().is_some_and(|re| re.is_match(key)))
            .map(|p| &p.fragment)
    }

    /// Look up a shared definition by name.
    pub fn definition(&self, name: &str) -> Option<&SchemaFragment> {
        self.definitions.get(name)
    }

    /// Number of `patternProperties` entries, including invalid ones.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
