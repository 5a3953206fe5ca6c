//! editorconfig-validate - Validate `.editorconfig` files in CI.
//!
//! Parses an `.editorconfig` file, checks every `key = value` entry against a
//! pattern-keyed JSON schema, cross-checks `dotnet_diagnostic.<RULE>.severity`
//! rule IDs against reference lists fetched over HTTP, and reports problems as
//! CI workflow-command annotations.
//!
//! # Modules
//!
//! - [`analyzers`] - Severity vocabulary and known rule ID lists
//! - [`cli`] - Command-line interface and argument parsing
//! - [`editorconfig`] - Line parser and analyzer key conventions
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Diagnostics and output formats
//! - [`schema`] - Schema loading, key matching and value validation
//! - [`validate`] - End-to-end validation runs
//!
//! # Example
//!
//! ```
//! use editorconfig_validate::schema::Schema;
//! use editorconfig_validate::validate::Validator;
//!
//! let schema = Schema::from_json_str(r##"{
//!     "patternProperties": {
//!         "^root$": { "$ref": "#/definitions/bool" }
//!     }
//! }"##).unwrap();
//!
//! let report = Validator::new(schema).validate("root = maybe\n");
//! assert_eq!(report.errors.len(), 1);
//! assert_eq!(report.exit_code(false), 1);
//! ```

pub mod analyzers;
pub mod cli;
pub mod editorconfig;
pub mod error;
pub mod lint;
pub mod schema;
pub mod validate;

pub use error::{Result, ValidatorError};
