//! Diagnostics and their output formats.
//!
//! # Overview
//!
//! - **Diagnostics** - Problems with a line, severity and category ([`Diagnostic`])
//! - **Formatters** - CI annotations or JSON ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use editorconfig_validate::lint::{Diagnostic, GithubFormatter, Severity};
//!
//! let diag = Diagnostic::warning("check this key").at_line(3);
//! assert_eq!(diag.severity, Severity::Warning);
//!
//! let line = GithubFormatter::annotation(Path::new(".editorconfig"), &diag);
//! assert_eq!(
//!     line,
//!     "::warning file=.editorconfig,line=3,title=.editorconfig warning::check this key"
//! );
//! ```

pub mod diagnostic;
pub mod output;

pub use diagnostic::{Category, Diagnostic, Severity};
pub use output::{GithubFormatter, JsonFormatter, LintFormatter, OutputFormat, Summary};
