//! `.editorconfig` file handling.
//!
//! - [`parser`] - Line parser producing entries and parse errors
//! - [`keys`] - .NET analyzer key conventions

pub mod keys;
pub mod parser;

pub use parser::{parse, ParseError, ParseOutput, ParsedEntry};
