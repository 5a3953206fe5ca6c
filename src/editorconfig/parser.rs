//! Line-oriented `.editorconfig` parser.
//!
//! Turns raw text into [`ParsedEntry`] records, tracking the active
//! `[section]` header. Lines that cannot be understood are collected as
//! [`ParseError`]s; parsing never stops early.

/// A recognized `key = value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    /// Line number (1-indexed).
    pub line: usize,
    /// Most recent section header, if any was seen.
    pub section: Option<String>,
    /// Trimmed, non-empty key.
    pub key: String,
    /// Trimmed value (may be empty).
    pub value: String,
}

/// A line that is neither blank, a comment, a section, nor `key = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Line number (1-indexed).
    pub line: usize,
    /// The untouched line text.
    pub raw: String,
}

/// Everything the parser found in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub entries: Vec<ParsedEntry>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// Whether any line failed to parse.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse the full text of a configuration file.
pub fn parse(text: &str) -> ParseOutput {
    let mut output = ParseOutput::default();
    let mut section: Option<String> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(header) = section_header(trimmed) {
            section = Some(header.to_string());
            continue;
        }

        match split_key_value(raw) {
            Some((key, value)) => output.entries.push(ParsedEntry {
                line,
                section: section.clone(),
                key: key.to_string(),
                value: value.to_string(),
            }),
            None => output.errors.push(ParseError {
                line,
                raw: raw.to_string(),
            }),
        }
    }

    output
}

/// Contents of a `[...]` header spanning the whole trimmed line.
fn section_header(trimmed: &str) -> Option<&str> {
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;
    let inner = inner.trim();
    (!inner.is_empty()).then_some(inner)
}

/// Split at the first `=` not preceded by a backslash.
fn split_key_value(raw: &str) -> Option<(&str, &str)> {
    let bytes = raw.as_bytes();
    let pos = bytes
        .iter()
        .enumerate()
        .position(|(i, &b)| b == b'=' && (i == 0 || bytes[i - 1] != b'\\'))?;

    let key = raw[..pos].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, raw[pos + 1..].trim()))
}
