//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! Every option can also be supplied through an environment variable so the
//! tool can be driven from CI workflow inputs.

use clap::Parser;
use std::path::PathBuf;

use crate::lint::OutputFormat;
use crate::validate::ValidatorOptions;

/// Validate an .editorconfig file against a pattern-keyed schema.
#[derive(Debug, Parser)]
#[command(name = "editorconfig-validate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON schema document
    #[arg(long, env = "EDITORCONFIG_SCHEMA", value_name = "PATH")]
    pub schema: PathBuf,

    /// Path to the .editorconfig file to validate
    #[arg(long, env = "EDITORCONFIG_FILE", value_name = "PATH")]
    pub file: PathBuf,

    /// Whitespace-separated URLs of known analyzer rule lists
    #[arg(
        long,
        env = "EDITORCONFIG_KNOWN_RULES_URLS",
        default_value = "",
        value_name = "URLS"
    )]
    pub known_rules_urls: String,

    /// Exit with failure when warnings are reported (true/false)
    #[arg(
        long,
        alias = "fail-on-unknown-analysers",
        env = "EDITORCONFIG_FAIL_ON_UNKNOWN_ANALYZERS",
        value_name = "BOOL",
        default_value = "false",
        num_args = 0..=1,
        default_missing_value = "true",
        action = clap::ArgAction::Set,
        value_parser = parse_flag
    )]
    pub fail_on_unknown_analyzers: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Github)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Reference list URLs, split on whitespace.
    pub fn urls(&self) -> Vec<String> {
        self.known_rules_urls
            .split_whitespace()
            .map(String::from)
            .collect()
    }

    /// Options for a validation run.
    pub fn to_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            schema_path: self.schema.clone(),
            file_path: self.file.clone(),
            known_rules_urls: self.urls(),
            fail_on_warnings: self.fail_on_unknown_analyzers,
        }
    }
}

/// Parse a CI-style boolean input. An empty string means `false`.
fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected true or false, got '{}'", other)),
    }
}
