use super::*;
use crate::lint::Severity;
use httpmock::prelude::*;
use std::fs;
use tempfile::TempDir;

const SCHEMA: &str = r##"{
    "patternProperties": {
        "^root$": { "$ref": "#/definitions/bool" },
        "^indent_style$": { "type": "string", "enum": ["space", "tab"] },
        "^indent_size$": { "type": "string", "pattern": "([0-9]+|tab)$" },
        "^dotnet_diagnostic\\.[A-Za-z0-9_]+\\.severity$": { "$ref": "#/definitions/severity" },
        "^dotnet_style_qualification_for_field$": { "$ref": "#/definitions/value_with_severity" },
        "^dotnet_naming_rule\\.": { "$ref": "#/definitions/any" },
        "^dotnet_diagnostics\\.": { "$ref": "#/definitions/severity" }
    },
    "definitions": {
        "severity": { "enum": ["none", "silent", "suggestion", "warning", "error", "default"] },
        "bool": { "enum": ["true", "false"] },
        "value_with_severity": { "type": "string" },
        "any": {}
    }
}"##;

fn validator() -> Validator {
    Validator::new(Schema::from_json_str(SCHEMA).unwrap())
}

fn messages(diags: &[Diagnostic]) -> Vec<&str> {
    diags.iter().map(|d| d.message.as_str()).collect()
}

#[test]
fn comment_and_section_only_file_is_clean() {
    let report = validator().validate("# header\n\n; note\n[*.cs]\n[*]\n");

    assert!(report.diagnostics().is_empty());
    assert_eq!(report.exit_code(true), 0);
}

#[test]
fn unmatched_key_without_namespace_is_accepted() {
    let report = validator().validate("foo=bar\n");
    assert!(report.diagnostics().is_empty());
}

#[test]
fn valid_analyzer_severity_records_rule() {
    let report = validator().validate("[*.cs]\ndotnet_diagnostic.CA1000.severity = warning\n");

    assert!(report.errors.is_empty());
    assert!(report.used_rules.contains("CA1000"));
}

#[test]
fn rule_ids_are_uppercased() {
    let report = validator().validate("dotnet_diagnostic.ide0090.severity = none\n");
    assert!(report.used_rules.contains("IDE0090"));
}

#[test]
fn invalid_analyzer_severity_is_one_error() {
    let report = validator().validate("dotnet_diagnostic.CA1000.severity = bogus\n");

    assert_eq!(report.errors.len(), 1);
    let msg = &report.errors[0].message;
    assert!(msg.contains("dotnet_diagnostic.CA1000.severity"));
    assert!(msg.contains("bogus"));
    assert!(msg.contains("none, silent, suggestion, warning, error, default"));
    assert_eq!(report.errors[0].line, Some(1));
    assert_eq!(report.exit_code(false), 1);
}

#[test]
fn analyzer_severity_is_checked_without_schema_pattern() {
    let validator = Validator::new(Schema::from_json_str("{}").unwrap());
    let report = validator.validate("dotnet_diagnostic.CA1000.severity = loud\n");
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn parse_error_does_not_stop_validation() {
    let report = validator().validate("not a valid line\nindent_style = tabs\n");

    assert_eq!(report.parse_errors.len(), 1);
    assert_eq!(report.parse_errors[0].line, Some(1));
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].line, Some(2));
    assert_eq!(report.exit_code(false), 1);
}

#[test]
fn schema_violations_report_allowed_values() {
    let report = validator().validate("root = yes\nindent_style = Space\nindent_size = wide\n");

    assert_eq!(
        messages(&report.errors),
        vec![
            "Invalid value for 'root': boolean expected (true/false), got 'yes'",
            "Invalid value for 'indent_style': value must be one of [space, tab], got 'Space'",
            "Invalid value for 'indent_size': value 'wide' does not match pattern /([0-9]+|tab)$/",
        ]
    );
}

#[test]
fn typed_fragments_without_enum_or_pattern_accept_values() {
    let schema = Schema::from_json_str(
        r#"{
            "patternProperties": {
                "^max_line_length$": { "type": "integer" },
                "^insert_final_newline$": { "type": "boolean" }
            }
        }"#,
    )
    .unwrap();
    let report =
        Validator::new(schema).validate("max_line_length = off\ninsert_final_newline = unset\n");

    assert!(report.diagnostics().is_empty());
    assert_eq!(report.exit_code(true), 0);
}

#[test]
fn value_with_severity_suffix() {
    let ok = validator().validate("dotnet_style_qualification_for_field = suggestion:error\n");
    assert!(ok.errors.is_empty());

    let bad = validator().validate("dotnet_style_qualification_for_field = suggestion:banana\n");
    assert_eq!(bad.errors.len(), 1);
}

#[test]
fn unmatched_namespaced_key_warns() {
    let report = validator().validate("csharp_prefer_braces = true\n");

    assert!(report.errors.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].severity, Severity::Warning);
    assert!(report.warnings[0].message.contains("csharp_prefer_braces"));
    assert_eq!(report.exit_code(false), 0);
    assert_eq!(report.exit_code(true), 1);
}

#[test]
fn malformed_analyzer_key_can_warn_and_error() {
    let report = validator().validate("dotnet_diagnostics.CA1000.severity = loud\n");

    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].message.contains("malformed analyzer key"));
    assert_eq!(report.errors.len(), 1);
    assert!(report.used_rules.is_empty());
}

#[test]
fn naming_rule_severity_is_not_flagged() {
    let report = validator().validate("dotnet_naming_rule.types_pascal.severity = warning\n");
    assert!(report.diagnostics().is_empty());
}

#[test]
fn check_rules_warns_for_unknown_ids_at_their_line() {
    let text = "[*.cs]\ndotnet_diagnostic.CA1000.severity = warning\ndotnet_diagnostic.ca9999.severity = error\n";
    let mut report = validator().validate(text);
    let known: KnownRuleSet = ["CA1000", "CS0168"].into_iter().collect();

    Validator::check_rules(&mut report, text, &known);

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].line, Some(3));
    assert!(report.warnings[0].message.contains("'CA9999'"));
    assert_eq!(
        report.rule_check,
        RuleCheck::Checked {
            known: 2,
            missing: vec!["CA9999".to_string()],
        }
    );
}

#[test]
fn check_rules_with_empty_known_set_is_skipped() {
    let text = "dotnet_diagnostic.CA1000.severity = warning\n";
    let mut report = validator().validate(text);

    Validator::check_rules(&mut report, text, &KnownRuleSet::new());

    assert_eq!(report.rule_check, RuleCheck::Skipped);
    assert!(report.warnings.is_empty());
    assert_eq!(report.exit_code(true), 0);
}

#[test]
fn check_rules_without_used_rules_is_not_needed() {
    let text = "root = true\n";
    let mut report = validator().validate(text);
    let known: KnownRuleSet = ["CA1000"].into_iter().collect();

    Validator::check_rules(&mut report, text, &known);
    assert_eq!(report.rule_check, RuleCheck::NotNeeded);
}

#[test]
fn find_rule_line_is_case_insensitive() {
    let text = "root = true\nDOTNET_DIAGNOSTIC.CA1000.SEVERITY = none\n";
    assert_eq!(find_rule_line(text, "CA1000"), Some(2));
    assert_eq!(find_rule_line(text, "CA2000"), None);
}

fn write_inputs(config: &str) -> (TempDir, ValidatorOptions) {
    let temp = TempDir::new().unwrap();
    let schema_path = temp.path().join("schema.json");
    let file_path = temp.path().join(".editorconfig");
    fs::write(&schema_path, SCHEMA).unwrap();
    fs::write(&file_path, config).unwrap();

    let options = ValidatorOptions {
        schema_path,
        file_path,
        ..ValidatorOptions::default()
    };
    (temp, options)
}

#[test]
fn run_fetches_reference_lists_best_effort() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/broken");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/rules");
        then.status(200).body("CA1000 CS0168");
    });

    let (_temp, mut options) = write_inputs(
        "dotnet_diagnostic.CA1000.severity = warning\ndotnet_diagnostic.CA9999.severity = error\n",
    );
    options.known_rules_urls = vec![server.url("/broken"), server.url("/rules")];

    let report = run(&options).unwrap();

    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].message.contains("CA9999"));
    assert_eq!(report.warnings[0].line, Some(2));
    assert_eq!(report.exit_code(false), 0);
    assert_eq!(report.exit_code(true), 1);
}

#[test]
fn run_skips_fetch_when_no_rules_used() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/rules");
        then.status(200).body("CA1000");
    });

    let (_temp, mut options) = write_inputs("root = true\n");
    options.known_rules_urls = vec![server.url("/rules")];

    let report = run(&options).unwrap();

    mock.assert_calls(0);
    assert_eq!(report.rule_check, RuleCheck::NotNeeded);
}

#[test]
fn run_without_urls_skips_rule_check() {
    let (_temp, options) = write_inputs("dotnet_diagnostic.CA1000.severity = warning\n");
    let report = run(&options).unwrap();
    assert_eq!(report.rule_check, RuleCheck::Skipped);
    assert_eq!(report.summary(true).notice.as_deref(), Some(SKIPPED_NOTICE));
}

#[test]
fn run_missing_schema_is_fatal() {
    let (temp, mut options) = write_inputs("root = true\n");
    options.schema_path = temp.path().join("nope.json");

    let err = run(&options).unwrap_err();
    assert!(matches!(err, ValidatorError::SchemaNotFound { .. }));
}

#[test]
fn run_missing_file_is_fatal() {
    let (temp, mut options) = write_inputs("root = true\n");
    options.file_path = temp.path().join("missing/.editorconfig");

    let err = run(&options).unwrap_err();
    assert!(matches!(err, ValidatorError::FileNotFound { .. }));
}

#[test]
fn run_reads_invalid_utf8_lossily() {
    let (_temp, options) = write_inputs("");
    fs::write(&options.file_path, b"root = true\n# caf\xe9\n").unwrap();

    let report = run(&options).unwrap();
    assert!(report.diagnostics().is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let (_temp, options) = write_inputs(
        "oops\nroot = maybe\ncsharp_unknown = 1\ndotnet_diagnostic.CA1.severity = x\n",
    );

    let first = run(&options).unwrap().diagnostics();
    let second = run(&options).unwrap().diagnostics();
    assert_eq!(first, second);
}
