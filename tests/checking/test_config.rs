// Configuration resolution against the registry: severity overrides,
// `off` switches, options, and unknown-rule warnings.
use tenet_core::config::TenetConfig;
use tenet_core::types::Severity;
use tenet_rules::checker;
use tenet_rules::registry::RuleRegistry;

fn config(value: serde_json::Value) -> TenetConfig {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_off_disables_rule_end_to_end() {
    let registry = RuleRegistry::builtin();
    let cfg = config(serde_json::json!({
        "version": "0.1.0",
        "rules": { "no-var": "off" }
    }));
    let (enabled, _) = registry.resolve(&cfg);
    let diagnostics = checker::check_source("legacy.ts", "typescript", "var old = 1;\n", &enabled);
    assert!(diagnostics.is_empty(), "got: {diagnostics:?}");
}

#[test]
fn test_severity_override_changes_diagnostics() {
    let registry = RuleRegistry::builtin();
    let cfg = config(serde_json::json!({
        "version": "0.1.0",
        "rules": { "no-default-export": "error" }
    }));
    let (enabled, _) = registry.resolve(&cfg);
    let diagnostics = checker::check_source(
        "main.ts",
        "typescript",
        "export default function main(): void {}\n",
        &enabled,
    );
    let d = diagnostics
        .iter()
        .find(|d| d.rule == "no-default-export")
        .expect("rule should fire");
    assert_eq!(d.severity, Severity::Error);
}

#[test]
fn test_rule_options_flow_to_predicate() {
    let registry = RuleRegistry::builtin();
    let cfg = config(serde_json::json!({
        "version": "0.1.0",
        "rules": {
            "naming-convention": {
                "severity": "error",
                "options": { "allow-leading-underscore": false }
            }
        }
    }));
    let (enabled, _) = registry.resolve(&cfg);
    let diagnostics =
        checker::check_source("a.ts", "typescript", "const _unused = 1;\n", &enabled);
    assert_eq!(diagnostics.len(), 1, "got: {diagnostics:?}");
    assert_eq!(diagnostics[0].rule, "naming-convention");
}

#[test]
fn test_leading_underscore_allowed_by_default() {
    let registry = RuleRegistry::builtin();
    let (enabled, _) = registry.resolve(&TenetConfig::default());
    let diagnostics =
        checker::check_source("a.ts", "typescript", "const _unused = 1;\n", &enabled);
    assert!(diagnostics.is_empty(), "got: {diagnostics:?}");
}

#[test]
fn test_unknown_rule_is_warning_not_fatal() {
    let registry = RuleRegistry::builtin();
    let cfg = config(serde_json::json!({
        "version": "0.1.0",
        "rules": { "require-frobnication": "error", "no-var": "error" }
    }));
    let (enabled, warnings) = registry.resolve(&cfg);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("require-frobnication"));
    // known rules still run
    let diagnostics = checker::check_source("a.ts", "typescript", "var x = 1;\n", &enabled);
    assert!(diagnostics.iter().any(|d| d.rule == "no-var"));
}
