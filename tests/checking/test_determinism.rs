// The checker is deterministic: identical (model, rules) input yields an
// identical diagnostic sequence, ordered by (line, column, rule id).
use std::path::Path;

use tenet_core::config::TenetConfig;
use tenet_parser::builder::ModelBuilder;
use tenet_rules::checker;
use tenet_rules::registry::RuleRegistry;

const MESSY_SOURCE: &str = "\
import { b } from './b';
import { a } from './a';
var first = 1;
var second = 2;
const employees = new Map<string, number>();
";

#[test]
fn test_check_twice_yields_identical_sequences() {
    let registry = RuleRegistry::builtin();
    let (enabled, _) = registry.resolve(&TenetConfig::default());
    let mut builder = ModelBuilder::new();
    let model = builder
        .build("typescript", Path::new("messy.ts"), MESSY_SOURCE)
        .unwrap();

    let first = checker::check(&model, &enabled);
    let second = checker::check(&model, &enabled);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_diagnostics_sorted_by_position_then_rule() {
    let registry = RuleRegistry::builtin();
    let (enabled, _) = registry.resolve(&TenetConfig::default());
    let diagnostics = checker::check_source("messy.ts", "typescript", MESSY_SOURCE, &enabled);

    let keys: Vec<(u32, u32, &str)> = diagnostics
        .iter()
        .map(|d| (d.line, d.column, d.rule.as_str()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted, "diagnostics must come out pre-sorted");

    let rules: Vec<&str> = diagnostics.iter().map(|d| d.rule.as_str()).collect();
    assert_eq!(
        rules,
        vec![
            "import-ordering",
            "no-var",
            "no-var",
            "prefer-inferred-type"
        ]
    );
}

#[test]
fn test_model_build_then_check_roundtrip_is_stable() {
    let registry = RuleRegistry::builtin();
    let (enabled, _) = registry.resolve(&TenetConfig::default());
    let a = checker::check_source("messy.ts", "typescript", MESSY_SOURCE, &enabled);
    let b = checker::check_source("messy.ts", "typescript", MESSY_SOURCE, &enabled);
    assert_eq!(a, b);
}
