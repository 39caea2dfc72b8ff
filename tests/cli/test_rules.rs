use std::process::Command;

use crate::common::{project, tenet_bin};

#[test]
fn test_rules_lists_builtins() {
    let dir = project(&[]);
    let out = Command::new(tenet_bin())
        .arg("rules")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    for id in [
        "naming-convention",
        "import-ordering",
        "prefer-inferred-type",
        "prefer-discriminated-union",
        "no-var",
        "no-default-export",
    ] {
        assert!(stdout.contains(id), "missing {id} in: {stdout}");
    }
}

#[test]
fn test_rules_json() {
    let dir = project(&[]);
    let out = Command::new(tenet_bin())
        .args(["--json", "rules"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let rules = parsed.as_array().unwrap();
    assert_eq!(rules.len(), 6);
    assert_eq!(rules[0]["id"], "naming-convention");
    assert_eq!(rules[0]["default_severity"], "error");
}
