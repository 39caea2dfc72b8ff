use std::process::Command;

use crate::common::{project, tenet_bin};

#[test]
fn test_clean_file_produces_empty_stdout() {
    let dir = project(&[("src/clean.ts", "export const maxRetries = 3;\n")]);
    let out = Command::new(tenet_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty(), "clean check must print nothing");
}

#[test]
fn test_violation_is_reported_with_rule_id() {
    let dir = project(&[("src/app.ts", "class button_group {}\n")]);
    let out = Command::new(tenet_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("naming-convention"), "stdout: {stdout}");
    assert!(stdout.contains("src/app.ts"), "stdout: {stdout}");
}

#[test]
fn test_json_output_is_structured() {
    let dir = project(&[("src/app.ts", "var counter = 1;\n")]);
    let out = Command::new(tenet_bin())
        .args(["--json", "check"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let parsed: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be JSON");
    assert_eq!(parsed["status"], "error");
    assert_eq!(parsed["diagnostics"][0]["rule"], "no-var");
    assert_eq!(parsed["diagnostics"][0]["severity"], "error");
}

#[test]
fn test_parse_error_does_not_abort_other_files() {
    let dir = project(&[
        ("src/broken.ts", "let x = 1;\n)\n"),
        ("src/legacy.ts", "var old = 1;\n"),
    ]);
    let out = Command::new(tenet_bin())
        .args(["--json", "check"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let rules: Vec<&str> = parsed["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["rule"].as_str().unwrap())
        .collect();
    assert!(rules.contains(&"parse-error"), "rules: {rules:?}");
    assert!(rules.contains(&"no-var"), "rules: {rules:?}");
}

#[test]
fn test_explicit_file_arguments() {
    let dir = project(&[
        ("src/app.ts", "var counter = 1;\n"),
        ("src/other.ts", "var another = 2;\n"),
    ]);
    let out = Command::new(tenet_bin())
        .args(["--json", "check", "src/app.ts"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(parsed["files_checked"], serde_json::json!(["src/app.ts"]));
    assert_eq!(parsed["diagnostics"].as_array().unwrap().len(), 1);
}

#[test]
fn test_tenetignore_excludes_files() {
    let dir = project(&[
        ("src/app.ts", "export const maxRetries = 3;\n"),
        ("vendor/lib.ts", "var vendored = 1;\n"),
        (".tenetignore", "vendor/\n"),
    ]);
    let out = Command::new(tenet_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "stdout: {}",
        String::from_utf8_lossy(&out.stdout)
    );
}

#[test]
fn test_config_ignore_patterns() {
    let dir = project(&[
        ("src/app.ts", "export const maxRetries = 3;\n"),
        ("dist/bundle.ts", "var bundled = 1;\n"),
        ("tenet.json", r#"{ "version": "0.1.0", "ignore_patterns": ["dist/**"] }"#),
    ]);
    let out = Command::new(tenet_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success());
}

#[test]
fn test_config_disables_rule() {
    let dir = project(&[
        ("src/legacy.ts", "var old = 1;\n"),
        ("tenet.json", r#"{ "version": "0.1.0", "rules": { "no-var": "off" } }"#),
    ]);
    let out = Command::new(tenet_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "stdout: {}",
        String::from_utf8_lossy(&out.stdout)
    );
}

#[test]
fn test_unknown_rule_warns_but_does_not_abort() {
    let dir = project(&[
        ("src/clean.ts", "export const maxRetries = 3;\n"),
        ("tenet.json", r#"{ "version": "0.1.0", "rules": { "not-a-rule": "error" } }"#),
    ]);
    let out = Command::new(tenet_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown rule"), "stderr: {stderr}");
    assert!(stderr.contains("not-a-rule"), "stderr: {stderr}");
}
