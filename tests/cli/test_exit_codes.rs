// Exit code contract: 0 clean or warnings-only, 1 on any error-severity
// diagnostic, warnings promoted under --strict.
use std::process::Command;

use crate::common::{project, tenet_bin};

#[test]
fn test_exit_0_on_clean_tree() {
    let dir = project(&[(
        "src/api.ts",
        "import { request } from 'node:https';\n\nexport const timeoutMs = 5000;\n",
    )]);
    let out = Command::new(tenet_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_exit_0_with_warnings_only() {
    // no-default-export defaults to warn
    let dir = project(&[("src/main.ts", "export default function main(): void {}\n")]);
    let out = Command::new(tenet_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("no-default-export"), "stdout: {stdout}");
}

#[test]
fn test_exit_1_with_error_diagnostic() {
    let dir = project(&[("src/legacy.ts", "var old = 1;\n")]);
    let out = Command::new(tenet_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_strict_promotes_warnings() {
    let dir = project(&[("src/main.ts", "export default function main(): void {}\n")]);
    let out = Command::new(tenet_bin())
        .args(["check", "--strict"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_exit_1_on_parse_error() {
    let dir = project(&[("src/broken.ts", "let x = 1;\n)\n")]);
    let out = Command::new(tenet_bin())
        .arg("check")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("parse-error"), "stdout: {stdout}");
}
