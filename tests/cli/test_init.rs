use std::fs;
use std::process::Command;

use crate::common::{project, tenet_bin};

#[test]
fn test_init_writes_config_with_all_rules() {
    let dir = project(&[]);
    let out = Command::new(tenet_bin())
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success());

    let body = fs::read_to_string(dir.path().join("tenet.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    let rules = parsed["rules"].as_object().unwrap();
    for id in [
        "naming-convention",
        "import-ordering",
        "prefer-inferred-type",
        "prefer-discriminated-union",
        "no-var",
        "no-default-export",
    ] {
        assert!(rules.contains_key(id), "missing rule {id}");
    }
    assert_eq!(rules["no-var"], "error");
    assert_eq!(rules["prefer-inferred-type"], "warn");
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = project(&[("tenet.json", "{ \"version\": \"0.1.0\" }\n")]);
    let out = Command::new(tenet_bin())
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    // untouched
    let body = fs::read_to_string(dir.path().join("tenet.json")).unwrap();
    assert_eq!(body, "{ \"version\": \"0.1.0\" }\n");
}

#[test]
fn test_init_force_overwrites() {
    let dir = project(&[("tenet.json", "{ \"version\": \"0.0.1\" }\n")]);
    let out = Command::new(tenet_bin())
        .args(["init", "--force"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    let body = fs::read_to_string(dir.path().join("tenet.json")).unwrap();
    assert!(body.contains("no-var"));
}
