use std::collections::BTreeMap;
use std::fs;

use tenet_core::config::{RuleSetting, TenetConfig};
use tenet_rules::registry::RuleRegistry;

/// Run `tenet init` — write a tenet.json listing every built-in rule at
/// its default severity.
pub fn run(verbose: bool, force: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("tenet init: failed to get current directory: {}", e);
            return 2;
        }
    };

    let config_path = cwd.join("tenet.json");
    if config_path.exists() && !force {
        eprintln!("tenet init: tenet.json already exists (use --force to overwrite)");
        return 2;
    }

    let registry = RuleRegistry::builtin();
    let mut rules = BTreeMap::new();
    for rule in registry.all() {
        rules.insert(
            rule.id.to_string(),
            RuleSetting::Severity(rule.default_severity),
        );
    }

    let config = TenetConfig {
        version: env!("CARGO_PKG_VERSION").to_string(),
        rules,
        ignore_patterns: vec![],
    };

    let mut body = serde_json::to_string_pretty(&config).unwrap();
    body.push('\n');
    if let Err(e) = fs::write(&config_path, body) {
        eprintln!("tenet init: failed to write config: {}", e);
        return 2;
    }

    if verbose {
        eprintln!("tenet init: wrote {}", config_path.display());
    }
    0
}
