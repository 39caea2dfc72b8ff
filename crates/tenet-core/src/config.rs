//! Configuration file loading for tenet.
//!
//! Reads `tenet.json` from the project root and provides typed access to the
//! rule severity/option mapping. Falls back to sensible defaults when the
//! config file is missing or incomplete.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::Severity;

/// Top-level tenet configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenetConfig {
    pub version: String,
    /// Mapping from rule identifier to severity/options. Rules not listed
    /// here run at their registered default severity.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSetting>,
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// A per-rule configuration entry: either a bare severity string
/// (`"no-var": "error"`) or a detailed object
/// (`"naming-convention": { "severity": "warn", "options": { ... } }`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSetting {
    Severity(Severity),
    Detailed {
        severity: Severity,
        #[serde(default)]
        options: serde_json::Value,
    },
}

impl RuleSetting {
    pub fn severity(&self) -> Severity {
        match self {
            RuleSetting::Severity(s) => *s,
            RuleSetting::Detailed { severity, .. } => *severity,
        }
    }

    pub fn options(&self) -> Option<&serde_json::Value> {
        match self {
            RuleSetting::Severity(_) => None,
            RuleSetting::Detailed { options, .. } => Some(options),
        }
    }
}

impl Default for TenetConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            rules: BTreeMap::new(),
            ignore_patterns: vec![],
        }
    }
}

impl TenetConfig {
    /// Load configuration from `tenet.json` inside the given project root.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join("tenet.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "tenet: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
