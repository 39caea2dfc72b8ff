use std::collections::HashSet;

use tenet_core::config::TenetConfig;
use tenet_core::types::Severity;
use tenet_parser::source_model::SourceModel;

use crate::types::{Finding, RuleInfo};

/// A rule predicate: a pure function from a source model (plus rule
/// options) to zero or more findings.
pub type RulePredicate = fn(&SourceModel, &serde_json::Value) -> Vec<Finding>;

/// A named, checkable convention.
///
/// Rules are plain data: a flat record with a function pointer, not a
/// polymorphic hierarchy. Registered once at startup, immutable afterwards.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: &'static str,
    pub summary: &'static str,
    pub default_severity: Severity,
    pub predicate: RulePredicate,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate rule id: {0}")]
    DuplicateRule(String),
}

/// A rule enabled for a run, with its effective severity and options.
#[derive(Debug, Clone)]
pub struct EnabledRule<'a> {
    pub rule: &'a Rule,
    pub severity: Severity,
    pub options: serde_json::Value,
}

/// Holds the registered rules in insertion order.
///
/// Single-writer-at-init discipline: `register` during startup, then the
/// registry is only read.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
    ids: HashSet<&'static str>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry with every built-in rule registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for rule in crate::rules::builtin() {
            registry
                .register(rule)
                .expect("built-in rule ids are unique");
        }
        registry
    }

    /// Register a rule. Fails if the identifier is already present.
    pub fn register(&mut self, rule: Rule) -> Result<(), RegistryError> {
        if !self.ids.insert(rule.id) {
            return Err(RegistryError::DuplicateRule(rule.id.to_string()));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// All registered rules, in insertion order.
    pub fn all(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Listing entries for `tenet rules`.
    pub fn infos(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.id.to_string(),
                default_severity: r.default_severity,
                summary: r.summary.to_string(),
            })
            .collect()
    }

    /// Apply a configuration to the registry.
    ///
    /// Returns the enabled rules (config severity overriding the default,
    /// `off` disabling) plus one warning per configuration entry that names
    /// an unregistered rule. Unknown rules never abort the run.
    pub fn resolve(&self, config: &TenetConfig) -> (Vec<EnabledRule<'_>>, Vec<String>) {
        let mut enabled = Vec::new();
        for rule in &self.rules {
            let setting = config.rules.get(rule.id);
            let severity = setting.map(|s| s.severity()).unwrap_or(rule.default_severity);
            if severity == Severity::Off {
                continue;
            }
            let options = setting
                .and_then(|s| s.options())
                .cloned()
                .unwrap_or(serde_json::Value::Null);
            enabled.push(EnabledRule {
                rule,
                severity,
                options,
            });
        }

        let warnings = config
            .rules
            .keys()
            .filter(|id| self.get(id).is_none())
            .map(|id| format!("unknown rule `{id}` in configuration"))
            .collect();

        (enabled, warnings)
    }
}
