use crate::OutputFormatter;
use tenet_rules::types::{CheckRunResult, RuleInfo};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, result: &CheckRunResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }

    fn format_rules(&self, rules: &[RuleInfo]) -> String {
        serde_json::to_string_pretty(rules).unwrap_or_default()
    }
}
