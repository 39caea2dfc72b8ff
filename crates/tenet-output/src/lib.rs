//! Output formatters for tenet command results.
//!
//! Two output modes:
//! - **Human** (default): formatted diagnostics for terminal users
//! - **JSON** (`--json`): machine-readable structured output

pub mod human;
pub mod json;
pub mod report;

use tenet_rules::types::{CheckRunResult, RuleInfo};

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckRunResult) -> String;
    fn format_rules(&self, rules: &[RuleInfo]) -> String;
}
