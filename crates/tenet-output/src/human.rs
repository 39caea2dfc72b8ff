use crate::report;
use crate::OutputFormatter;
use tenet_core::types::Severity;
use tenet_rules::types::{CheckRunResult, RuleInfo};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckRunResult) -> String {
        if result.diagnostics.is_empty() {
            return String::new(); // Clean run = empty stdout
        }

        let mut out = String::new();
        for line in report::lines(&result.diagnostics) {
            out.push_str(&line);
            out.push('\n');
        }

        let errors = result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warnings = result.diagnostics.len() - errors;
        out.push_str(&format!(
            "\n{} error(s), {} warning(s) in {} file(s)\n",
            errors,
            warnings,
            result.files_checked.len(),
        ));

        out
    }

    fn format_rules(&self, rules: &[RuleInfo]) -> String {
        let mut out = String::new();
        for rule in rules {
            out.push_str(&format!(
                "{:<28} {:<6} {}\n",
                rule.id, rule.default_severity, rule.summary,
            ));
        }
        out
    }
}
