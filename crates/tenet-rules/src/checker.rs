use std::panic;
use std::path::Path;

use tenet_core::types::{Diagnostic, Severity};
use tenet_parser::builder::{ModelBuilder, ParseError};
use tenet_parser::source_model::SourceModel;

use crate::registry::EnabledRule;

/// Rule id attached to diagnostics produced from parse failures.
pub const PARSE_ERROR_RULE: &str = "parse-error";

/// Rule id attached to diagnostics produced when a predicate panics.
pub const INTERNAL_ERROR_RULE: &str = "internal-error";

/// Apply every enabled rule to a source model and collect all findings.
///
/// Rules are evaluated independently; the checker never short-circuits on
/// a failing rule. A panicking predicate is isolated and reported as an
/// internal diagnostic instead of crashing the run. Output order is
/// deterministic: (line, column, rule id) ascending.
pub fn check(model: &SourceModel, rules: &[EnabledRule<'_>]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for enabled in rules {
        let outcome = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            (enabled.rule.predicate)(model, &enabled.options)
        }));
        match outcome {
            Ok(findings) => {
                for finding in findings {
                    diagnostics.push(Diagnostic {
                        rule: enabled.rule.id.to_string(),
                        severity: enabled.severity,
                        file: model.file_path.clone(),
                        line: finding.span.line,
                        column: finding.span.column,
                        message: finding.message,
                    });
                }
            }
            Err(payload) => {
                diagnostics.push(Diagnostic {
                    rule: INTERNAL_ERROR_RULE.to_string(),
                    severity: Severity::Warn,
                    file: model.file_path.clone(),
                    line: 1,
                    column: 1,
                    message: format!(
                        "rule `{}` failed: {}",
                        enabled.rule.id,
                        panic_message(payload.as_ref())
                    ),
                });
            }
        }
    }

    diagnostics.sort_by(|a, b| {
        (a.line, a.column, a.rule.as_str()).cmp(&(b.line, b.column, b.rule.as_str()))
    });
    diagnostics
}

/// Parse and check one file's contents.
///
/// A syntax failure becomes a single `parse-error` diagnostic for this
/// file; other files are unaffected.
pub fn check_source(
    file_path: &str,
    lang: &str,
    source: &str,
    rules: &[EnabledRule<'_>],
) -> Vec<Diagnostic> {
    let mut builder = ModelBuilder::new();
    match builder.build(lang, Path::new(file_path), source) {
        Ok(model) => check(&model, rules),
        Err(err) => vec![parse_error_diagnostic(file_path, &err)],
    }
}

/// Convert a [`ParseError`] into the per-file diagnostic the reporter sees.
pub fn parse_error_diagnostic(file_path: &str, err: &ParseError) -> Diagnostic {
    let (line, column) = match err {
        ParseError::Syntax { line, column } => (*line, *column),
        _ => (1, 1),
    };
    Diagnostic {
        rule: PARSE_ERROR_RULE.to_string(),
        severity: Severity::Error,
        file: file_path.to_string(),
        line,
        column,
        message: err.to_string(),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
