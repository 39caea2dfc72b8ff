use serde_json::Value;

use tenet_core::types::Severity;
use tenet_parser::source_model::{BindingKind, SourceModel};

use crate::registry::Rule;
use crate::types::Finding;

pub const NO_VAR: Rule = Rule {
    id: "no-var",
    summary: "Use `const` or `let`, never `var`",
    default_severity: Severity::Error,
    predicate: check_no_var,
};

pub const NO_DEFAULT_EXPORT: Rule = Rule {
    id: "no-default-export",
    summary: "Use named exports only",
    default_severity: Severity::Warn,
    predicate: check_no_default_export,
};

fn check_no_var(model: &SourceModel, _options: &Value) -> Vec<Finding> {
    model
        .declarations
        .iter()
        .filter(|d| d.binding == Some(BindingKind::Var))
        .map(|d| {
            Finding::new(
                d.span,
                format!("`{}` is declared with `var`; use `const` or `let`", d.name),
            )
        })
        .collect()
}

fn check_no_default_export(model: &SourceModel, _options: &Value) -> Vec<Finding> {
    model
        .default_exports
        .iter()
        .map(|span| Finding::new(*span, "use a named export instead of a default export"))
        .collect()
}
