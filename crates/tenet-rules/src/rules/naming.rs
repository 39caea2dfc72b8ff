use serde_json::Value;

use tenet_core::types::Severity;
use tenet_parser::source_model::{BindingKind, DeclKind, InitKind, SourceModel};

use crate::registry::Rule;
use crate::types::Finding;

pub const RULE: Rule = Rule {
    id: "naming-convention",
    summary: "Types are PascalCase, functions and variables are camelCase",
    default_severity: Severity::Error,
    predicate: check,
};

fn check(model: &SourceModel, options: &Value) -> Vec<Finding> {
    let allow_leading_underscore = options
        .get("allow-leading-underscore")
        .and_then(Value::as_bool)
        .unwrap_or(true);

    let mut findings = Vec::new();
    for decl in &model.declarations {
        let mut name = decl.name.as_str();
        if allow_leading_underscore
            && matches!(decl.kind, DeclKind::Function | DeclKind::Variable)
        {
            name = name.strip_prefix('_').unwrap_or(name);
        }

        let (ok, expected) = match decl.kind {
            DeclKind::Class | DeclKind::Interface | DeclKind::Enum | DeclKind::TypeAlias => {
                (is_pascal_case(name), "PascalCase")
            }
            DeclKind::Function => (is_camel_case(name), "camelCase"),
            DeclKind::Variable => (variable_name_ok(decl, name), "camelCase"),
        };

        if !ok {
            findings.push(Finding::new(
                decl.span,
                format!("{} `{}` should be {}", decl.kind.as_str(), decl.name, expected),
            ));
        }
    }
    findings
}

/// camelCase always passes. A `const` may also be an UPPER_SNAKE_CASE
/// module constant, or PascalCase when it binds a component/factory
/// (arrow or call initializer).
fn variable_name_ok(decl: &tenet_parser::source_model::Declaration, name: &str) -> bool {
    if is_camel_case(name) {
        return true;
    }
    if decl.binding != Some(BindingKind::Const) {
        return false;
    }
    if is_upper_snake_case(name) {
        return true;
    }
    let factory_like = matches!(
        decl.initializer.as_ref().map(|i| i.kind),
        Some(InitKind::Arrow) | Some(InitKind::Call)
    );
    factory_like && is_pascal_case(name)
}

fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_upper_snake_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
