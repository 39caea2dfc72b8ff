use serde_json::Value;

use tenet_core::types::Severity;
use tenet_parser::source_model::{DeclKind, InitKind, SourceModel};

use crate::registry::Rule;
use crate::types::Finding;

pub const RULE: Rule = Rule {
    id: "prefer-inferred-type",
    summary: "Don't spell out a type the initializer already determines",
    default_severity: Severity::Warn,
    predicate: check,
};

/// Two forms are flagged, at most one finding per declaration:
/// an annotation that repeats the constructed type
/// (`const m: Map<string, number> = new Map()`), and explicit constructor
/// type arguments on an unannotated declaration
/// (`const employees = new Map<string, number>()`).
fn check(model: &SourceModel, _options: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();

    for decl in &model.declarations {
        if decl.kind != DeclKind::Variable {
            continue;
        }
        let Some(init) = &decl.initializer else {
            continue;
        };
        if init.kind != InitKind::New {
            continue;
        }

        if let Some(annotation) = &decl.annotation {
            let head = annotation.split('<').next().unwrap_or(annotation).trim();
            if init.constructor.as_deref() == Some(head) {
                findings.push(Finding::new(
                    decl.span,
                    format!(
                        "`{}` annotates a type its initializer `new {}` already determines",
                        decl.name, head
                    ),
                ));
            }
        } else if init.has_type_arguments {
            findings.push(Finding::new(
                decl.span,
                format!(
                    "type of `{}` is fully spelled out by its initializer; rely on inference",
                    decl.name
                ),
            ));
        }
    }

    findings
}
