use std::collections::HashSet;

use serde_json::Value;

use tenet_core::types::Severity;
use tenet_parser::source_model::{DeclKind, SourceModel, UnionShape};

use crate::registry::Rule;
use crate::types::Finding;

pub const RULE: Rule = Rule {
    id: "prefer-discriminated-union",
    summary: "Unions of object types need a shared literal discriminant",
    default_severity: Severity::Warn,
    predicate: check,
};

fn check(model: &SourceModel, _options: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();

    for decl in &model.declarations {
        if decl.kind != DeclKind::TypeAlias {
            continue;
        }
        let object_members: Vec<&Vec<(String, String)>> = decl
            .union_members
            .iter()
            .filter_map(|m| match &m.shape {
                UnionShape::Object { discriminants } => Some(discriminants),
                _ => None,
            })
            .collect();
        if object_members.len() < 2 {
            continue;
        }

        let mut common: Option<HashSet<&str>> = None;
        for discriminants in &object_members {
            let names: HashSet<&str> = discriminants.iter().map(|(n, _)| n.as_str()).collect();
            common = Some(match common {
                Some(prev) => prev.intersection(&names).copied().collect(),
                None => names,
            });
        }

        if common.map_or(true, |c| c.is_empty()) {
            findings.push(Finding::new(
                decl.span,
                format!(
                    "union type `{}` has no literal discriminant property shared by every member",
                    decl.name
                ),
            ));
        }
    }

    findings
}
