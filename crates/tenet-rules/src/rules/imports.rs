use serde_json::Value;

use tenet_core::types::Severity;
use tenet_parser::source_model::SourceModel;

use crate::registry::Rule;
use crate::types::Finding;

pub const RULE: Rule = Rule {
    id: "import-ordering",
    summary: "Package imports before relative imports, sorted within each group",
    default_severity: Severity::Warn,
    predicate: check,
};

fn check(model: &SourceModel, _options: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();

    // Side-effect imports run code on load; their relative order is
    // meaningful, so they are exempt from sorting.
    let mut seen_relative = false;
    let mut last_package: Option<&str> = None;
    let mut last_relative: Option<&str> = None;

    for import in model.imports.iter().filter(|i| !i.is_side_effect) {
        if import.is_relative {
            if let Some(prev) = last_relative {
                if import.source.as_str() < prev {
                    findings.push(Finding::new(
                        import.span,
                        format!("import of '{}' is out of alphabetical order", import.source),
                    ));
                }
            }
            seen_relative = true;
            last_relative = Some(&import.source);
        } else {
            if seen_relative {
                findings.push(Finding::new(
                    import.span,
                    format!(
                        "package import '{}' must precede relative imports",
                        import.source
                    ),
                ));
            } else if let Some(prev) = last_package {
                if import.source.as_str() < prev {
                    findings.push(Finding::new(
                        import.span,
                        format!("import of '{}' is out of alphabetical order", import.source),
                    ));
                }
            }
            last_package = Some(&import.source);
        }
    }

    findings
}
