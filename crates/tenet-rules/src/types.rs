use serde::{Deserialize, Serialize};

use tenet_core::types::{Diagnostic, Severity, Span};

/// A single violation located by a rule predicate.
///
/// The checker attaches the rule identifier and effective severity when it
/// turns findings into [`Diagnostic`]s.
#[derive(Debug, Clone)]
pub struct Finding {
    pub span: Span,
    pub message: String,
}

impl Finding {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// Registry listing entry for one rule, used by `tenet rules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    pub id: String,
    pub default_severity: Severity,
    pub summary: String,
}

/// Aggregated outcome of one `tenet check` invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRunResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "warning" | "error"
    pub files_checked: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    pub config_warnings: Vec<String>,
}

impl CheckRunResult {
    /// Status string derived from the worst diagnostic severity present.
    pub fn status_for(diagnostics: &[Diagnostic]) -> &'static str {
        if diagnostics.iter().any(|d| d.severity == Severity::Error) {
            "error"
        } else if !diagnostics.is_empty() {
            "warning"
        } else {
            "ok"
        }
    }
}
