//! Exit-code computation and line-oriented rendering of diagnostics.

use tenet_core::types::{Diagnostic, Severity};

/// Exit code for a diagnostic set: non-zero iff at least one diagnostic
/// has error severity. Warnings never fail a run.
pub fn exit_code(diagnostics: &[Diagnostic]) -> i32 {
    if diagnostics.iter().any(|d| d.severity == Severity::Error) {
        1
    } else {
        0
    }
}

/// A lazy sequence of formatted lines, one per diagnostic.
///
/// Finite and restartable: calling again yields a fresh iterator over the
/// same diagnostics.
pub fn lines(diagnostics: &[Diagnostic]) -> impl Iterator<Item = String> + '_ {
    diagnostics.iter().map(format_line)
}

pub fn format_line(d: &Diagnostic) -> String {
    format!(
        "{}[{}]: {}\n  --> {}:{}:{}",
        d.severity, d.rule, d.message, d.file, d.line, d.column,
    )
}
