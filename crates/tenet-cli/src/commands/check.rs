use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use tenet_core::config::TenetConfig;
use tenet_core::types::Diagnostic;
use tenet_output::{report, OutputFormatter};
use tenet_parser::builder::detect_language;
use tenet_parser::walker::FileWalker;
use tenet_rules::checker;
use tenet_rules::registry::RuleRegistry;
use tenet_rules::types::CheckRunResult;

/// Run `tenet check` — parse the target files and apply the enabled rules.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    files: Vec<String>,
    strict: bool,
) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("tenet check: failed to get current directory: {}", e);
            return 2;
        }
    };

    let config = TenetConfig::load(&cwd);
    let registry = RuleRegistry::builtin();
    let (enabled, config_warnings) = registry.resolve(&config);
    for warning in &config_warnings {
        eprintln!("tenet check: warning: {}", warning);
    }

    let targets: Vec<PathBuf> = if files.is_empty() {
        // No specific files: walk the tree (already sorted)
        FileWalker::new(&cwd)
            .with_ignore_patterns(&config.ignore_patterns)
            .walk()
            .into_iter()
            .map(|e| e.path)
            .collect()
    } else {
        // Resolve relative paths against cwd; sort for reproducible output
        let mut targets: Vec<PathBuf> = files
            .iter()
            .map(|f| {
                let p = Path::new(f);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    cwd.join(f)
                }
            })
            .collect();
        targets.sort();
        targets
    };

    if verbose {
        eprintln!("tenet check: checking {} file(s)", targets.len());
    }

    // Each file is parsed and checked in isolation, so a parallel map is
    // safe; collect() keeps the sorted input order.
    let reports: Vec<Option<(String, Vec<Diagnostic>)>> = targets
        .par_iter()
        .map(|path| {
            let lang = detect_language(path)?;
            let content = match fs::read_to_string(path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("tenet check: skipping {}: {}", path.display(), e);
                    return None;
                }
            };
            let rel = make_relative(&cwd, path);
            let diagnostics = checker::check_source(&rel, lang, &content, &enabled);
            Some((rel, diagnostics))
        })
        .collect();

    let mut files_checked = Vec::new();
    let mut diagnostics = Vec::new();
    for (file, file_diagnostics) in reports.into_iter().flatten() {
        files_checked.push(file);
        diagnostics.extend(file_diagnostics);
    }

    let result = CheckRunResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "check".to_string(),
        status: CheckRunResult::status_for(&diagnostics).to_string(),
        files_checked,
        diagnostics,
        config_warnings,
    };

    output_result(formatter, &result, strict, verbose)
}

fn output_result(
    formatter: &dyn OutputFormatter,
    result: &CheckRunResult,
    strict: bool,
    verbose: bool,
) -> i32 {
    // Clean run = empty stdout, exit 0
    if result.diagnostics.is_empty() {
        if verbose {
            eprintln!("tenet check: clean — no diagnostics");
        }
        return 0;
    }

    let output = formatter.format_check(result);
    if !output.is_empty() {
        println!("{}", output);
    }

    let code = report::exit_code(&result.diagnostics);
    if code != 0 {
        code
    } else if strict {
        1
    } else {
        0
    }
}

/// Make a path relative to the project root.
fn make_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
