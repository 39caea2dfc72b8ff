use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::builder::detect_language;

pub struct WalkEntry {
    pub path: PathBuf,
    pub language: String,
}

/// Finds checkable source files under a root directory.
///
/// Honors `.gitignore`, a `.tenetignore` custom ignore file, and the
/// config's `ignore_patterns` (matched against root-relative paths).
/// Results are sorted by path so runs are reproducible.
pub struct FileWalker {
    root: PathBuf,
    ignore_set: Option<GlobSet>,
}

impl FileWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ignore_set: None,
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Self {
        if patterns.is_empty() {
            return self;
        }
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => eprintln!("tenet: warning: invalid ignore pattern {pattern:?}: {e}"),
            }
        }
        match builder.build() {
            Ok(set) => self.ignore_set = Some(set),
            Err(e) => eprintln!("tenet: warning: failed to build ignore patterns: {e}"),
        }
        self
    }

    pub fn walk(&self) -> Vec<WalkEntry> {
        let mut entries = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .add_custom_ignore_filename(".tenetignore")
            .build();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(_) => continue,
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if self.is_config_ignored(&path) {
                continue;
            }
            if let Some(lang) = detect_language(&path) {
                entries.push(WalkEntry {
                    path,
                    language: lang.to_string(),
                });
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }

    fn is_config_ignored(&self, path: &Path) -> bool {
        let Some(set) = &self.ignore_set else {
            return false;
        };
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        set.is_match(relative)
    }
}
