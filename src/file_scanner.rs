use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::{MatchOptions, Pattern};
use walkdir::{DirEntry, WalkDir};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Result of scanning files.
pub struct ScanResult {
    /// Matching files, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

fn compile_patterns(patterns: &[String], kind: &str, verbose: bool) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid {} pattern '{}': {}",
                        "warning:".bold().yellow(),
                        kind,
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect()
}

/// Dot files and dot directories are never scanned.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Walks `source_root` and returns files whose path relative to it matches an
/// include glob and no ignore glob (or literal ignore prefix).
pub fn scan_files(
    source_root: &Path,
    includes: &[String],
    ignores: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let include_patterns = compile_patterns(includes, "include", verbose);

    let (glob_ignores, literal_ignores): (Vec<&String>, Vec<&String>) =
        ignores.iter().partition(|p| is_glob_pattern(p));
    let ignore_patterns = compile_patterns(
        &glob_ignores.into_iter().cloned().collect::<Vec<_>>(),
        "ignore",
        verbose,
    );
    let literal_ignores: Vec<PathBuf> = literal_ignores.into_iter().map(PathBuf::from).collect();

    if !source_root.exists() && verbose {
        eprintln!(
            "{} Source root does not exist: {}",
            "warning:".bold().yellow(),
            source_root.display()
        );
    }

    let walker = WalkDir::new(source_root)
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(source_root) else {
            continue;
        };

        if literal_ignores.iter().any(|p| relative.starts_with(p)) {
            continue;
        }
        if ignore_patterns
            .iter()
            .any(|p| p.matches_path_with(relative, MATCH_OPTIONS))
        {
            continue;
        }
        if include_patterns
            .iter()
            .any(|p| p.matches_path_with(relative, MATCH_OPTIONS))
        {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    ScanResult {
        files,
        skipped_count,
    }
}
