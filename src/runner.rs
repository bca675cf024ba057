//! Check orchestration: discover files, scan them in parallel, collect issues.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    config::Config,
    core::{DocumentKind, Scanner},
    file_scanner::scan_files,
    issues::{Issue, ScanFailureIssue, UntranslatedLiteralIssue},
};

/// Scan result for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path as displayed, relative to the working directory when possible.
    pub path: String,
    pub literals: Vec<UntranslatedLiteralIssue>,
    /// Keys already passed to `$t(...)`/`.t(...)`.
    pub i18n_calls: Vec<String>,
}

#[derive(Debug, Default)]
pub struct RunResult {
    /// Successfully scanned files, in path order.
    pub files: Vec<FileReport>,
    pub failures: Vec<ScanFailureIssue>,
    /// Directory entries the walker could not access.
    pub skipped_count: usize,
}

impl RunResult {
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    pub fn literal_count(&self) -> usize {
        self.files.iter().map(|f| f.literals.len()).sum()
    }

    pub fn i18n_call_count(&self) -> usize {
        self.files.iter().map(|f| f.i18n_calls.len()).sum()
    }

    /// Files with at least one untranslated literal.
    pub fn files_with_literals(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.literals.is_empty())
    }

    /// Every issue in report order: per file, failures first, then literals
    /// in scan order.
    pub fn issues(&self) -> Vec<Issue> {
        let mut issues: Vec<Issue> = self
            .failures
            .iter()
            .cloned()
            .map(Issue::ScanFailure)
            .chain(
                self.files
                    .iter()
                    .flat_map(|f| f.literals.iter().cloned().map(Issue::UntranslatedLiteral)),
            )
            .collect();
        // Stable: keeps in-file order.
        issues.sort_by(|a, b| a.file_path().cmp(b.file_path()));
        issues
    }
}

/// The orchestrator for a check run.
///
/// Holds one compiled `Scanner` shared read-only by every worker thread.
pub struct CheckRunner {
    scanner: Scanner,
    source_root: PathBuf,
    display_root: PathBuf,
    includes: Vec<String>,
    ignores: Vec<String>,
    verbose: bool,
}

impl CheckRunner {
    /// `cwd` resolves a relative `source_root` and shortens displayed paths.
    pub fn new(config: &Config, cwd: &Path, verbose: bool) -> Result<Self> {
        let scanner = Scanner::new(&config.scan).context("Invalid scan options")?;
        Ok(Self {
            scanner,
            source_root: cwd.join(&config.source_root),
            display_root: cwd.to_path_buf(),
            includes: config.includes.clone(),
            ignores: config.ignores.clone(),
            verbose,
        })
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn run(&self) -> RunResult {
        let scan = scan_files(&self.source_root, &self.includes, &self.ignores, self.verbose);

        let results: Vec<_> = scan
            .files
            .par_iter()
            .map(|path| {
                let display = self.display_path(path);
                let report = self.scan_file(path, &display);
                (display, report)
            })
            .collect();

        let mut result = RunResult {
            skipped_count: scan.skipped_count,
            ..Default::default()
        };
        for (display, report) in results {
            match report {
                Ok(report) => result.files.push(report),
                Err(e) => {
                    if self.verbose {
                        eprintln!("{} {} - {:#}", "warning:".bold().yellow(), display, e);
                    }
                    result.failures.push(ScanFailureIssue {
                        file_path: display,
                        error: format!("{:#}", e),
                    });
                }
            }
        }
        result
    }

    fn scan_file(&self, path: &Path, display: &str) -> Result<FileReport> {
        if self.verbose {
            eprintln!("{} {}", "scanning".dimmed(), display);
        }
        let text = fs::read_to_string(path).context("Failed to read file")?;
        let findings = self.scanner.scan(&text, DocumentKind::from_path(path))?;

        Ok(FileReport {
            path: display.to_string(),
            literals: findings
                .iter()
                .map(|f| UntranslatedLiteralIssue::from_finding(display, &text, f))
                .collect(),
            i18n_calls: self
                .scanner
                .i18n_calls(&text)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }

    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.display_root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
