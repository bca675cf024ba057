//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Kept separate from the
//! scanning core so zhcheck can be used as a library.

use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::{
    core::FindingRegion,
    issues::{Issue, Report, ReportLocation, Severity},
    runner::RunResult,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format.
///
/// Issues are printed in the order given; `CheckRunner` already orders them
/// by file and scan order.
pub fn report_to<W: Write>(issues: &[Issue], i18n_calls: usize, writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, i18n_calls, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(files: usize, i18n_calls: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no untranslated literals ({} i18n {})",
            files,
            if files == 1 { "file" } else { "files" },
            i18n_calls,
            if i18n_calls == 1 { "call" } else { "calls" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

// ============================================================
// JSON Output
// ============================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    files_checked: usize,
    findings: Vec<JsonFinding<'a>>,
    i18n_calls: Vec<JsonI18nCalls<'a>>,
    failures: Vec<JsonFailure<'a>>,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    file: &'a str,
    region: FindingRegion,
    text: &'a str,
    offset: usize,
    line: usize,
    col: usize,
}

#[derive(Serialize)]
struct JsonI18nCalls<'a> {
    file: &'a str,
    keys: &'a [String],
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    file: &'a str,
    error: &'a str,
}

/// Print the run result as pretty JSON.
pub fn print_json_to<W: Write>(result: &RunResult, writer: &mut W) -> Result<()> {
    let report = JsonReport {
        files_checked: result.files_checked(),
        findings: result
            .files
            .iter()
            .flat_map(|f| {
                f.literals.iter().map(|l| JsonFinding {
                    file: &f.path,
                    region: l.region,
                    text: &l.text,
                    offset: l.offset,
                    line: l.context.line(),
                    col: l.context.col(),
                })
            })
            .collect(),
        i18n_calls: result
            .files
            .iter()
            .filter(|f| !f.i18n_calls.is_empty())
            .map(|f| JsonI18nCalls {
                file: &f.path,
                keys: &f.i18n_calls,
            })
            .collect(),
        failures: result
            .failures
            .iter()
            .map(|f| JsonFailure {
                file: &f.file_path,
                error: &f.error,
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *writer, &report).context("Failed to write JSON report")?;
    writeln!(writer)?;
    Ok(())
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
        ReportLocation::Source(ctx) => {
            let (line, col, source_line) = (ctx.line(), ctx.col(), ctx.source_line.as_str());
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                line,
                col
            );

            let caret_char = match severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };
            let _ = writeln!(
                writer,
                "{:>width$} {}",
                "",
                "|".blue(),
                width = max_line_width
            );
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                line.to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            );

            // col is 1-based, in chars; pad by display width
            let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            let _ = writeln!(
                writer,
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                caret_char,
                width = max_line_width,
                padding = caret_padding
            );
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], i18n_calls: usize, writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {}), {} i18n {}",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow(),
        i18n_calls,
        if i18n_calls == 1 { "call" } else { "calls" }
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
