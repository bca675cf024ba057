//! Issue types for scan results.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it: location, source line and message.

use enum_dispatch::enum_dispatch;

use crate::{
    core::{Finding, FindingRegion},
    utils::{line_at, line_col},
};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UntranslatedLiteral,
    ScanFailure,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UntranslatedLiteral => write!(f, "untranslated-literal"),
            Rule::ScanFailure => write!(f, "scan-failure"),
        }
    }
}

// ============================================================
// Source Location & Context
// ============================================================

/// Pure position information in a scanned file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Position plus the source line, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    pub source_line: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
        }
    }

    /// Resolve a byte offset in `text` to line, column and source line.
    pub fn at_offset(file_path: impl Into<String>, text: &str, offset: usize) -> Self {
        let (line, col) = line_col(text, offset);
        Self::new(
            SourceLocation::new(file_path, line, col),
            line_at(text, offset),
        )
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A literal that should go through an i18n call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedLiteralIssue {
    pub context: SourceContext,
    pub region: FindingRegion,
    /// The literal, quotes stripped.
    pub text: String,
    /// Byte offset in the file.
    pub offset: usize,
}

impl UntranslatedLiteralIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UntranslatedLiteral
    }

    pub fn from_finding(file_path: impl Into<String>, text: &str, finding: &Finding) -> Self {
        Self {
            context: SourceContext::at_offset(file_path, text, finding.offset),
            region: finding.region,
            text: finding.text.clone(),
            offset: finding.offset,
        }
    }
}

/// File could not be read or scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailureIssue {
    pub file_path: String,
    pub error: String,
}

impl ScanFailureIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ScanFailure
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found during a check run.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UntranslatedLiteral(UntranslatedLiteralIssue),
    ScanFailure(ScanFailureIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UntranslatedLiteral(_) => UntranslatedLiteralIssue::severity(),
            Issue::ScanFailure(_) => ScanFailureIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UntranslatedLiteral(_) => UntranslatedLiteralIssue::rule(),
            Issue::ScanFailure(_) => ScanFailureIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only, no line context.
    File { path: &'a str },
}

/// Trait for types that can be reported to the CLI.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for UntranslatedLiteralIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.text.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {} region", self.region))
    }
}

impl Report for ScanFailureIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Issue {
    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }
}
