use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{ContextWindows, FindingRegion};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root; config lookup starts here
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanLiteralsParams {
    /// Absolute path to the project root; config lookup starts here
    pub project_root_path: String,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub source_root: String,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_prefix_patterns: Vec<String>,
    pub literal_whitelist: String,
    pub i18n_call_prefix_pattern: String,
    pub context_windows: ContextWindowsDto,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ContextWindowsDto {
    pub line: usize,
    pub comment: usize,
    pub tag: usize,
}

impl From<ContextWindows> for ContextWindowsDto {
    fn from(w: ContextWindows) -> Self {
        Self {
            line: w.line,
            comment: w.comment,
            tag: w.tag,
        }
    }
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            source_root: c.source_root,
            includes: c.includes,
            ignores: c.ignores,
            ignore_prefix_patterns: c.scan.ignore_prefix_patterns,
            literal_whitelist: c.scan.literal_whitelist,
            i18n_call_prefix_pattern: c.scan.i18n_call_prefix_pattern,
            context_windows: c.scan.context_windows.into(),
        }
    }
}

// ============================================================
// Literal Scan Types (scan_literals)
// ============================================================

/// Result of scan_literals operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiteralScanResult {
    pub total_count: usize,
    pub total_file_count: usize,
    /// Files that could not be read or scanned
    pub failed_files: Vec<String>,
    pub items: Vec<LiteralItem>,
    pub pagination: Pagination,
}

/// A single untranslated literal
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiteralItem {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    /// One of `template`, `script-pre`, `props`, `plain`
    #[schemars(with = "String")]
    pub region: FindingRegion,
    pub text: String,
    pub source_line: String,
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
