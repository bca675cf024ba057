use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{
    classify::{Classifier, Classify},
    data::{Document, DocumentKind, Finding},
    error::ScanError,
    inspect::{ContextWindows, Inspector},
    patterns::{
        Catalog, DEFAULT_I18N_CALL_PREFIX, DEFAULT_LITERAL_WHITELIST, PROPS_BLOCK,
        named_block_intro,
    },
};

/// Fully resolved scan options. The core never reads files or environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanOptions {
    /// Extra line prefixes (regexes over the trimmed text before a match)
    /// that suppress a literal.
    pub ignore_prefix_patterns: Vec<String>,
    /// Punctuation allowed inside a literal besides ASCII letters and digits.
    pub literal_whitelist: String,
    /// Trailing call-open pattern marking a literal as already translated.
    pub i18n_call_prefix_pattern: String,
    pub context_windows: ContextWindows,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignore_prefix_patterns: Vec::new(),
            literal_whitelist: DEFAULT_LITERAL_WHITELIST.to_string(),
            i18n_call_prefix_pattern: DEFAULT_I18N_CALL_PREFIX.to_string(),
            context_windows: ContextWindows::default(),
        }
    }
}

/// Compiled scanner. Immutable and `Sync`, so one instance can be shared by
/// every worker thread.
#[derive(Debug, Clone)]
pub struct Scanner {
    catalog: Catalog,
    inspector: Inspector,
    props_intro: Regex,
}

impl Scanner {
    pub fn new(options: &ScanOptions) -> Result<Self, ScanError> {
        let catalog = Catalog::new(&options.literal_whitelist)?;

        let call_prefix = Regex::new(&options.i18n_call_prefix_pattern).map_err(|e| {
            ScanError::invalid_pattern("i18nCallPrefix", &options.i18n_call_prefix_pattern, e)
        })?;

        let ignore_prefixes = options
            .ignore_prefix_patterns
            .iter()
            .map(|p| Regex::new(p).map_err(|e| ScanError::invalid_pattern("ignorePrefix", p, e)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            catalog,
            inspector: Inspector::new(options.context_windows, call_prefix, ignore_prefixes),
            props_intro: named_block_intro(PROPS_BLOCK),
        })
    }

    /// Findings for `text` scanned as a document of `kind`.
    ///
    /// Unrecognized documents yield an empty list.
    pub fn scan(&self, text: &str, kind: DocumentKind) -> Result<Vec<Finding>, ScanError> {
        Classifier::from(kind).classify(self, text)
    }

    pub fn scan_document(&self, document: &Document) -> Result<Vec<Finding>, ScanError> {
        self.scan(&document.text, document.kind)
    }

    /// Keys already routed through `$t(...)`/`.t(...)`, in source order.
    pub fn i18n_calls<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.catalog.i18n_calls(text).map(|m| m.payload).collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    pub(crate) fn props_intro(&self) -> &Regex {
        &self.props_intro
    }
}
