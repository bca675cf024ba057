use serde::Serialize;

/// Result of applying one catalog matcher to a string.
///
/// `start` is relative to the searched string. `payload` is the literal
/// itself: the capture group for quoted or tagged matchers, the whole
/// match otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'a> {
    pub matched: &'a str,
    pub start: usize,
    pub payload: &'a str,
    pub payload_start: usize,
}

impl<'a> RawMatch<'a> {
    pub fn whole(matched: &'a str, start: usize) -> Self {
        Self {
            matched,
            start,
            payload: matched,
            payload_start: start,
        }
    }
}

/// Why a raw match was (or was not) dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuppressionVerdict {
    NotSuppressed,
    /// A `//` appears earlier on the same line.
    LineComment,
    /// Inside an unclosed `/* ... */`.
    BlockComment,
    /// Directly passed to an i18n call such as `t(` or `$t(`.
    I18nWrapped,
    /// The line prefix matched a configured ignore pattern.
    IgnoredPrefix,
    /// Inside an unclosed `<!-- ... -->`.
    MarkupComment,
}

impl SuppressionVerdict {
    pub fn is_suppressed(&self) -> bool {
        !matches!(self, Self::NotSuppressed)
    }
}

/// Region tag carried by a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingRegion {
    ScriptPre,
    Props,
    Template,
    Plain,
}

impl FindingRegion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScriptPre => "script-pre",
            Self::Props => "props",
            Self::Template => "template",
            Self::Plain => "plain",
        }
    }
}

impl std::fmt::Display for FindingRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An untranslated literal that survived every suppression check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Finding {
    pub region: FindingRegion,
    /// The literal, quotes stripped.
    pub text: String,
    /// Byte offset of the originating match in the document.
    pub offset: usize,
}

impl Finding {
    pub fn new(region: FindingRegion, text: impl Into<String>, offset: usize) -> Self {
        Self {
            region,
            text: text.into(),
            offset,
        }
    }
}
