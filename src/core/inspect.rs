//! Context checks around a located match.
//!
//! Every predicate looks at a bounded window of characters to the left
//! (and for tag boundaries, the right) of a match. Nothing here parses the
//! host grammar, so results are approximate but deterministic.
//!
//! `index` is always a byte offset on a char boundary of `text`; windows
//! are counted in characters.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::data::SuppressionVerdict;

/// Default look-left distance when reading the current line.
pub const LINE_WINDOW: usize = 300;

/// Default look-left distance for comment detection.
pub const COMMENT_WINDOW: usize = 500;

/// Default look-around distance for tag boundary detection.
pub const TAG_WINDOW: usize = 50;

/// Tunable window sizes. Wider windows trade speed for accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextWindows {
    pub line: usize,
    pub comment: usize,
    pub tag: usize,
}

impl Default for ContextWindows {
    fn default() -> Self {
        Self {
            line: LINE_WINDOW,
            comment: COMMENT_WINDOW,
            tag: TAG_WINDOW,
        }
    }
}

/// Byte offset where a backward walk of `window` chars from `index` stops.
fn window_start(text: &str, index: usize, window: usize) -> usize {
    text[..index]
        .char_indices()
        .rev()
        .take(window)
        .last()
        .map_or(index, |(i, _)| i)
}

/// Text between the most recent line break (within `window` chars) and `index`.
///
/// The line break itself is excluded. Without a break in range, the slice
/// starts at the window edge or at the start of `text`.
pub fn preceding_line(text: &str, index: usize, window: usize) -> &str {
    let head = &text[..index];
    let mut start = index;
    for (i, ch) in head.char_indices().rev().take(window) {
        if ch == '\n' {
            return &head[i + 1..];
        }
        start = i;
    }
    &head[start..]
}

/// True if a `//` appears anywhere before the match on its line.
///
/// A `//` inside an earlier string literal on the same line (`"http://"`)
/// also counts.
pub fn is_line_commented(text: &str, index: usize, window: usize) -> bool {
    preceding_line(text, index, window).contains("//")
}

/// True if the trimmed line prefix matches `pattern`.
pub fn matches_prefix_pattern(pattern: &Regex, text: &str, index: usize, window: usize) -> bool {
    pattern.is_match(preceding_line(text, index, window).trim())
}

/// True if the match is the first argument of a call matching `call_prefix`,
/// e.g. `t(` or `$t (`.
pub fn is_call_wrapped(call_prefix: &Regex, text: &str, index: usize, window: usize) -> bool {
    matches_prefix_pattern(call_prefix, text, index, window)
}

/// Walks backwards looking for the nearer of `*/` and `/*`.
pub fn is_block_commented(text: &str, index: usize, window: usize) -> bool {
    let mut right: Option<char> = None;
    for ch in text[..index].chars().rev().take(window) {
        match (ch, right) {
            ('*', Some('/')) => return false,
            ('/', Some('*')) => return true,
            _ => {}
        }
        right = Some(ch);
    }
    false
}

/// True if the nearest markup comment delimiter to the left is `<!--`.
pub fn is_markup_commented(text: &str, index: usize, window: usize) -> bool {
    let scope = &text[window_start(text, index, window)..index];
    match (scope.rfind("<!--"), scope.rfind("-->")) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}

/// True if only whitespace separates the match from a `>` on its left and
/// a `<` on its right, i.e. the match is a bare text node.
pub fn is_between_tag_boundary(text: &str, index: usize, len: usize, window: usize) -> bool {
    let left = text[..index]
        .chars()
        .rev()
        .take(window)
        .find(|c| !c.is_whitespace());
    if left != Some('>') {
        return false;
    }
    let right = text[index + len..]
        .chars()
        .take(window)
        .find(|c| !c.is_whitespace());
    right == Some('<')
}

/// Applies the suppression rules in a fixed order and reports the first hit.
#[derive(Debug, Clone)]
pub struct Inspector {
    windows: ContextWindows,
    call_prefix: Regex,
    ignore_prefixes: Vec<Regex>,
}

impl Inspector {
    pub fn new(windows: ContextWindows, call_prefix: Regex, ignore_prefixes: Vec<Regex>) -> Self {
        Self {
            windows,
            call_prefix,
            ignore_prefixes,
        }
    }

    pub fn windows(&self) -> &ContextWindows {
        &self.windows
    }

    /// Verdict for a literal found in script text.
    pub fn script_verdict(&self, text: &str, index: usize) -> SuppressionVerdict {
        if is_block_commented(text, index, self.windows.comment) {
            SuppressionVerdict::BlockComment
        } else if is_line_commented(text, index, self.windows.comment) {
            SuppressionVerdict::LineComment
        } else if is_call_wrapped(&self.call_prefix, text, index, self.windows.line) {
            SuppressionVerdict::I18nWrapped
        } else if self.has_ignored_prefix(text, index) {
            SuppressionVerdict::IgnoredPrefix
        } else {
            SuppressionVerdict::NotSuppressed
        }
    }

    /// Verdict for a literal found in template markup.
    pub fn markup_verdict(&self, text: &str, index: usize) -> SuppressionVerdict {
        if is_markup_commented(text, index, self.windows.comment) {
            SuppressionVerdict::MarkupComment
        } else if self.has_ignored_prefix(text, index) {
            SuppressionVerdict::IgnoredPrefix
        } else {
            SuppressionVerdict::NotSuppressed
        }
    }

    fn has_ignored_prefix(&self, text: &str, index: usize) -> bool {
        self.ignore_prefixes
            .iter()
            .any(|p| matches_prefix_pattern(p, text, index, self.windows.line))
    }
}
