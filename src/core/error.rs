use thiserror::Error;

/// Errors raised by the scanning core.
///
/// Malformed source text is never an error: a missing marker or an
/// unbalanced brace only means the region is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// `find_matching_brace` was called on an index that does not hold `{`.
    #[error("no '{{' at index {index}")]
    NotAnOpenBrace { index: usize },

    /// A user supplied pattern failed to compile.
    #[error("invalid {field} pattern \"{pattern}\": {message}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        message: String,
    },
}

impl ScanError {
    pub(crate) fn invalid_pattern(field: &'static str, pattern: &str, err: regex::Error) -> Self {
        Self::InvalidPattern {
            field,
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    }
}
