//! Common utility functions shared across the codebase.

/// 1-based line and column (in chars) of a byte offset.
///
/// # Examples
///
/// ```
/// use zhcheck::utils::line_col;
///
/// assert_eq!(line_col("ab\ncd", 0), (1, 1));
/// assert_eq!(line_col("ab\ncd", 4), (2, 2));
/// assert_eq!(line_col("你好\n世界", 7), (2, 1));
/// ```
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let head = &text[..offset];
    let line = head.matches('\n').count() + 1;
    let line_start = head.rfind('\n').map_or(0, |i| i + 1);
    let col = head[line_start..].chars().count() + 1;
    (line, col)
}

/// The full line (without its line break) containing a byte offset.
pub fn line_at(text: &str, offset: usize) -> &str {
    let start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let end = text[offset..].find('\n').map_or(text.len(), |i| offset + i);
    text[start..end].trim_end_matches('\r')
}
