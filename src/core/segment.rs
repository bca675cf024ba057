//! Region segmentation of hybrid documents.
//!
//! A missing marker or an unbalanced brace yields `None`; only a broken
//! precondition (`find_matching_brace` on a non-`{` byte) is an error.

use regex::Regex;

use super::{
    data::{Region, RegionKind},
    error::ScanError,
};

/// Applies `pattern` once and returns its first capture group as a region.
pub fn extract_between<'a>(
    text: &'a str,
    pattern: &Regex,
    kind: RegionKind,
) -> Option<Region<'a>> {
    let group = pattern.captures(text)?.get(1)?;
    Some(Region::new(kind, group.as_str(), group.start()))
}

/// Index of the `}` closing the `{` at `open`, or `None` if the text ends first.
pub fn find_matching_brace(text: &str, open: usize) -> Result<Option<usize>, ScanError> {
    if text.as_bytes().get(open) != Some(&b'{') {
        return Err(ScanError::NotAnOpenBrace { index: open });
    }

    let mut depth = 0usize;
    for (i, byte) in text.bytes().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(Some(i));
                }
            }
            _ => {}
        }
    }
    Ok(None)
}

/// Body of the block introduced by `intro`, braces excluded.
///
/// `intro` must end with the block's opening `{` (see
/// [`named_block_intro`](super::patterns::named_block_intro)).
pub fn find_named_block<'a>(
    text: &'a str,
    intro: &Regex,
) -> Result<Option<Region<'a>>, ScanError> {
    let Some(m) = intro.find(text) else {
        return Ok(None);
    };
    let open = m.end().saturating_sub(1);
    let Some(close) = find_matching_brace(text, open)? else {
        return Ok(None);
    };
    Ok(Some(Region::new(
        RegionKind::NamedBlock,
        &text[open + 1..close],
        open + 1,
    )))
}
