// Text range extraction
// All offsets and lengths here count Unicode code points, not bytes

use crate::error::RangeError;
use crate::range::{Mode, normalize};

/// Number of code points in `text`.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Number of code points that start before `byte_pos`.
///
/// This is the only place a byte position found by a search is turned back
/// into a code-point index. Positions past the end count every code point.
pub fn char_index(text: &str, byte_pos: usize) -> usize {
    text.char_indices()
        .take_while(|&(pos, _)| pos < byte_pos)
        .count()
}

/// Byte position of the code point at `char_idx`, or `text.len()` past the end.
pub fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(pos, _)| pos)
}

fn char_total(text: &str) -> i64 {
    i64::try_from(char_len(text)).unwrap_or(i64::MAX)
}

/// Exact-window extraction with strict bounds.
///
/// `offset` and `length` follow the signed convention of
/// [`resolve_signs`](crate::range::resolve_signs): a negative offset counts
/// from the end, a negative length ends the window at the offset and a zero
/// length takes the rest of the text.
///
/// # Errors
///
/// [`RangeError::InvalidRange`] when the resolved window starts before the
/// text, at or past its end, or runs past its end. The empty text has no
/// valid window.
pub fn substring(text: &str, offset: i64, length: i64) -> Result<&str, RangeError> {
    let range = normalize(offset, length, char_total(text), Mode::Strict)?;
    let indices = range.indices();

    // Fast path: ASCII text has one byte per code point
    if text.is_ascii() {
        return Ok(&text[indices]);
    }

    let start = byte_offset(text, indices.start);
    let end = start + byte_offset(&text[start..], indices.len());
    Ok(&text[start..end])
}

/// At most the first `count` code points of `text`.
///
/// Unlike [`substring`] an oversized count truncates instead of failing.
/// A count of zero or less yields the empty string.
pub fn left(text: &str, count: i64) -> &str {
    let Ok(count) = usize::try_from(count) else {
        return "";
    };
    &text[..byte_offset(text, count)]
}

/// Code-point index of the first occurrence of `pattern`, or `-1`.
///
/// An empty pattern is found at index 0.
pub fn find_first(text: &str, pattern: &str) -> i64 {
    match text.find(pattern) {
        Some(byte_pos) => i64::try_from(char_index(text, byte_pos)).unwrap_or(i64::MAX),
        None => -1,
    }
}
