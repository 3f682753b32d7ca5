// Range normalization
// Turns signed (offset, length) requests into absolute windows

use std::ops::Range;

use crate::error::RangeError;

/// Out-of-range policy applied after sign resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Reject any request that does not fit inside the sequence.
    Strict,
    /// Truncate to the nearest valid window, never reject.
    Clamped,
}

/// An absolute window `[start, start + count)` into a sequence.
///
/// `start + count` never exceeds the element count the range was
/// normalized against. Only [`normalize`] and [`clamp`] build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NormalizedRange {
    start: u64,
    count: u64,
}

impl NormalizedRange {
    fn from_resolved(start: i128, count: i128) -> Self {
        debug_assert!(start >= 0 && count >= 0);
        // Both values are bounded by a non-negative i64 total
        Self {
            start: start as u64,
            count: count as u64,
        }
    }

    #[inline]
    pub fn start(&self) -> u64 {
        self.start
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// One past the last element.
    #[inline]
    pub fn end(&self) -> u64 {
        self.start + self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Shrink the window to at most `max_count` elements, keeping its start.
    pub fn limit(self, max_count: u64) -> Self {
        Self {
            start: self.start,
            count: self.count.min(max_count),
        }
    }

    /// Element indices covered by this range.
    ///
    /// Ranges normalized against an in-memory length always fit in `usize`.
    pub fn indices(&self) -> Range<usize> {
        let start = usize::try_from(self.start).unwrap_or(usize::MAX);
        let end = usize::try_from(self.end()).unwrap_or(usize::MAX);
        start..end
    }
}

/// Offset and length after sign resolution, before any bounds policy.
///
/// Held in `i128` so that `i64::MIN` negation and `offset + length` can
/// not overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub offset: i128,
    pub length: i128,
}

/// Apply the signed addressing convention shared by every mode.
///
/// 1. A negative offset counts back from the end: `offset = total + offset`.
/// 2. A negative length names a window of `-length` elements ending at the
///    offset: `length = -length`, `offset = offset - length`.
/// 3. A zero length means the rest of the sequence: `length = total - offset`.
///
/// Rule 3 only applies to a length that was zero on input.
pub fn resolve_signs(offset: i64, length: i64, total: i64) -> Resolved {
    let total = i128::from(total);
    let mut offset = i128::from(offset);
    let mut length = i128::from(length);

    if offset < 0 {
        offset += total;
    }
    if length < 0 {
        length = -length;
        offset -= length;
    } else if length == 0 {
        length = total - offset;
    }

    Resolved { offset, length }
}

/// Normalize a signed request against a sequence of `total` elements.
///
/// A negative `total` is treated as an empty sequence. In [`Mode::Clamped`]
/// this never fails.
pub fn normalize(
    offset: i64,
    length: i64,
    total: i64,
    mode: Mode,
) -> Result<NormalizedRange, RangeError> {
    match mode {
        Mode::Strict => strict(offset, length, total),
        Mode::Clamped => Ok(clamp(offset, length, total)),
    }
}

fn strict(offset: i64, length: i64, total: i64) -> Result<NormalizedRange, RangeError> {
    let bound = i128::from(total.max(0));
    let Resolved {
        offset: start,
        length: count,
    } = resolve_signs(offset, length, total.max(0));

    if start < 0 || start >= bound || start + count > bound {
        return Err(RangeError::InvalidRange {
            offset,
            length,
            total,
        });
    }
    Ok(NormalizedRange::from_resolved(start, count))
}

/// Clamped-mode normalization.
///
/// The start is pulled into `[0, total)` and the count cut to what remains
/// after it. A start at or past the end yields an empty range positioned at
/// `total`.
pub fn clamp(offset: i64, length: i64, total: i64) -> NormalizedRange {
    let bound = i128::from(total.max(0));
    let Resolved {
        offset: start,
        length: count,
    } = resolve_signs(offset, length, total.max(0));

    if start >= bound {
        return NormalizedRange::from_resolved(bound, 0);
    }
    let start = start.max(0);
    let count = count.clamp(0, bound - start);
    NormalizedRange::from_resolved(start, count)
}
