use thiserror::Error;

/// Rejection produced by strict range normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid range: offset {offset}, length {length} over {total} elements")]
    InvalidRange { offset: i64, length: i64, total: i64 },
}

/// Rejection produced while building a pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    /// An empty search string would match at every position without
    /// consuming input.
    #[error("pattern #{index} has an empty search string")]
    EmptySearch { index: usize },
}
