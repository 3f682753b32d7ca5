use std::io;

use rangekit::{PatternError, RangeError};
use thiserror::Error;

pub type HostResult<T> = Result<T, HostError>;

#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("bad argument #{index} to '{func}' ({msg})")]
    BadArgument {
        func: &'static str,
        index: usize,
        msg: String,
    },

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("resulting string too large")]
    StringTooLarge,

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl HostError {
    pub fn io(path: &str, source: io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }

    /// True for strict range rejections raised by `Substr`.
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::Range(RangeError::InvalidRange { .. }))
    }
}
