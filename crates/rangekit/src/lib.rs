// Range addressing and text rewriting primitives
// Signed offset/length normalization, code-point substring extraction,
// byte window resolution and ordered multi-pattern substitution

#[cfg(test)]
mod test;

pub mod bytes;
pub mod error;
pub mod range;
pub mod replace;
pub mod text;

pub use bytes::{ByteSource, read_window, resolve_window};
pub use error::{PatternError, RangeError};
pub use range::{Mode, NormalizedRange, normalize};
pub use replace::{PatternTable, replace, replace_all};
pub use text::{find_first, left, substring};
