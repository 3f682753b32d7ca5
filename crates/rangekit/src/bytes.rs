// Byte range extraction
// Computes clamped windows over a byte source of known size and reads them

use std::io::{self, Read, Seek, SeekFrom};

use crate::range::{self, NormalizedRange};

/// Random-access byte storage owned by the host.
///
/// Every `Read + Seek` type (files, in-memory cursors) is a source.
pub trait ByteSource {
    /// Total length of the source in bytes.
    fn size(&mut self) -> io::Result<u64>;

    /// Read into `buf` starting at byte `start`.
    ///
    /// Returns the number of bytes read, which is less than `buf.len()` only
    /// when the source ends first.
    fn read_at(&mut self, start: u64, buf: &mut [u8]) -> io::Result<usize>;
}

impl<T: Read + Seek> ByteSource for T {
    fn size(&mut self) -> io::Result<u64> {
        self.seek(SeekFrom::End(0))
    }

    fn read_at(&mut self, start: u64, buf: &mut [u8]) -> io::Result<usize> {
        self.seek(SeekFrom::Start(start))?;

        let mut total_read = 0;
        while total_read < buf.len() {
            match self.read(&mut buf[total_read..]) {
                Ok(0) => break, // EOF
                Ok(n) => total_read += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(total_read)
    }
}

/// Window of a `total_size`-byte source addressed by a signed request.
///
/// Uses clamped normalization: a start past the end gives an empty window
/// and a window running past the end is truncated. Never fails.
pub fn resolve_window(total_size: i64, offset: i64, length: i64) -> NormalizedRange {
    range::clamp(offset, length, total_size)
}

/// Read a resolved window from `source`.
///
/// An empty window reads nothing. Hitting the end of the source early is not
/// an error; the returned buffer holds whatever was available.
pub fn read_range<S>(source: &mut S, window: NormalizedRange) -> io::Result<Vec<u8>>
where
    S: ByteSource + ?Sized,
{
    if window.is_empty() {
        return Ok(Vec::new());
    }

    let count = usize::try_from(window.count())
        .map_err(|_| io::Error::new(io::ErrorKind::OutOfMemory, "read window too large"))?;
    let mut buffer = vec![0u8; count];
    let n = source.read_at(window.start(), &mut buffer)?;
    buffer.truncate(n);
    Ok(buffer)
}

/// Size the source, resolve the signed request against it and read the window.
pub fn read_window<S>(source: &mut S, offset: i64, length: i64) -> io::Result<Vec<u8>>
where
    S: ByteSource + ?Sized,
{
    let size = source.size()?;
    let window = resolve_window(i64::try_from(size).unwrap_or(i64::MAX), offset, length);
    read_range(source, window)
}
