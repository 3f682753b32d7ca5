// File library
// Implements: FileSize, ReadFile
// Files are opened through the runtime's FileStore

use rangekit::ByteSource;
use rangekit::bytes::{read_range, resolve_window};

use crate::call_state::CallState;
use crate::error::{HostError, HostResult};
use crate::lib_registry::LibraryModule;
use crate::value::Value;

pub fn create_file_lib() -> LibraryModule {
    crate::lib_module!("file", {
        "FileSize" => file_size,
        "ReadFile" => file_read,
    })
}

fn open(l: &CallState, path: &str) -> HostResult<Box<dyn ByteSource>> {
    l.files().open(path).map_err(|e| HostError::io(path, e))
}

fn source_size(source: &mut dyn ByteSource, path: &str) -> HostResult<i64> {
    let size = source.size().map_err(|e| HostError::io(path, e))?;
    Ok(i64::try_from(size).unwrap_or(i64::MAX))
}

/// FileSize(path) - Size in bytes
fn file_size(l: &mut CallState) -> HostResult<Value> {
    let path = l.check_str(1)?;
    let mut source = open(l, &path)?;
    Ok(Value::Int(source_size(source.as_mut(), &path)?))
}

/// ReadFile(path) - Whole file as a string
/// ReadFile(path, buf) - Whole file as a buffer, bytes untouched
/// ReadFile(path, offset, length) - Byte window as a buffer
///
/// The window is clamped to the file: an offset past the end reads nothing,
/// a window running past the end is cut short. Neither is an error.
/// Every form reads at most `max_read_size` bytes.
fn file_read(l: &mut CallState) -> HostResult<Value> {
    let path = l.check_str(1)?;
    let mut source = open(l, &path)?;
    let size = source_size(source.as_mut(), &path)?;
    let max_read_size = l.option().max_read_size;

    if l.arg_count() < 3 {
        let as_buffer = match l.get_arg(2) {
            None => false,
            Some(Value::Bytes(_)) => true,
            Some(other) => {
                return Err(l.argerror(2, format!("buf expected, got {}", other.type_name())));
            }
        };

        let whole = resolve_window(size, 0, 0).limit(max_read_size);
        let data = read_range(source.as_mut(), whole).map_err(|e| HostError::io(&path, e))?;
        if as_buffer {
            return Ok(Value::Bytes(data));
        }

        let text = String::from_utf8_lossy(&data);
        l.check_string_size(text.len())?;
        return Ok(Value::str(text));
    }

    let offset = l.check_int(2)?;
    let length = l.check_int(3)?;

    let window = resolve_window(size, offset, length).limit(max_read_size);
    if window.is_empty() {
        tracing::trace!(path = %path, offset, length, size, "empty read window");
        return Ok(Value::Bytes(Vec::new()));
    }

    let data = read_range(source.as_mut(), window).map_err(|e| HostError::io(&path, e))?;
    Ok(Value::Bytes(data))
}
