// String library
// Implements: Find, HasPrefix, HasSuffix, Left, Len, Lines, Lower, Repeat,
// Replace, Shift, Split, Substr, TrimRight, TrimSpace, Upper
// Offsets and lengths count code points

use rangekit::{PatternTable, text};

use crate::call_state::CallState;
use crate::error::{HostError, HostResult};
use crate::lib_registry::LibraryModule;
use crate::value::Value;

pub fn create_str_lib() -> LibraryModule {
    crate::lib_module!("str", {
        "Find" => str_find,
        "HasPrefix" => str_has_prefix,
        "HasSuffix" => str_has_suffix,
        "Left" => str_left,
        "Len" => str_len,
        "Lines" => str_lines,
        "Lower" => str_lower,
        "Repeat" => str_repeat,
        "Replace" => str_replace,
        "Shift" => str_shift,
        "Split" => str_split,
        "Substr" => str_substr,
        "TrimRight" => str_trim_right,
        "TrimSpace" => str_trim_space,
        "Upper" => str_upper,
    })
}

/// Substr(s, offset, length) - Exact window, fails on out-of-range requests
fn str_substr(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    let offset = l.check_int(2)?;
    let length = l.check_int(3)?;

    let sub = text::substring(&s, offset, length)?;
    Ok(Value::str(sub))
}

/// Find(s, substr) - Code-point index of the first match, -1 if absent
fn str_find(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    let pattern = l.check_str(2)?;
    Ok(Value::Int(text::find_first(&s, &pattern)))
}

/// Left(s, count) - At most the first count characters
fn str_left(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    let count = l.check_int(2)?;
    Ok(Value::str(text::left(&s, count)))
}

/// Len(s) - Number of characters
fn str_len(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    let len = text::char_len(&s);
    Ok(Value::Int(i64::try_from(len).unwrap_or(i64::MAX)))
}

/// Replace(s, old, new) - Replace every occurrence of old
/// Replace(s, olds, news) - Ordered table, first listed match wins
fn str_replace(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;

    let table = if matches!(l.get_arg(2), Some(Value::Array(_))) {
        let searches = l.check_str_array(2)?;
        let replacements = l.check_str_array(3)?;
        if searches.len() != replacements.len() {
            return Err(l.argerror(
                3,
                format!(
                    "expected {} replacements, got {}",
                    searches.len(),
                    replacements.len()
                ),
            ));
        }
        PatternTable::from_pairs(searches.into_iter().zip(replacements))?
    } else {
        let old = l.check_str(2)?;
        let new = l.check_str(3)?;
        PatternTable::new().with(&*old, &*new)?
    };

    let out = rangekit::replace(&s, &table);
    l.check_string_size(out.len())?;
    Ok(Value::str(out))
}

/// HasPrefix(s, prefix)
fn str_has_prefix(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    let prefix = l.check_str(2)?;
    Ok(Value::Bool(s.starts_with(&*prefix)))
}

/// HasSuffix(s, suffix)
fn str_has_suffix(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    let suffix = l.check_str(2)?;
    Ok(Value::Bool(s.ends_with(&*suffix)))
}

/// Lines(s) - Split on '\n', dropping carriage returns around each line
fn str_lines(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    Ok(Value::str_array(
        s.split('\n').map(|line| line.trim_matches('\r')),
    ))
}

/// Split(s, sep) - An empty separator splits into characters
fn str_split(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    let sep = l.check_str(2)?;

    if sep.is_empty() {
        return Ok(Value::str_array(s.chars().map(String::from)));
    }
    Ok(Value::str_array(s.split(&*sep)))
}

/// Shift(s) - Trim white space on every line
fn str_shift(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    let lines: Vec<&str> = s.split('\n').map(str::trim).collect();
    Ok(Value::str(lines.join("\n")))
}

/// Repeat(s, count) - count copies of s; zero or negative gives ""
fn str_repeat(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    let n = l.check_int(2)?;

    let Ok(n) = usize::try_from(n) else {
        return Ok(Value::str(""));
    };
    if n == 0 || s.is_empty() {
        return Ok(Value::str(""));
    }

    // Check for overflow before multiplying
    let total = s.len().checked_mul(n).ok_or(HostError::StringTooLarge)?;
    l.check_string_size(total)?;
    Ok(Value::str(s.repeat(n)))
}

/// TrimSpace(s)
fn str_trim_space(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    Ok(Value::str(s.trim()))
}

/// TrimRight(s, set) - Strip trailing characters found in set
fn str_trim_right(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    let set = l.check_str(2)?;
    Ok(Value::str(s.trim_end_matches(|c: char| set.contains(c))))
}

/// Lower(s)
fn str_lower(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    let out = s.to_lowercase();
    l.check_string_size(out.len())?;
    Ok(Value::str(out))
}

/// Upper(s)
fn str_upper(l: &mut CallState) -> HostResult<Value> {
    let s = l.check_str(1)?;
    let out = s.to_uppercase();
    l.check_string_size(out.len())?;
    Ok(Value::str(out))
}
