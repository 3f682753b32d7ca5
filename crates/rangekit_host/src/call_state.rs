// Per-call view handed to a built-in: its arguments and the runtime services

use std::borrow::Cow;

use crate::error::{HostError, HostResult};
use crate::file_store::FileStore;
use crate::option::RuntimeOption;
use crate::value::Value;

pub struct CallState<'a> {
    name: &'static str,
    args: &'a [Value],
    option: &'a RuntimeOption,
    files: &'a dyn FileStore,
}

impl<'a> CallState<'a> {
    pub fn new(
        name: &'static str,
        args: &'a [Value],
        option: &'a RuntimeOption,
        files: &'a dyn FileStore,
    ) -> Self {
        Self {
            name,
            args,
            option,
            files,
        }
    }

    /// Name the built-in was registered under.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Helper to get a specific argument
    /// 1 based index
    #[inline]
    pub fn get_arg(&self, index: usize) -> Option<&'a Value> {
        index.checked_sub(1).and_then(|i| self.args.get(i))
    }

    #[inline]
    pub fn option(&self) -> &'a RuntimeOption {
        self.option
    }

    #[inline]
    pub fn files(&self) -> &'a dyn FileStore {
        self.files
    }

    /// Fail with `StringTooLarge` when a result of `len` bytes exceeds
    /// `max_string_size`.
    pub fn check_string_size(&self, len: usize) -> HostResult<()> {
        if len > self.option.max_string_size {
            return Err(HostError::StringTooLarge);
        }
        Ok(())
    }

    /// `bad argument #index to 'name' (msg)`
    pub fn argerror(&self, index: usize, msg: impl Into<String>) -> HostError {
        HostError::BadArgument {
            func: self.name,
            index,
            msg: msg.into(),
        }
    }

    fn typeerror(&self, index: usize, expected: &str) -> HostError {
        let got = self.get_arg(index).map_or("no value", Value::type_name);
        self.argerror(index, format!("{expected} expected, got {got}"))
    }

    /// String argument; integers are accepted and formatted.
    pub fn check_str(&self, index: usize) -> HostResult<Cow<'a, str>> {
        self.get_arg(index)
            .and_then(Value::to_text)
            .ok_or_else(|| self.typeerror(index, "str"))
    }

    /// Integer argument; numeric strings are accepted.
    pub fn check_int(&self, index: usize) -> HostResult<i64> {
        let Some(value) = self.get_arg(index) else {
            return Err(self.typeerror(index, "int"));
        };
        value.to_integer().map_err(|msg| self.argerror(index, msg))
    }

    /// Integer argument that falls back to `default` when absent or nil.
    pub fn opt_int(&self, index: usize, default: i64) -> HostResult<i64> {
        match self.get_arg(index) {
            None | Some(Value::Nil) => Ok(default),
            Some(_) => self.check_int(index),
        }
    }

    /// Array argument whose items are all strings.
    pub fn check_str_array(&self, index: usize) -> HostResult<Vec<&'a str>> {
        let Some(items) = self.get_arg(index).and_then(Value::as_array) else {
            return Err(self.typeerror(index, "arr.str"));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str().ok_or_else(|| {
                    self.argerror(
                        index,
                        format!("item {} is {}, str expected", i, item.type_name()),
                    )
                })
            })
            .collect()
    }
}
