// Standard built-in libraries

pub mod file;
pub mod string;

use crate::lib_registry::LibraryModule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stdlib {
    Str,
    File,

    All,
}

/// Fresh modules for the requested libraries, in load order.
pub fn modules(lib: Stdlib) -> Vec<LibraryModule> {
    match lib {
        Stdlib::Str => vec![string::create_str_lib()],
        Stdlib::File => vec![file::create_file_lib()],
        Stdlib::All => vec![string::create_str_lib(), file::create_file_lib()],
    }
}
