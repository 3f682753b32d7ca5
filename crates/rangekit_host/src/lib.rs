// Built-in function host
// Exposes rangekit primitives as named, dynamically typed built-ins

#[cfg(test)]
mod test;

pub mod call_state;
pub mod error;
pub mod file_store;
pub mod lib_registry;
pub mod option;
pub mod runtime;
pub mod stdlib;
pub mod value;

pub use call_state::CallState;
pub use error::{HostError, HostResult};
pub use file_store::{FileStore, FsStore, MemoryStore};
pub use lib_registry::{Builtin, LibraryModule, LibraryRegistry};
pub use option::RuntimeOption;
pub use runtime::Runtime;
pub use stdlib::Stdlib;
pub use value::Value;
