// Host runtime
// Owns the option, the file store and the loaded libraries, and dispatches calls

use crate::call_state::CallState;
use crate::error::{HostError, HostResult};
use crate::file_store::{FileStore, FsStore};
use crate::lib_registry::{LibraryModule, LibraryRegistry};
use crate::option::RuntimeOption;
use crate::stdlib::{self, Stdlib};
use crate::value::Value;

pub struct Runtime {
    option: RuntimeOption,
    registry: LibraryRegistry,
    files: Box<dyn FileStore>,
}

impl Runtime {
    /// A runtime with no libraries loaded, reading files from disk.
    pub fn new(option: RuntimeOption) -> Self {
        Self::with_file_store(option, FsStore::new())
    }

    pub fn with_file_store(option: RuntimeOption, files: impl FileStore + 'static) -> Self {
        Self {
            option,
            registry: LibraryRegistry::new(),
            files: Box::new(files),
        }
    }

    /// Load standard libraries. Already loaded libraries are skipped.
    pub fn open_stdlib(&mut self, lib: Stdlib) {
        for module in stdlib::modules(lib) {
            if self.registry.get_module(module.name).is_some() {
                continue;
            }
            self.registry.register(module);
        }
    }

    /// Register a host-defined library next to the standard ones.
    pub fn register(&mut self, module: LibraryModule) {
        self.registry.register(module);
    }

    #[inline]
    pub fn option(&self) -> &RuntimeOption {
        &self.option
    }

    pub fn registry(&self) -> &LibraryRegistry {
        &self.registry
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.registry.get_function(name).is_some()
    }

    /// Call a built-in by name.
    ///
    /// # Errors
    ///
    /// [`HostError::UnknownFunction`] for names no loaded library defines,
    /// otherwise whatever the built-in returns.
    pub fn call(&self, name: &str, args: &[Value]) -> HostResult<Value> {
        let Some((name, func)) = self.registry.lookup(name) else {
            return Err(HostError::UnknownFunction(name.to_string()));
        };

        tracing::trace!(function = name, nargs = args.len(), "call");
        let mut state = CallState::new(name, args, &self.option, self.files.as_ref());
        func(&mut state).inspect_err(|err| {
            tracing::debug!(function = name, error = %err, "built-in failed");
        })
    }
}

impl Default for Runtime {
    /// All standard libraries over the local filesystem.
    fn default() -> Self {
        let mut runtime = Self::new(RuntimeOption::default());
        runtime.open_stdlib(Stdlib::All);
        runtime
    }
}
