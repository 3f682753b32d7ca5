// Library registration system for built-in functions
// Groups Rust functions into named libraries and resolves calls by name

use ahash::AHashMap;

use crate::call_state::CallState;
use crate::error::HostResult;
use crate::stdlib;
use crate::value::Value;

/// Signature of every built-in.
pub type Builtin = fn(&mut CallState<'_>) -> HostResult<Value>;

/// A library module containing multiple functions
pub struct LibraryModule {
    pub name: &'static str,
    pub entries: Vec<(&'static str, Builtin)>,
}

impl LibraryModule {
    /// Create a new library module
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Add a function to this library
    pub fn with_function(mut self, name: &'static str, func: Builtin) -> Self {
        self.entries.push((name, func));
        self
    }
}

/// Builder for creating library modules with functions
#[macro_export]
macro_rules! lib_module {
    ($name:expr, {
        $($item_name:expr => $item:expr),* $(,)?
    }) => {{
        let mut module = $crate::lib_registry::LibraryModule::new($name);
        $(
            module.entries.push(($item_name, $item as $crate::lib_registry::Builtin));
        )*
        module
    }};
}

/// Registry for all loaded libraries
pub struct LibraryRegistry {
    modules: Vec<LibraryModule>, // Use Vec to preserve insertion order
    functions: AHashMap<&'static str, Builtin>,
}

impl LibraryRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
            functions: AHashMap::new(),
        }
    }

    /// Register a library module
    /// A function name already taken by an earlier module is shadowed
    pub fn register(&mut self, module: LibraryModule) {
        for (name, func) in &module.entries {
            if self.functions.insert(*name, *func).is_some() {
                tracing::debug!(library = module.name, function = *name, "shadowing built-in");
            }
        }
        tracing::debug!(
            library = module.name,
            functions = module.entries.len(),
            "registered library"
        );
        self.modules.push(module);
    }

    /// Get a module by name
    pub fn get_module(&self, name: &str) -> Option<&LibraryModule> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Look up a function by its call name
    #[inline]
    pub fn get_function(&self, name: &str) -> Option<Builtin> {
        self.functions.get(name).copied()
    }

    /// Look up a function together with its registered name
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<(&'static str, Builtin)> {
        self.functions
            .get_key_value(name)
            .map(|(name, func)| (*name, *func))
    }

    /// Names of every callable function, in registration order
    pub fn function_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modules
            .iter()
            .flat_map(|m| m.entries.iter().map(|(name, _)| *name))
    }
}

impl Default for LibraryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a registry with every standard library
pub fn create_standard_registry() -> LibraryRegistry {
    let mut registry = LibraryRegistry::new();
    for module in stdlib::modules(stdlib::Stdlib::All) {
        registry.register(module);
    }
    registry
}
