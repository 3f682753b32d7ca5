// File stores
// Where built-ins open byte sources by path

use std::fs::File;
use std::io::{self, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahash::AHashMap;
use rangekit::ByteSource;

/// Opens byte sources by path for the `file` library.
pub trait FileStore: Send + Sync {
    fn open(&self, path: &str) -> io::Result<Box<dyn ByteSource>>;
}

/// Local filesystem, optionally rooted at a base directory.
#[derive(Debug, Clone, Default)]
pub struct FsStore {
    root: Option<PathBuf>,
}

impl FsStore {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Resolve relative paths against `root` instead of the working directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => Path::new(path).to_path_buf(),
        }
    }
}

impl FileStore for FsStore {
    fn open(&self, path: &str) -> io::Result<Box<dyn ByteSource>> {
        let file = File::open(self.resolve(path))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// In-memory files, for embedding without disk access.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: AHashMap<String, Arc<[u8]>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), Arc::from(data.into()));
    }

    pub fn with_file(mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }

    pub fn remove(&mut self, path: &str) -> bool {
        self.files.remove(path).is_some()
    }
}

impl FileStore for MemoryStore {
    fn open(&self, path: &str) -> io::Result<Box<dyn ByteSource>> {
        match self.files.get(path) {
            Some(data) => Ok(Box::new(Cursor::new(Arc::clone(data)))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            )),
        }
    }
}
