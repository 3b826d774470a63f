//! Storage adapters.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::Storage;

/// Filesystem storage rooted at a directory.
///
/// Relative locations resolve against the root; absolute locations are used
/// as given.
#[derive(Debug, Clone)]
pub struct OsStorage {
    root: PathBuf,
}

impl OsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, location: &str) -> PathBuf {
        self.root.join(location)
    }
}

impl Default for OsStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for OsStorage {
    fn read(&self, location: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.resolve(location))
    }

    fn exists(&self, location: &str) -> bool {
        self.resolve(location).is_file()
    }
}

/// In-memory storage keyed by location.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document at `location`.
    #[must_use]
    pub fn with_file(mut self, location: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(location.into(), contents.into());
        self
    }
}

impl Storage for MemoryStorage {
    fn read(&self, location: &str) -> io::Result<Vec<u8>> {
        self.files.get(location).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {location}"))
        })
    }

    fn exists(&self, location: &str) -> bool {
        self.files.contains_key(location)
    }
}
