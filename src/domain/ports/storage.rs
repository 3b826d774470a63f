//! Storage port.

use std::io;

/// Read-only byte source for schema and dotenv documents.
pub trait Storage: Send + Sync {
    /// Read the whole document at `location`.
    fn read(&self, location: &str) -> io::Result<Vec<u8>>;

    /// Whether a document exists at `location`.
    fn exists(&self, location: &str) -> bool;
}
