//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that adapters must implement:
//! - EnvStore: Reading and writing environment variables
//! - Storage: Reading schema and dotenv documents
//!
//! These traits keep the pipeline independent of the real process
//! environment and filesystem.

pub mod env_store;
pub mod storage;

pub use env_store::EnvStore;
pub use storage::Storage;
