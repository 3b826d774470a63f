//! Adapters binding the domain ports to real and in-memory backends.

pub mod env;
pub mod storage;

pub use env::{MemoryEnv, ProcessEnv};
pub use storage::{MemoryStorage, OsStorage};
