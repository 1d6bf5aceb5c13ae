//! Filesystem abstraction used by the duplicate-injection check
//!
//! The check only ever needs two operations: "does this entry file exist" and
//! "give me its text". Hosts that serve entries from somewhere other than the
//! local disk (a dev server's virtual modules, an in-memory project) implement
//! `Runtime` themselves and hand it to the plugin.

pub mod native;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

use std::path::{Path, PathBuf};

pub use native::NativeRuntime;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryRuntime;

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur while reading entry sources
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("File is not valid UTF-8: {0}")]
    InvalidUtf8(PathBuf),
}

/// Read-only view of the filesystem holding the entry modules.
pub trait Runtime: Send + Sync + std::fmt::Debug {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> RuntimeResult<String>;
}
