//! In-memory runtime for tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::{Runtime, RuntimeError, RuntimeResult};

/// Runtime serving files from a map keyed by path.
///
/// Clones share the same file table, so a test can keep a handle and add
/// files after the plugin has been built.
#[derive(Debug, Clone, Default)]
pub struct MemoryRuntime {
    files: Arc<RwLock<FxHashMap<PathBuf, String>>>,
}

impl MemoryRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.write().insert(path.into(), content.into());
    }
}

impl Runtime for MemoryRuntime {
    fn exists(&self, path: &Path) -> bool {
        self.files.read().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> RuntimeResult<String> {
        self.files
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| RuntimeError::FileNotFound(path.to_path_buf()))
    }
}
