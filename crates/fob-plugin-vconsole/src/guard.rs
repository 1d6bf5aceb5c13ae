//! Decides whether an entry group should be left alone.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::options::FilterList;
use crate::runtime::{NativeRuntime, Runtime};
use crate::scan;

/// Skip check consulted for every terminal entry.
///
/// Injection is skipped for a group of entry paths when any path is listed in
/// the filter, or when any existing file already constructs a vConsole
/// instance. Paths that do not exist (dev-server virtual entries, bare package
/// specifiers) cannot be inspected and never trigger the content check.
#[derive(Debug, Clone)]
pub struct InjectionGuard {
    filter: FilterList,
    runtime: Arc<dyn Runtime>,
    /// Relative entry paths are looked up under this directory.
    base_dir: Option<PathBuf>,
}

impl InjectionGuard {
    pub fn new(filter: FilterList) -> Self {
        Self {
            filter,
            runtime: Arc::new(NativeRuntime::new()),
            base_dir: None,
        }
    }

    pub fn with_runtime(mut self, runtime: Arc<dyn Runtime>) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn filter(&self) -> &FilterList {
        &self.filter
    }

    pub fn should_skip(&self, paths: &[String]) -> bool {
        paths.iter().any(|path| {
            if self.filter.contains(path) {
                debug!(entry = %path, "entry is filtered, skipping vConsole injection");
                return true;
            }
            if self.already_initialized(path) {
                debug!(entry = %path, "entry already creates a vConsole, skipping injection");
                return true;
            }
            false
        })
    }

    fn already_initialized(&self, path: &str) -> bool {
        let file = self.locate(path);
        if !self.runtime.exists(&file) {
            return false;
        }
        match self.runtime.read_to_string(&file) {
            Ok(source) => scan::initializes_console(&source),
            Err(err) => {
                debug!(entry = %path, error = %err, "could not read entry, assuming no vConsole");
                false
            }
        }
    }

    fn locate(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}
