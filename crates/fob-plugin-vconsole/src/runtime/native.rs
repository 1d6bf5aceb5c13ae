//! Native runtime backed by `std::fs`.

// NativeRuntime is the one place allowed to touch the OS filesystem
#![allow(clippy::disallowed_methods)]

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Runtime, RuntimeError, RuntimeResult};

/// Native filesystem runtime.
///
/// Reads are blocking. The plugin runs once per configuration pass, before
/// any bundling work starts, so there is nothing to yield to.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRuntime;

impl NativeRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl Runtime for NativeRuntime {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> RuntimeResult<String> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RuntimeError::FileNotFound(PathBuf::from(path)),
            ErrorKind::InvalidData => RuntimeError::InvalidUtf8(PathBuf::from(path)),
            _ => RuntimeError::Io(format!("Failed to read {}: {}", path.display(), e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_existing_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("main.js");
        std::fs::write(&file, "console.log(1);").unwrap();

        let runtime = NativeRuntime::new();
        assert!(runtime.exists(&file));
        assert_eq!(runtime.read_to_string(&file).unwrap(), "console.log(1);");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("missing.js");

        let runtime = NativeRuntime::new();
        assert!(!runtime.exists(&file));
        assert!(matches!(
            runtime.read_to_string(&file),
            Err(RuntimeError::FileNotFound(p)) if p == file
        ));
    }

    #[test]
    fn directories_do_not_count_as_entry_files() {
        let dir = TempDir::new().unwrap();
        assert!(!NativeRuntime::new().exists(dir.path()));
    }

    #[test]
    fn binary_file_is_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("blob.js");
        std::fs::write(&file, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            NativeRuntime::new().read_to_string(&file),
            Err(RuntimeError::InvalidUtf8(_))
        ));
    }
}
