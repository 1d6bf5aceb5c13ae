//! Error types for plugin configuration and entry conversion.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PluginError>;

#[derive(Debug, Error)]
pub enum PluginError {
    /// An entry value is not a string, a string array, or an object of entries.
    #[error("invalid entry at `{path}`: {reason}")]
    InvalidEntry { path: String, reason: String },

    #[error("invalid plugin option `{field}`{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidOptions { field: String, hint: Option<String> },

    #[error("plugin options not found in {0}")]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PluginError {
    pub(crate) fn invalid_entry(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_options(field: impl Into<String>, hint: impl ToString) -> Self {
        Self::InvalidOptions {
            field: field.into(),
            hint: Some(hint.to_string()),
        }
    }
}
