//! Host build tool seam.
//!
//! The plugin never drives a build. It needs the host's current entry
//! configuration, somewhere to write the rewritten one, and the host's
//! entry-option hook to announce the change.

use std::path::{Path, PathBuf};

use crate::entry::Entry;

/// The subset of the host's options this plugin reads and writes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompilerOptions {
    /// Build context; relative entry paths are relative to this directory.
    pub context: PathBuf,

    /// `None` when the user configured no entry at all.
    pub entry: Option<Entry>,
}

impl CompilerOptions {
    pub fn new(context: impl Into<PathBuf>) -> Self {
        Self {
            context: context.into(),
            entry: None,
        }
    }

    pub fn with_entry(mut self, entry: impl Into<Entry>) -> Self {
        self.entry = Some(entry.into());
        self
    }
}

/// Host compiler a plugin is applied to.
pub trait Compiler {
    fn options(&self) -> &CompilerOptions;

    fn options_mut(&mut self) -> &mut CompilerOptions;

    /// Entry-option hook, called after the entry configuration changed.
    fn entry_option(&mut self, context: &Path, entry: &Entry);
}

/// Plugins that hook into a [`Compiler`] at configuration time.
pub trait CompilerPlugin {
    /// Plugin name for debugging and logging
    fn name(&self) -> std::borrow::Cow<'static, str>;

    fn apply(&self, compiler: &mut dyn Compiler) -> crate::Result<()>;
}
