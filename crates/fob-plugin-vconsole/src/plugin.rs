//! The vConsole plugin applied to a host compiler.

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::compiler::{Compiler, CompilerPlugin};
use crate::entry::Entry;
use crate::error::Result;
use crate::guard::InjectionGuard;
use crate::options::PluginOptions;
use crate::rewrite::EntryRewriter;
use crate::runtime::{NativeRuntime, Runtime};

/// Plugin that injects the vConsole bootstrap module into the host's entries.
///
/// # Architecture
///
/// ```text
/// apply() → enabled? → entry (or default) → EntryRewriter → options.entry
///                                                          → entry_option hook
/// ```
#[derive(Debug, Clone)]
pub struct VConsolePlugin {
    options: PluginOptions,
    runtime: Arc<dyn Runtime>,
}

impl VConsolePlugin {
    /// Create the plugin with options, reading entry files from disk.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fob_plugin_vconsole::{PluginOptions, VConsolePlugin};
    ///
    /// let plugin = VConsolePlugin::new(PluginOptions::new().enable(true));
    /// assert!(plugin.options().enable);
    /// ```
    pub fn new(options: PluginOptions) -> Self {
        Self {
            options,
            runtime: Arc::new(NativeRuntime::new()),
        }
    }

    /// Create the plugin from a JSON options object.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(Self::new(PluginOptions::from_value(value)?))
    }

    /// Read entry files through a different runtime.
    pub fn with_runtime(mut self, runtime: Arc<dyn Runtime>) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// Rewriter for a build rooted at `context`.
    pub fn rewriter(&self, context: &Path) -> EntryRewriter {
        let guard = InjectionGuard::new(self.options.filter.clone())
            .with_runtime(self.runtime.clone())
            .with_base_dir(context);
        EntryRewriter::new([self.options.bootstrap.as_str()], guard)
    }
}

impl CompilerPlugin for VConsolePlugin {
    fn name(&self) -> Cow<'static, str> {
        "fob-vconsole".into()
    }

    fn apply(&self, compiler: &mut dyn Compiler) -> Result<()> {
        if !self.options.enable {
            debug!("vConsole injection disabled");
            return Ok(());
        }

        let options = compiler.options_mut();
        let context = options.context.clone();
        let original = options
            .entry
            .take()
            .unwrap_or_else(|| Entry::from(self.options.default_entry.as_str()));

        let entry = self.rewriter(&context).rewrite(original);
        info!(bootstrap = %self.options.bootstrap, "injecting vConsole into entries");

        options.entry = Some(entry.clone());
        compiler.entry_option(&context, &entry);
        Ok(())
    }
}
