//! Bundler plugin that injects a vConsole bootstrap module into entry points
//!
//! When enabled, the plugin prepends a bootstrap module (which creates the
//! in-page vConsole debugging overlay) to every entry of the host's entry
//! configuration. Entries are left untouched when they are listed in the
//! `filter` option, or when one of their files already constructs a vConsole
//! instance.
//!
//! ## Entry shapes
//!
//! ```text
//! "./src"                      → ["bootstrap", "./src"]
//! ["./a.js", "./b.js"]         → ["bootstrap", "./a.js", "./b.js"]
//! { main: "./main.js", .. }    → { main: ["bootstrap", "./main.js"], .. }
//! || async { .. }              → || async { rewrite(original().await) }
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use fob_plugin_vconsole::{Compiler, CompilerOptions, CompilerPlugin, Entry, PluginOptions, VConsolePlugin};
//! use std::path::Path;
//!
//! struct Host(CompilerOptions);
//!
//! impl Compiler for Host {
//!     fn options(&self) -> &CompilerOptions { &self.0 }
//!     fn options_mut(&mut self) -> &mut CompilerOptions { &mut self.0 }
//!     fn entry_option(&mut self, _context: &Path, _entry: &Entry) {}
//! }
//!
//! let plugin = VConsolePlugin::new(
//!     PluginOptions::new().enable(true).bootstrap("vconsole-bootstrap.js"),
//! );
//! let mut host = Host(CompilerOptions::new("/does-not-exist").with_entry("./src/index.js"));
//! plugin.apply(&mut host).unwrap();
//!
//! assert_eq!(
//!     host.options().entry,
//!     Some(Entry::from(&["vconsole-bootstrap.js", "./src/index.js"][..])),
//! );
//! ```

pub mod compiler;
pub mod entry;
pub mod error;
pub mod guard;
pub mod options;
pub mod plugin;
pub mod rewrite;
pub mod runtime;
pub mod scan;

#[cfg(feature = "logging")]
pub mod logging;

pub use compiler::{Compiler, CompilerOptions, CompilerPlugin};
pub use entry::{Entry, EntryFuture, EntryProducer};
pub use error::{PluginError, Result};
pub use guard::InjectionGuard;
pub use options::{DEFAULT_BOOTSTRAP_MODULE, DEFAULT_ENTRY, FilterList, PluginOptions};
pub use plugin::VConsolePlugin;
pub use rewrite::EntryRewriter;
pub use runtime::{NativeRuntime, Runtime, RuntimeError, RuntimeResult};
pub use scan::{initializes_console, strip_comments};

#[cfg(any(test, feature = "test-utils"))]
pub use runtime::MemoryRuntime;

/// Source of the default bootstrap module, for hosts that serve
/// [`DEFAULT_BOOTSTRAP_MODULE`] as a virtual file.
pub const BOOTSTRAP_SOURCE: &str = include_str!("../assets/vconsole.js");
