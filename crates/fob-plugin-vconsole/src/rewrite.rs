//! Entry rewriting: prepend the bootstrap module to every entry.
//!
//! ```text
//! Dynamic ──▶ new producer: call original → await → rewrite result
//! Named   ──▶ same keys, each value rewritten
//! Single  ─┐
//! Multiple ┴▶ guard says skip? keep as is : additional ++ original (deduped)
//! ```

use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, trace};

use crate::entry::{Entry, EntryFuture};
use crate::guard::InjectionGuard;

/// Prepends a fixed list of modules to entry configurations.
///
/// Cheap to clone; rewritten dynamic entries hold a clone so they can rewrite
/// whatever their producer yields later.
#[derive(Debug, Clone)]
pub struct EntryRewriter {
    additional: Arc<[String]>,
    guard: InjectionGuard,
}

impl EntryRewriter {
    pub fn new<I, S>(additional: I, guard: InjectionGuard) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            additional: additional.into_iter().map(Into::into).collect(),
            guard,
        }
    }

    pub fn additional(&self) -> &[String] {
        &self.additional
    }

    pub fn guard(&self) -> &InjectionGuard {
        &self.guard
    }

    /// Rewrite `entry`, preserving its shape.
    ///
    /// Dynamic producers are never called here; the returned entry calls them
    /// when the host does. Terminal entries that the guard rejects come back
    /// unchanged, otherwise they become `Multiple` with the additional
    /// modules first.
    pub fn rewrite(&self, entry: Entry) -> Entry {
        match entry {
            Entry::Dynamic(producer) => {
                let rewriter = self.clone();
                Entry::Dynamic(Arc::new(move || {
                    rewriter.clone().rewrite_resolved(producer()).boxed()
                }))
            }
            // Producer members can only be checked once they resolve, so the
            // skip decision is left to each member's terminal entry.
            Entry::Named(map) => Entry::Named(
                map.into_iter()
                    .map(|(name, member)| {
                        trace!(entry = %name, "rewriting named entry");
                        (name, self.rewrite(member))
                    })
                    .collect(),
            ),
            Entry::Single(_) | Entry::Multiple(_) => self.prepend(entry),
        }
    }

    async fn rewrite_resolved(self, pending: EntryFuture) -> anyhow::Result<Entry> {
        let resolved = pending.await?;
        Ok(self.rewrite(resolved))
    }

    fn prepend(&self, entry: Entry) -> Entry {
        let original: &[String] = entry.paths().unwrap_or_default();
        if self.guard.should_skip(original) {
            return entry;
        }

        let mut merged = self.additional.to_vec();
        for path in original {
            if !merged.contains(path) {
                merged.push(path.clone());
            }
        }
        debug!(entries = ?merged, "prepended vConsole bootstrap");
        Entry::Multiple(merged)
    }
}
