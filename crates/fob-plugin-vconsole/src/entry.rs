//! Entry configuration values.

use std::fmt;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{PluginError, Result};

/// Future returned by a dynamic entry producer.
pub type EntryFuture = BoxFuture<'static, anyhow::Result<Entry>>;

/// Zero-argument producer behind [`Entry::Dynamic`].
pub type EntryProducer = Arc<dyn Fn() -> EntryFuture + Send + Sync>;

/// A bundler entry configuration.
#[derive(Clone)]
pub enum Entry {
    /// Single module path.
    Single(String),

    /// Ordered module paths bundled into one chunk.
    Multiple(Vec<String>),

    /// Named entries. Values may themselves be any entry shape.
    Named(IndexMap<String, Entry>),

    /// Entry computed on demand, possibly asynchronously.
    Dynamic(EntryProducer),
}

impl Entry {
    /// Wrap an async producer.
    ///
    /// The producer is called each time the host resolves the entry, which
    /// may be more than once across rebuilds.
    pub fn dynamic<F, Fut>(producer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = anyhow::Result<Entry>> + Send + 'static,
    {
        Self::Dynamic(Arc::new(move || producer().boxed()))
    }

    /// Wrap a synchronous producer.
    pub fn dynamic_sync<F>(producer: F) -> Self
    where
        F: Fn() -> anyhow::Result<Entry> + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(move || future::ready(producer()).boxed()))
    }

    /// Leaf module paths for `Single` and `Multiple`, `None` otherwise.
    pub fn paths(&self) -> Option<&[String]> {
        match self {
            Entry::Single(path) => Some(std::slice::from_ref(path)),
            Entry::Multiple(paths) => Some(paths),
            Entry::Named(_) | Entry::Dynamic(_) => None,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Entry::Dynamic(_))
    }

    /// Invoke every producer, including ones nested under named entries, and
    /// return a fully static entry.
    pub fn resolve(self) -> EntryFuture {
        resolve_entry(self).boxed()
    }

    /// Convert a JSON entry description.
    ///
    /// Strings, arrays of strings and objects map to `Single`, `Multiple` and
    /// `Named`. Anything else is rejected with the location of the bad value.
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_value_at(value, "entry")
    }

    fn from_value_at(value: Value, at: &str) -> Result<Self> {
        match value {
            Value::String(path) => Ok(Entry::Single(path)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::String(path) => Ok(path),
                    other => Err(PluginError::invalid_entry(
                        format!("{at}[{i}]"),
                        format!("expected a module path string, found {}", kind(&other)),
                    )),
                })
                .collect::<Result<Vec<_>>>()
                .map(Entry::Multiple),
            Value::Object(map) => map
                .into_iter()
                .map(|(name, value)| {
                    let entry = Self::from_value_at(value, &format!("{at}.{name}"))?;
                    Ok((name, entry))
                })
                .collect::<Result<IndexMap<_, _>>>()
                .map(Entry::Named),
            other => Err(PluginError::invalid_entry(
                at,
                format!(
                    "expected a string, an array of strings or an object, found {}",
                    kind(&other)
                ),
            )),
        }
    }
}

async fn resolve_entry(entry: Entry) -> anyhow::Result<Entry> {
    match entry {
        Entry::Dynamic(producer) => producer().await?.resolve().await,
        Entry::Named(map) => {
            let mut resolved = IndexMap::with_capacity(map.len());
            for (name, member) in map {
                resolved.insert(name, member.resolve().await?);
            }
            Ok(Entry::Named(resolved))
        }
        terminal => Ok(terminal),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Single(path) => f.debug_tuple("Single").field(path).finish(),
            Entry::Multiple(paths) => f.debug_tuple("Multiple").field(paths).finish(),
            Entry::Named(map) => f.debug_tuple("Named").field(map).finish(),
            Entry::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Static variants compare structurally; dynamic entries are equal only when
/// they share the same producer.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Entry::Single(a), Entry::Single(b)) => a == b,
            (Entry::Multiple(a), Entry::Multiple(b)) => a == b,
            (Entry::Named(a), Entry::Named(b)) => a == b,
            (Entry::Dynamic(a), Entry::Dynamic(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Entry {
    fn from(path: &str) -> Self {
        Entry::Single(path.to_string())
    }
}

impl From<String> for Entry {
    fn from(path: String) -> Self {
        Entry::Single(path)
    }
}

impl From<Vec<String>> for Entry {
    fn from(paths: Vec<String>) -> Self {
        Entry::Multiple(paths)
    }
}

impl From<&[&str]> for Entry {
    fn from(paths: &[&str]) -> Self {
        Entry::Multiple(paths.iter().map(|p| p.to_string()).collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Entry)> for Entry {
    fn from_iter<I: IntoIterator<Item = (K, Entry)>>(iter: I) -> Self {
        Entry::Named(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn from_value_maps_shapes() {
        assert_eq!(Entry::from_value(json!("./src")).unwrap(), Entry::from("./src"));
        assert_eq!(
            Entry::from_value(json!(["./a.js", "./b.js"])).unwrap(),
            Entry::from(&["./a.js", "./b.js"][..])
        );

        let named = Entry::from_value(json!({ "main": "./main.js", "admin": ["./admin.js"] }))
            .unwrap();
        let Entry::Named(map) = named else {
            panic!("expected named entry");
        };
        assert_eq!(map["main"], Entry::from("./main.js"));
        assert_eq!(map["admin"], Entry::Multiple(vec!["./admin.js".into()]));
    }

    #[test]
    fn from_value_reports_location() {
        let err = Entry::from_value(json!({ "main": ["./a.js", 42] })).unwrap_err();
        match err {
            PluginError::InvalidEntry { path, reason } => {
                assert_eq!(path, "entry.main[1]");
                assert!(reason.contains("a number"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            Entry::from_value(json!(null)),
            Err(PluginError::InvalidEntry { path, .. }) if path == "entry"
        ));
    }

    #[test]
    fn paths_only_for_terminal_entries() {
        assert_eq!(Entry::from("./a.js").paths(), Some(&["./a.js".to_string()][..]));
        assert!(Entry::from_iter([("a", Entry::from("./a.js"))]).paths().is_none());
        assert!(Entry::dynamic_sync(|| Ok(Entry::from("./a.js"))).paths().is_none());
    }

    #[test]
    fn dynamic_entries_compare_by_producer() {
        let entry = Entry::dynamic_sync(|| Ok(Entry::from("./a.js")));
        assert_eq!(entry, entry.clone());
        assert_ne!(entry, Entry::dynamic_sync(|| Ok(Entry::from("./a.js"))));
        assert_eq!(format!("{entry:?}"), "Dynamic(..)");
    }

    #[tokio::test]
    async fn resolve_invokes_nested_producers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let entry = Entry::dynamic(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async {
                Ok(Entry::from_iter([
                    ("main", Entry::from("./main.js")),
                    ("lazy", Entry::dynamic_sync(|| Ok(Entry::from("./lazy.js")))),
                ]))
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let resolved = entry.resolve().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            resolved,
            Entry::from_iter([
                ("main", Entry::from("./main.js")),
                ("lazy", Entry::from("./lazy.js")),
            ])
        );
    }

    #[tokio::test]
    async fn resolve_propagates_producer_errors() {
        let entry = Entry::dynamic(|| async { Err(anyhow::anyhow!("config service down")) });
        let err = entry.resolve().await.unwrap_err();
        assert_eq!(err.to_string(), "config service down");
    }
}
