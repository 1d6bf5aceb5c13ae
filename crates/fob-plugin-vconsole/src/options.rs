//! Plugin options.
//!
//! Options can be built in code, deserialized from a JSON value (the shape a
//! JavaScript bundler config would pass), or loaded from `vconsole.toml` /
//! the `vconsole` field of a `package.json`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{PluginError, Result};

/// Module injected ahead of every entry when no `bootstrap` option is given.
pub const DEFAULT_BOOTSTRAP_MODULE: &str = "fob-plugin-vconsole/assets/vconsole.js";

/// Entry used when the host has none configured.
pub const DEFAULT_ENTRY: &str = "./src";

/// Entry paths exempt from injection, compared by exact string equality.
///
/// Deserializes from either a single string or a list of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterList(Vec<String>);

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.iter().any(|entry| entry == path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FilterList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for FilterList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(String),
            Many(Vec<String>),
        }

        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(path) => Self(vec![path]),
            OneOrMany::Many(paths) => Self(paths),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginOptions {
    /// Injection only happens when this is set.
    pub enable: bool,

    pub filter: FilterList,

    /// Module path prepended to each entry.
    pub bootstrap: String,

    /// Entry assumed when the host configuration has none.
    pub default_entry: String,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            enable: false,
            filter: FilterList::default(),
            bootstrap: DEFAULT_BOOTSTRAP_MODULE.to_string(),
            default_entry: DEFAULT_ENTRY.to_string(),
        }
    }
}

impl PluginOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }

    pub fn filter<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = paths.into_iter().collect();
        self
    }

    pub fn bootstrap(mut self, module: impl Into<String>) -> Self {
        self.bootstrap = module.into();
        self
    }

    pub fn default_entry(mut self, entry: impl Into<String>) -> Self {
        self.default_entry = entry.into();
        self
    }

    /// Build options from a JSON object. Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use fob_plugin_vconsole::PluginOptions;
    /// use serde_json::json;
    ///
    /// let options = PluginOptions::from_value(json!({
    ///     "enable": true,
    ///     "filter": "./src/admin.js"
    /// }))
    /// .unwrap();
    ///
    /// assert!(options.enable);
    /// assert!(options.filter.contains("./src/admin.js"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        let options: Self = serde_json::from_value(value)
            .map_err(|e| PluginError::invalid_options("options", e))?;
        options.validate()
    }

    /// Load options from a TOML file, or from the `vconsole` field of a
    /// `package.json`.
    #[allow(clippy::disallowed_methods)]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            let parsed: Value = serde_json::from_str(&content)
                .map_err(|e| PluginError::invalid_options("package.json", e))?;
            return match parsed.get("vconsole") {
                Some(value) if !value.is_null() => Self::from_value(value.clone()),
                _ => Err(PluginError::NotFound(path.to_path_buf())),
            };
        }

        let options: Self =
            toml::from_str(&content).map_err(|e| PluginError::invalid_options("toml", e))?;
        options.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.bootstrap.trim().is_empty() {
            return Err(PluginError::InvalidOptions {
                field: "bootstrap".to_string(),
                hint: Some("bootstrap module path must not be empty".to_string()),
            });
        }
        if self.default_entry.trim().is_empty() {
            return Err(PluginError::InvalidOptions {
                field: "defaultEntry".to_string(),
                hint: Some("default entry must not be empty".to_string()),
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let options = PluginOptions::default();
        assert!(!options.enable);
        assert!(options.filter.is_empty());
        assert_eq!(options.bootstrap, DEFAULT_BOOTSTRAP_MODULE);
        assert_eq!(options.default_entry, "./src");
    }

    #[test]
    fn filter_accepts_single_string() {
        let options = PluginOptions::from_value(json!({ "filter": "./a.js" })).unwrap();
        assert_eq!(options.filter, FilterList::from_iter(["./a.js"]));
    }

    #[test]
    fn filter_accepts_list() {
        let options =
            PluginOptions::from_value(json!({ "filter": ["./a.js", "./b.js"] })).unwrap();
        assert_eq!(options.filter.len(), 2);
        assert!(options.filter.contains("./b.js"));
    }

    #[test]
    fn unknown_options_are_ignored() {
        let options =
            PluginOptions::from_value(json!({ "enable": true, "theme": "dark" })).unwrap();
        assert!(options.enable);
    }

    #[test]
    fn wrong_types_are_rejected() {
        let err = PluginOptions::from_value(json!({ "enable": "yes" })).unwrap_err();
        assert!(matches!(err, PluginError::InvalidOptions { .. }));

        let err = PluginOptions::from_value(json!({ "filter": 3 })).unwrap_err();
        assert!(matches!(err, PluginError::InvalidOptions { .. }));
    }

    #[test]
    fn empty_bootstrap_is_rejected() {
        let err = PluginOptions::from_value(json!({ "bootstrap": " " })).unwrap_err();
        assert!(matches!(err, PluginError::InvalidOptions { field, .. } if field == "bootstrap"));
    }

    #[test]
    fn builder_methods() {
        let options = PluginOptions::new()
            .enable(true)
            .filter(["./admin.js"])
            .bootstrap("./debug/console.js")
            .default_entry("./app");
        assert!(options.enable);
        assert!(options.filter.contains("./admin.js"));
        assert_eq!(options.bootstrap, "./debug/console.js");
        assert_eq!(options.default_entry, "./app");
    }
}
