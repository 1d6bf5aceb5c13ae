//! Loading plugin options from project files.

use fob_plugin_vconsole::{PluginError, PluginOptions};
use std::fs;
use tempfile::TempDir;

#[test]
fn loads_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vconsole.toml");
    fs::write(
        &path,
        r#"
enable = true
filter = ["./src/admin.js", "./src/login.js"]
bootstrap = "./debug/vconsole.js"
"#,
    )
    .unwrap();

    let options = PluginOptions::load(&path).unwrap();
    assert!(options.enable);
    assert_eq!(options.filter.len(), 2);
    assert_eq!(options.bootstrap, "./debug/vconsole.js");
    assert_eq!(options.default_entry, "./src");
}

#[test]
fn loads_package_json_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(
        &path,
        r#"{
  "name": "app",
  "vconsole": {
    "enable": true,
    "filter": "./src/admin.js",
    "defaultEntry": "./app"
  }
}"#,
    )
    .unwrap();

    let options = PluginOptions::load(&path).unwrap();
    assert!(options.enable);
    assert!(options.filter.contains("./src/admin.js"));
    assert_eq!(options.default_entry, "./app");
}

#[test]
fn package_json_without_field_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(&path, r#"{ "name": "app" }"#).unwrap();

    assert!(matches!(
        PluginOptions::load(&path),
        Err(PluginError::NotFound(p)) if p == path
    ));
}

#[test]
fn invalid_toml_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vconsole.toml");
    fs::write(&path, "enable = [").unwrap();

    let err = PluginOptions::load(&path).unwrap_err();
    assert!(matches!(err, PluginError::InvalidOptions { ref field, .. } if field == "toml"));
    assert!(err.to_string().starts_with("invalid plugin option `toml`"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        PluginOptions::load(dir.path().join("nope.toml")),
        Err(PluginError::Io(_))
    ));
}
