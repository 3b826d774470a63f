//! Shared fixtures for integration tests.

#![allow(dead_code)]

use schematized_config::ConfigMap;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Schema used by the end-to-end scenarios.
pub fn port_debug_schema() -> Value {
    json!({
        "properties": {
            "PORT": {"type": "integer", "default": 8080},
            "DEBUG": {"type": "boolean"}
        }
    })
}

/// Build a configuration map from a JSON object literal.
pub fn config(value: Value) -> ConfigMap {
    value
        .as_object()
        .cloned()
        .unwrap_or_else(|| panic!("expected a JSON object, got {value}"))
}

/// Write `contents` to `dir/name` and return the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap_or_else(|e| panic!("failed to write {name}: {e}"));
    path
}
