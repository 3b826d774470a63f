//! Declared-item extraction.

use crate::domain::models::{ConfigMap, ConfigSchema};

/// Restrict `data` to the keys declared in `schema`, filling declared defaults.
///
/// Declared keys keep their position from `data`; defaults for declared keys
/// missing from `data` follow in schema declaration order, with their native
/// JSON type. Undeclared keys are dropped. Declared keys without a default
/// stay absent so that `required` is reported by validation.
pub fn extract(schema: &ConfigSchema, data: &ConfigMap) -> ConfigMap {
    let mut out: ConfigMap = data
        .iter()
        .filter(|(key, _)| schema.declares(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    for (name, property) in schema.properties() {
        if out.contains_key(name) {
            continue;
        }
        if let Some(default) = &property.default {
            out.insert(name.to_string(), default.clone());
        }
    }

    out
}
