//! Sample dotenv generation from a schema.

use serde_json::Value;

use crate::domain::models::{ConfigMap, ConfigSchema};

use super::extractor::extract;

/// Layer configuration sources for a sample; later layers win.
pub fn merge_layers<'a>(layers: impl IntoIterator<Item = &'a ConfigMap>) -> ConfigMap {
    let mut merged = ConfigMap::new();
    for layer in layers {
        for (key, value) in layer {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Render a sample dotenv for `schema`.
///
/// Declared keys present in `config` (or carrying a default) become
/// `KEY=value` lines; every other declared key becomes a commented
/// `# KEY=<type>` placeholder.
pub fn generate_sample_dotenv(schema: &ConfigSchema, config: &ConfigMap) -> String {
    let extracted = extract(schema, config);

    let mut lines: Vec<String> = extracted
        .iter()
        .map(|(key, value)| format!("{key}={}", render_value(value)))
        .collect();

    for (name, property) in schema.properties() {
        if extracted.contains_key(name) {
            continue;
        }
        let type_name = property.property_type.map_or("any", |t| t.as_str());
        lines.push(format!("# {name}=<{type_name}>"));
    }

    lines.join("\n")
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
