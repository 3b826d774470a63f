//! Decoded view of a configuration JSON Schema.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::domain::errors::{ConfigError, ConfigResult};

/// Ordered configuration mapping flowing through the pipeline.
pub type ConfigMap = Map<String, Value>;

/// Where a schema comes from: an in-memory document or a storage location.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaSource {
    Inline(Value),
    Location(String),
}

impl From<Value> for SchemaSource {
    fn from(value: Value) -> Self {
        Self::Inline(value)
    }
}

impl From<&str> for SchemaSource {
    fn from(location: &str) -> Self {
        Self::Location(location.to_string())
    }
}

impl From<String> for SchemaSource {
    fn from(location: String) -> Self {
        Self::Location(location)
    }
}

impl From<&Path> for SchemaSource {
    fn from(path: &Path) -> Self {
        Self::Location(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for SchemaSource {
    fn from(path: PathBuf) -> Self {
        Self::from(path.as_path())
    }
}

/// JSON Schema primitive and structural type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

impl PropertyType {
    /// Parse a JSON Schema `type` name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "object" => Some(Self::Object),
            "array" => Some(Self::Array),
            "null" => Some(Self::Null),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
        }
    }
}

/// Per-property descriptor decoded from `properties`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySchema {
    /// Declared type; `None` when absent, a union, or unknown.
    pub property_type: Option<PropertyType>,
    /// Declared `default`, kept in its native JSON type.
    pub default: Option<Value>,
    /// Listed in the schema's top-level `required` array.
    pub required: bool,
}

impl PropertySchema {
    fn decode(descriptor: &Value, required: bool) -> Self {
        let property_type = descriptor
            .get("type")
            .and_then(Value::as_str)
            .and_then(PropertyType::parse);
        Self {
            property_type,
            default: descriptor.get("default").cloned(),
            required,
        }
    }
}

/// A configuration schema: the raw document plus its decoded properties.
///
/// Decoded once at load time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSchema {
    raw: Value,
    properties: Vec<(String, PropertySchema)>,
}

impl ConfigSchema {
    /// Decode a schema document.
    ///
    /// The document must be a JSON object. A missing `properties` keyword
    /// declares no keys; a `properties` keyword that is not an object is
    /// rejected.
    pub fn from_value(raw: Value) -> ConfigResult<Self> {
        let Some(document) = raw.as_object() else {
            return Err(ConfigError::InvalidSchema(
                "schema must be a JSON object".to_string(),
            ));
        };

        let required: Vec<&str> = document
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let properties = match document.get("properties") {
            None => Vec::new(),
            Some(Value::Object(properties)) => properties
                .iter()
                .map(|(name, descriptor)| {
                    let is_required = required.contains(&name.as_str());
                    (name.clone(), PropertySchema::decode(descriptor, is_required))
                })
                .collect(),
            Some(_) => {
                return Err(ConfigError::InvalidSchema(
                    "`properties` must be a JSON object".to_string(),
                ))
            }
        };

        Ok(Self { raw, properties })
    }

    /// The schema document as loaded.
    pub const fn raw(&self) -> &Value {
        &self.raw
    }

    /// Look up a declared property.
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, property)| property)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Declared properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertySchema)> {
        self.properties
            .iter()
            .map(|(name, property)| (name.as_str(), property))
    }
}
