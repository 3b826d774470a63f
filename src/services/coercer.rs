//! Primitive coercion of string values into their declared types.
//!
//! Coercion never fails. A value that cannot be converted is left as it is
//! and the validator reports the type mismatch with a precise path.

use serde_json::{Number, Value};

use crate::domain::models::{ConfigMap, ConfigSchema, PropertySchema, PropertyType};

const TRUTHY: [&str; 5] = ["true", "yes", "y", "1", "on"];
const FALSY: [&str; 5] = ["false", "no", "n", "0", "off"];

/// Outcome of coercing one value.
#[derive(Debug, Clone, PartialEq)]
pub enum Coercion {
    /// The value was converted to its declared type.
    ///
    /// An unrecognized boolean converts to `null`, which fails a `boolean`
    /// type check instead of reading as a missing key.
    Converted(Value),
    /// The value was left as given.
    Unchanged(Value),
}

impl Coercion {
    /// The resulting value, converted or not.
    pub fn into_value(self) -> Value {
        match self {
            Self::Converted(value) | Self::Unchanged(value) => value,
        }
    }

    /// Whether the value was converted.
    pub const fn is_converted(&self) -> bool {
        matches!(self, Self::Converted(_))
    }
}

/// Coerce a single value according to its property descriptor.
pub fn coerce_value(property: &PropertySchema, value: Value) -> Coercion {
    let converted = match (&value, property.property_type) {
        (Value::String(raw), Some(PropertyType::Integer)) => parse_integer(raw),
        (Value::String(raw), Some(PropertyType::Number)) => parse_number(raw),
        (Value::String(raw), Some(PropertyType::Boolean)) => Some(parse_boolean(raw)),
        _ => None,
    };

    match converted {
        Some(converted) => Coercion::Converted(converted),
        None => Coercion::Unchanged(value),
    }
}

/// Coerce every declared, non-null value in `data`.
///
/// Undeclared keys and nulls pass through untouched.
pub fn coerce(schema: &ConfigSchema, data: &ConfigMap) -> ConfigMap {
    data.iter()
        .map(|(key, value)| {
            let value = match schema.property(key) {
                Some(property) if !value.is_null() => {
                    coerce_value(property, value.clone()).into_value()
                }
                _ => value.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

fn parse_integer(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(Value::from(n));
    }
    trimmed.parse::<u64>().ok().map(Value::from)
}

fn parse_number(raw: &str) -> Option<Value> {
    let n = raw.trim().parse::<f64>().ok()?;
    // NaN and infinities have no JSON representation.
    Number::from_f64(n).map(Value::Number)
}

fn parse_boolean(raw: &str) -> Value {
    let lower = raw.to_lowercase();
    if TRUTHY.contains(&lower.as_str()) {
        Value::Bool(true)
    } else if FALSY.contains(&lower.as_str()) {
        Value::Bool(false)
    } else {
        Value::Null
    }
}
