use proptest::prelude::*;
use schematized_config::{coerce, extract, ConfigMap, ConfigSchema};
use serde_json::{json, Value};

const DECLARED: [&str; 4] = ["PORT", "DEBUG", "RATIO", "NAME"];

fn schema() -> ConfigSchema {
    ConfigSchema::from_value(json!({
        "properties": {
            "PORT": {"type": "integer", "default": 8080},
            "DEBUG": {"type": "boolean", "default": false},
            "RATIO": {"type": "number"},
            "NAME": {"type": "string"}
        }
    }))
    .expect("fixture schema should decode")
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(DECLARED.to_vec()).prop_map(str::to_string),
        "[A-Z_]{1,8}",
    ]
}

fn raw_config_strategy() -> impl Strategy<Value = ConfigMap> {
    prop::collection::vec((key_strategy(), "[ -~]{0,12}"), 0..10).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect()
    })
}

proptest! {
    /// Property: re-extracting an extracted config changes nothing
    #[test]
    fn prop_extract_is_idempotent(raw in raw_config_strategy()) {
        let schema = schema();
        let once = extract(&schema, &raw);
        prop_assert_eq!(extract(&schema, &once), once);
    }

    /// Property: only declared keys survive extraction
    #[test]
    fn prop_extract_drops_undeclared_keys(raw in raw_config_strategy()) {
        let out = extract(&schema(), &raw);
        for key in out.keys() {
            prop_assert!(DECLARED.contains(&key.as_str()), "undeclared key {} survived", key);
        }
    }

    /// Property: declared defaults fill absent keys and survive coercion
    #[test]
    fn prop_defaults_survive_coercion(raw in raw_config_strategy()) {
        let schema = schema();
        let coerced = coerce(&schema, &extract(&schema, &raw));
        if !raw.contains_key("PORT") {
            prop_assert_eq!(&coerced["PORT"], &json!(8080));
        }
        if !raw.contains_key("DEBUG") {
            prop_assert_eq!(&coerced["DEBUG"], &json!(false));
        }
    }

    /// Property: any base-10 integer string coerces to that integer
    #[test]
    fn prop_integer_strings_coerce(n in any::<i64>()) {
        let schema = schema();
        let mut raw = ConfigMap::new();
        raw.insert("PORT".to_string(), Value::String(n.to_string()));
        let coerced = coerce(&schema, &raw);
        prop_assert_eq!(&coerced["PORT"], &json!(n));
    }

    /// Property: coercion keeps the key set and never touches strings
    #[test]
    fn prop_coerce_preserves_keys_and_strings(raw in raw_config_strategy()) {
        let coerced = coerce(&schema(), &raw);
        prop_assert_eq!(coerced.len(), raw.len());
        for (key, value) in &raw {
            if key == "NAME" || !DECLARED.contains(&key.as_str()) {
                prop_assert_eq!(&coerced[key.as_str()], value);
            }
        }
    }
}
