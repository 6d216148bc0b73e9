//! Construction-time normalization of `type` keywords
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};

/// Key whose subtree is user data and is never normalized
pub const EXAMPLE_KEY: &str = "example";

/// Key normalized from a string to a one-element array
pub const TYPE_KEY: &str = "type";

/// Rewrite every string-valued `type` into a one-element array.
///
/// Subtrees stored under an `example` key are returned untouched, so example
/// payloads keep their own `type` fields. Applying this twice is a no-op.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(normalize_map(map)),
        other => other,
    }
}

/// Normalize every entry of an object.
pub fn normalize_map(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| {
            let value = normalize_entry(&key, value);
            (key, value)
        })
        .collect()
}

/// Normalize a value about to be stored under `key` in an object.
pub fn normalize_entry(key: &str, value: Value) -> Value {
    match (key, value) {
        (EXAMPLE_KEY, value) => value,
        (TYPE_KEY, Value::String(name)) => Value::Array(vec![Value::String(name)]),
        (_, value) => normalize(value),
    }
}
