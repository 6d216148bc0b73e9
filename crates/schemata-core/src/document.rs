//! The normalized schema document and its top-level accessors
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::cache::{CacheStats, ExampleCache};
use crate::config::SchemaConfig;
use crate::error::{kind_of, SchemaError, SchemaResult};
use crate::normalize::{normalize_entry, normalize_map, EXAMPLE_KEY};
use crate::resolver::REF_KEY;
use serde_json::{Map, Value};

/// Shallow merge: every key of `overlay` replaces the same key of `base`.
///
/// Returns a new map; neither input is modified.
pub fn merge_maps(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// A JSON-Schema-like document with a lazily filled example cache
#[derive(Debug, Clone)]
pub struct Schema {
    pub(crate) data: Map<String, Value>,
    pub(crate) examples: ExampleCache,
    pub(crate) config: SchemaConfig,
}

impl Schema {
    /// Create a schema from a root object, normalizing it
    pub fn new(data: Map<String, Value>) -> Self {
        Self::with_config(data, SchemaConfig::default())
    }

    /// Create a schema with custom resolver and synthesis limits
    pub fn with_config(data: Map<String, Value>, config: SchemaConfig) -> Self {
        Self {
            data: normalize_map(data),
            examples: ExampleCache::new(),
            config,
        }
    }

    /// Create a schema from an already-parsed tree; the root must be an object
    pub fn from_value(value: Value) -> SchemaResult<Self> {
        Self::from_value_with_config(value, SchemaConfig::default())
    }

    /// Like [`Schema::from_value`], with custom limits
    pub fn from_value_with_config(value: Value, config: SchemaConfig) -> SchemaResult<Self> {
        match value {
            Value::Object(map) => Ok(Self::with_config(map, config)),
            Value::Null => Ok(Self::with_config(Map::new(), config)),
            other => Err(SchemaError::invalid_document(format!(
                "root must be an object, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// The normalized root object
    pub fn root(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Consume the schema, returning the normalized root
    pub fn into_value(self) -> Value {
        Value::Object(self.data)
    }

    /// Active limits
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Read a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Write a top-level key, normalizing the value
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        let value = normalize_entry(&key, value);
        self.data.insert(key, value);
        self.examples.clear();
    }

    /// Shallow-merge a raw object into this document (last writer wins)
    pub fn merge(&mut self, other: &Map<String, Value>) {
        let overlay = normalize_map(other.clone());
        self.data = merge_maps(&self.data, &overlay);
        self.examples.clear();
    }

    /// Shallow-merge another schema's root into this document
    pub fn merge_schema(&mut self, other: &Schema) {
        self.data = merge_maps(&self.data, &other.data);
        self.examples.clear();
    }

    /// The `href` of the first `links` entry whose `rel` is `self`
    pub fn href(&self) -> Option<&str> {
        self.data
            .get("links")?
            .as_array()?
            .iter()
            .find(|link| link.get("rel").and_then(Value::as_str) == Some("self"))?
            .get("href")?
            .as_str()
    }

    /// Names of the entries under the root `definitions` object
    pub fn definition_ids(&self) -> Vec<&str> {
        self.data
            .get("definitions")
            .and_then(Value::as_object)
            .map(|definitions| definitions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Every `$ref` pointer in the document, outside example payloads
    pub fn references(&self) -> Vec<&str> {
        let mut references = Vec::new();
        for (key, value) in &self.data {
            if key != EXAMPLE_KEY {
                collect_references(value, &mut references);
            }
        }
        references
    }

    /// Example cache statistics
    pub fn example_cache_stats(&self) -> CacheStats {
        self.examples.stats()
    }

    /// Forget all memoized definition examples
    pub fn clear_example_cache(&mut self) {
        self.examples.clear();
    }
}

fn collect_references<'a>(value: &'a Value, references: &mut Vec<&'a str>) {
    match value {
        Value::Object(obj) => {
            if let Some(Value::String(pointer)) = obj.get(REF_KEY) {
                if !references.contains(&pointer.as_str()) {
                    references.push(pointer);
                }
            }
            for (key, val) in obj {
                if key != EXAMPLE_KEY {
                    collect_references(val, references);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_references(item, references);
            }
        }
        _ => {}
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(Map::new())
    }
}
