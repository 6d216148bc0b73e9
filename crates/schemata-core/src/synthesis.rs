//! Example synthesis for documentation
//!
//! Walks resolved schema nodes and builds one representative value for each.
//! A node that yields no example produces `None`; inside an object example the
//! property is still listed, as `null`.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::document::Schema;
use crate::error::{SchemaError, SchemaResult};
use crate::normalize::EXAMPLE_KEY;
use crate::resolver::REF_KEY;
use serde_json::{Map, Value};
use tracing::debug;

const ALL_OF: &str = "allOf";
const ANY_OF: &str = "anyOf";
const ONE_OF: &str = "oneOf";
const PROPERTIES: &str = "properties";
const ITEMS: &str = "items";

/// Pick the alternative whose `$ref` ends in `id`, else the first one
pub fn select_alternative(alternatives: &Value) -> Option<&Value> {
    let alternatives = alternatives.as_array()?;
    alternatives
        .iter()
        .find(|alternative| ref_basename(alternative) == Some("id"))
        .or_else(|| alternatives.first())
}

fn ref_basename(alternative: &Value) -> Option<&str> {
    alternative
        .get(REF_KEY)
        .and_then(Value::as_str)
        .and_then(|pointer| pointer.trim_end_matches('/').rsplit('/').next())
}

fn wrap_in_array(example: Value) -> Value {
    match example {
        Value::Array(_) => example,
        other => Value::Array(vec![other]),
    }
}

impl Schema {
    /// Example for a single schema value, such as one property's schema
    pub fn example_for_value(&self, node: &Value) -> SchemaResult<Option<Value>> {
        self.value_example(node, 0)
    }

    /// Example for a schema definition, a `$ref` object or a pointer string
    pub fn example_for_schema(&self, schema: &Value) -> SchemaResult<Option<Value>> {
        self.schema_example(schema, 0)
    }

    /// Example for `#/definitions/<id>`, memoized per id
    pub fn example_for_definition(&mut self, id: &str) -> SchemaResult<Option<Value>> {
        if let Some(cached) = self.examples.lookup(id) {
            debug!(definition = id, "Example cache hit");
            return Ok(cached);
        }

        let (_, definition) = self.dereference_pointer(&format!("#/definitions/{}", id))?;
        let example = self.example_for_schema(&definition)?;
        debug!(definition = id, found = example.is_some(), "Synthesized definition example");
        self.examples.insert(id, example.clone());
        Ok(example)
    }

    fn descend(&self, depth: usize) -> SchemaResult<usize> {
        if depth >= self.config.max_synthesis_depth {
            return Err(SchemaError::SynthesisDepthExceeded {
                depth: self.config.max_synthesis_depth,
            });
        }
        Ok(depth + 1)
    }

    fn value_example(&self, node: &Value, depth: usize) -> SchemaResult<Option<Value>> {
        let depth = self.descend(depth)?;

        if let Some(example) = node.get(EXAMPLE_KEY) {
            return Ok(match example.get(ONE_OF) {
                Some(choices) if example.is_object() => choices.as_array().and_then(|c| c.first()).cloned(),
                _ => Some(example.clone()),
            });
        }

        if let Some(alternatives) = node.get(ANY_OF).or_else(|| node.get(ONE_OF)) {
            return match select_alternative(alternatives) {
                Some(chosen) => self.schema_example(chosen, depth),
                None => Ok(None),
            };
        }

        if node.get(PROPERTIES).is_some() {
            return self.schema_example(node, depth);
        }

        if let Some(items) = node.get(ITEMS) {
            let (_, items) = self.dereference(items)?;
            if let Some(example) = items.get(EXAMPLE_KEY) {
                return Ok(Some(wrap_in_array(example.clone())));
            }
            let example = match items.get(ONE_OF) {
                Some(alternatives) => match select_alternative(alternatives) {
                    Some(chosen) => self.schema_example(chosen, depth)?,
                    None => None,
                },
                None => self.schema_example(&items, depth)?,
            };
            return Ok(Some(Value::Array(vec![example.unwrap_or(Value::Null)])));
        }

        Ok(None)
    }

    fn schema_example(&self, schema: &Value, depth: usize) -> SchemaResult<Option<Value>> {
        let depth = self.descend(depth)?;
        let (_, resolved) = self.dereference(schema)?;

        if let Some(example) = resolved.get(EXAMPLE_KEY) {
            return match example {
                Value::String(_) => Ok(Some(example.clone())),
                other => self.resolve_example(other, depth),
            };
        }

        if let Some(members) = resolved.get(ALL_OF) {
            let mut merged = Map::new();
            for member in members.as_array().into_iter().flatten() {
                if let Some(Value::Object(example)) = self.schema_example(member, depth)? {
                    merged.extend(example);
                }
            }
            return Ok(Some(Value::Object(merged)));
        }

        if let Some(properties) = resolved.get(PROPERTIES).and_then(Value::as_object) {
            let mut example = Map::new();
            for (name, property) in properties {
                let (_, property) = self.dereference(property)?;
                let value = self.value_example(&property, depth)?;
                example.insert(name.clone(), value.unwrap_or(Value::Null));
            }
            return Ok(Some(Value::Object(example)));
        }

        if resolved.get(ITEMS).is_some() {
            return self.value_example(&resolved, depth);
        }

        Ok(None)
    }

    /// Resolve a non-string `example` payload.
    ///
    /// A `$ref` object stands for the example of the schema it points at.
    /// Literal objects and arrays are rebuilt with any nested `$ref` objects
    /// replaced the same way; scalars are kept verbatim.
    fn resolve_example(&self, example: &Value, depth: usize) -> SchemaResult<Option<Value>> {
        let depth = self.descend(depth)?;
        match example {
            Value::Object(obj) if obj.get(REF_KEY).is_some_and(Value::is_string) => {
                self.schema_example(example, depth)
            }
            Value::Object(obj) => {
                let mut resolved = Map::new();
                for (key, value) in obj {
                    let value = self.resolve_example(value, depth)?;
                    resolved.insert(key.clone(), value.unwrap_or(Value::Null));
                }
                Ok(Some(Value::Object(resolved)))
            }
            Value::Array(items) => {
                let mut resolved = Vec::with_capacity(items.len());
                for item in items {
                    resolved.push(self.resolve_example(item, depth)?.unwrap_or(Value::Null));
                }
                Ok(Some(Value::Array(resolved)))
            }
            scalar => Ok(Some(scalar.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchemaConfig;
    use serde_json::json;

    fn schema(value: Value) -> Schema {
        Schema::from_value(value).unwrap()
    }

    #[test]
    fn test_select_alternative_prefers_id() {
        let alternatives = json!([
            {"$ref": "#/definitions/user/definitions/email"},
            {"$ref": "#/definitions/user/definitions/id"}
        ]);
        assert_eq!(
            select_alternative(&alternatives),
            Some(&json!({"$ref": "#/definitions/user/definitions/id"}))
        );

        let no_id = json!([{"type": "string"}, {"type": "integer"}]);
        assert_eq!(select_alternative(&no_id), Some(&json!({"type": "string"})));
        assert_eq!(select_alternative(&json!([])), None);
    }

    #[test]
    fn test_value_example_literal() {
        let schema = schema(json!({}));
        assert_eq!(schema.example_for_value(&json!({"example": 42})).unwrap(), Some(json!(42)));
        assert_eq!(
            schema.example_for_value(&json!({"example": {"oneOf": ["first", "second"]}})).unwrap(),
            Some(json!("first"))
        );
        assert_eq!(schema.example_for_value(&json!({"type": ["string"]})).unwrap(), None);
    }

    #[test]
    fn test_any_of_prefers_id_reference() {
        let schema = schema(json!({
            "definitions": {
                "user": {
                    "definitions": {
                        "email": {"type": "string", "example": "alice@example.com"},
                        "id": {"type": "string", "example": "01234567-89ab-cdef-0123-456789abcdef"}
                    }
                }
            }
        }));

        let node = json!({"anyOf": [
            {"$ref": "#/definitions/user/definitions/email"},
            {"$ref": "#/definitions/user/definitions/id"}
        ]});
        assert_eq!(
            schema.example_for_value(&node).unwrap(),
            Some(json!("01234567-89ab-cdef-0123-456789abcdef"))
        );

        let one_of = json!({"oneOf": [{"$ref": "#/definitions/user/definitions/email"}]});
        assert_eq!(schema.example_for_value(&one_of).unwrap(), Some(json!("alice@example.com")));
    }

    #[test]
    fn test_items_with_scalar_example() {
        let schema = schema(json!({"definitions": {"tag": {"type": "string", "example": "blue"}}}));
        let node = json!({"type": ["array"], "items": {"$ref": "#/definitions/tag"}});
        assert_eq!(schema.example_for_value(&node).unwrap(), Some(json!(["blue"])));

        let array_example = json!({"items": {"example": ["a", "b"]}});
        assert_eq!(schema.example_for_value(&array_example).unwrap(), Some(json!(["a", "b"])));
    }

    #[test]
    fn test_items_without_example_wraps_synthesis() {
        let schema = schema(json!({}));
        let node = json!({"items": {"properties": {"name": {"example": "x"}, "age": {}}}});
        assert_eq!(
            schema.example_for_value(&node).unwrap(),
            Some(json!([{"name": "x", "age": null}]))
        );

        let opaque = json!({"items": {"type": "string"}});
        assert_eq!(schema.example_for_value(&opaque).unwrap(), Some(json!([null])));
    }

    #[test]
    fn test_items_one_of() {
        let schema = schema(json!({
            "definitions": {
                "app": {"definitions": {"id": {"example": "app-1"}, "name": {"example": "demo"}}}
            }
        }));
        let node = json!({"items": {"oneOf": [
            {"$ref": "#/definitions/app/definitions/name"},
            {"$ref": "#/definitions/app/definitions/id"}
        ]}});
        assert_eq!(schema.example_for_value(&node).unwrap(), Some(json!(["app-1"])));
    }

    #[test]
    fn test_all_of_later_member_wins() {
        let schema = schema(json!({}));
        let node = json!({"allOf": [
            {"properties": {"a": {"example": 1}}},
            {"properties": {"a": {"example": 2}, "b": {"example": 3}}}
        ]});
        assert_eq!(schema.example_for_schema(&node).unwrap(), Some(json!({"a": 2, "b": 3})));
    }

    #[test]
    fn test_example_ref_is_followed() {
        let schema = schema(json!({
            "definitions": {
                "owner": {"properties": {"email": {"example": "owner@example.com"}}},
                "app": {"example": {"$ref": "#/definitions/owner"}}
            }
        }));
        assert_eq!(
            schema.example_for_schema(&json!("#/definitions/app")).unwrap(),
            Some(json!({"email": "owner@example.com"}))
        );
    }

    #[test]
    fn test_literal_object_example_kept() {
        let schema = schema(json!({
            "definitions": {
                "color": {"example": "red"},
                "widget": {"example": {"type": "widget", "count": 2, "color": {"$ref": "#/definitions/color"}}}
            }
        }));
        assert_eq!(
            schema.example_for_schema(&json!("#/definitions/widget")).unwrap(),
            Some(json!({"type": "widget", "count": 2, "color": "red"}))
        );
    }

    #[test]
    fn test_missing_reference_propagates() {
        let schema = schema(json!({}));
        let node = json!({"properties": {"owner": {"$ref": "#/definitions/owner"}}});
        let err = schema.example_for_schema(&node).unwrap_err();
        assert_eq!(err.pointer(), Some("#/definitions/owner"));
    }

    #[test]
    fn test_self_reference_hits_depth_limit() {
        let data = json!({
            "definitions": {
                "node": {"properties": {"children": {"items": {"$ref": "#/definitions/node"}}}}
            }
        });
        let Value::Object(map) = data else { unreachable!() };
        let schema = Schema::with_config(map, SchemaConfig::default().with_max_synthesis_depth(16));

        let err = schema.example_for_schema(&json!("#/definitions/node")).unwrap_err();
        assert!(matches!(err, SchemaError::SynthesisDepthExceeded { depth: 16 }));
    }
}
