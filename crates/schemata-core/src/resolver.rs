//! `$ref` pointer resolution with override merging
//!
//! A reference is either a pointer string (`#/definitions/user`) or an object
//! carrying `$ref`; the other keys of that object are overrides merged on top
//! of whatever the pointer resolves to. Chains of `$ref`s are followed until a
//! concrete value is reached.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::document::{merge_maps, Schema};
use crate::error::{SchemaError, SchemaResult};
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::{trace, warn};

/// Key holding a reference pointer
pub const REF_KEY: &str = "$ref";

/// Resolved definition name (if a pointer was followed) and resolved value
pub type Dereferenced = (Option<String>, Value);

impl Schema {
    /// Resolve a reference against this document.
    ///
    /// Objects without `$ref` come back unchanged with no key. Failures are
    /// logged with the offending pointer and returned as-is.
    pub fn dereference(&self, reference: &Value) -> SchemaResult<Dereferenced> {
        let mut chain = Vec::new();
        self.dereference_chain(reference, &mut chain)
    }

    /// Resolve a bare pointer such as `#/definitions/user`
    pub fn dereference_pointer(&self, pointer: &str) -> SchemaResult<Dereferenced> {
        let mut chain = Vec::new();
        self.follow_logged(pointer, Map::new(), &mut chain)
    }

    fn dereference_chain(&self, reference: &Value, chain: &mut Vec<String>) -> SchemaResult<Dereferenced> {
        match reference {
            Value::Object(obj) => match obj.get(REF_KEY) {
                Some(Value::String(pointer)) => {
                    let overrides = obj
                        .iter()
                        .filter(|(key, _)| *key != REF_KEY)
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect();
                    self.follow_logged(pointer, overrides, chain)
                }
                _ => Ok((None, reference.clone())),
            },
            Value::String(pointer) => self.follow_logged(pointer, Map::new(), chain),
            other => Err(SchemaError::invalid_reference(other)),
        }
    }

    fn follow_logged(
        &self,
        pointer: &str,
        overrides: Map<String, Value>,
        chain: &mut Vec<String>,
    ) -> SchemaResult<Dereferenced> {
        let result = self.follow(pointer, overrides, chain);
        if let Err(error) = &result {
            warn!(pointer, %error, "Failed to dereference");
        }
        result
    }

    fn follow(
        &self,
        pointer: &str,
        overrides: Map<String, Value>,
        chain: &mut Vec<String>,
    ) -> SchemaResult<Dereferenced> {
        if chain.len() >= self.config.max_reference_depth || chain.iter().any(|seen| seen == pointer) {
            let mut cycle = chain.clone();
            cycle.push(pointer.to_string());
            return Err(SchemaError::circular_reference(&cycle));
        }
        chain.push(pointer.to_string());

        let fragments = pointer_fragments(pointer);
        trace!(pointer, depth = chain.len(), "Following reference");
        let target = self.walk(pointer, &fragments)?;
        // Only objects can carry another `$ref`; anything else is a leaf.
        let (inner_key, inner_value) = if target.is_object() {
            self.dereference_chain(&target, chain)?
        } else {
            (None, target.into_owned())
        };
        chain.pop();

        let key = inner_key.or_else(|| fragments.last().cloned());
        let value = apply_overrides(pointer, &fragments, inner_value, &overrides)?;
        Ok((key, value))
    }

    /// Walk the root object one fragment at a time
    fn walk(&self, pointer: &str, fragments: &[String]) -> SchemaResult<Cow<'_, Value>> {
        let Some((first, rest)) = fragments.split_first() else {
            return Ok(Cow::Owned(Value::Object(self.data.clone())));
        };

        let mut current = self
            .data
            .get(first)
            .ok_or_else(|| missing_property(pointer, first))?;
        for fragment in rest {
            current = match current {
                Value::Object(obj) => obj
                    .get(fragment)
                    .ok_or_else(|| missing_property(pointer, fragment))?,
                _ => {
                    return Err(SchemaError::reference_resolution(
                        pointer,
                        fragment.as_str(),
                        "Cannot access property on a non-object value",
                    ))
                }
            };
        }
        Ok(Cow::Borrowed(current))
    }
}

/// Split a pointer into decoded path fragments.
///
/// Everything up to and including the last `#/` is dropped, as are trailing
/// slashes.
pub fn pointer_fragments(pointer: &str) -> Vec<String> {
    let path = match pointer.rfind("#/") {
        Some(pos) => &pointer[pos + 2..],
        None => pointer,
    };
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/')
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect()
}

fn missing_property(pointer: &str, fragment: &str) -> SchemaError {
    SchemaError::reference_resolution(pointer, fragment, format!("Property '{}' not found", fragment))
}

fn apply_overrides(
    pointer: &str,
    fragments: &[String],
    base: Value,
    overrides: &Map<String, Value>,
) -> SchemaResult<Value> {
    if overrides.is_empty() {
        return Ok(base);
    }
    match base {
        Value::Object(base) => Ok(Value::Object(merge_maps(&base, overrides))),
        _ => Err(SchemaError::reference_resolution(
            pointer,
            fragments.last().map(String::as_str).unwrap_or(""),
            "Cannot merge overrides onto a non-object target",
        )),
    }
}
