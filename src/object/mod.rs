//! Helpers for plain key-value structures
//!
//! Objects are `serde_json::Value`s. Any argument documented as an object is
//! checked at runtime, and other JSON types produce a type error that names the
//! parameter and the JSON type actually received.

pub mod path;

pub use path::{flatten_object, get_nested, set_nested, unflatten_object};

use crate::error::{ErrorCode, Result, ToolbeltError};
use crate::guards::{expect_object, json_type_name, scalar_to_string};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::trace;

/// Recursively merge `source` into a copy of `target`
///
/// Nested objects merge key by key; every other value in `source`, arrays
/// included, replaces the one in `target`.
///
/// ```
/// use serde_json::json;
/// use toolbelt::object::deep_merge;
///
/// let base = json!({"log": {"level": "info", "json": false}, "ports": [80]});
/// let patch = json!({"log": {"level": "debug"}, "ports": [8080]});
/// assert_eq!(
///     deep_merge(&base, &patch).unwrap(),
///     json!({"log": {"level": "debug", "json": false}, "ports": [8080]})
/// );
/// ```
pub fn deep_merge(target: &Value, source: &Value) -> Result<Value> {
    let mut merged = expect_object("target", target)?.clone();
    merge_into(&mut merged, expect_object("source", source)?);
    Ok(Value::Object(merged))
}

fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, incoming) in source {
        match (target.get_mut(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_into(existing, incoming)
            }
            _ => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}

/// Only the listed keys; keys absent from `object` are ignored
pub fn pick(object: &Value, keys: &[&str]) -> Result<Value> {
    let map = expect_object("object", object)?;
    let picked = keys
        .iter()
        .filter_map(|key| map.get(*key).map(|v| ((*key).to_string(), v.clone())))
        .collect();
    Ok(Value::Object(picked))
}

/// Every key except the listed ones
pub fn omit(object: &Value, keys: &[&str]) -> Result<Value> {
    let map = expect_object("object", object)?;
    let kept = map
        .iter()
        .filter(|(key, _)| !keys.contains(&key.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    Ok(Value::Object(kept))
}

pub fn is_empty_object(value: &Value) -> Result<bool> {
    Ok(expect_object("value", value)?.is_empty())
}

/// Swap keys and values
///
/// Values must be strings, numbers or booleans and are rendered as strings to
/// become keys. When several keys share a value the greatest key wins.
pub fn invert_object(object: &Value) -> Result<Value> {
    let map = expect_object("object", object)?;
    let mut inverted = Map::new();
    // Keys iterate in ascending order, so the last writer is the greatest key
    for (key, value) in map {
        if value.is_null() {
            return Err(ToolbeltError::type_mismatch_with_code(
                ErrorCode::TYPE_EXPECTED_SCALAR,
                key,
                "a string, number or boolean",
                json_type_name(value),
            ));
        }
        let new_key = scalar_to_string(key, value)?;
        if let Some(previous) = inverted.insert(new_key, Value::String(key.clone())) {
            trace!(%previous, key = %key, "Duplicate value while inverting object");
        }
    }
    Ok(Value::Object(inverted))
}

/// A value present in both objects that differs between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueChange {
    pub before: Value,
    pub after: Value,
}

/// Top-level differences between two objects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectDiff {
    /// Keys only in the second object, with their values
    pub added: BTreeMap<String, Value>,
    /// Keys only in the first object, with their values
    pub removed: BTreeMap<String, Value>,
    pub changed: BTreeMap<String, ValueChange>,
}

impl ObjectDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Compare the top-level keys of `before` and `after`
pub fn object_diff(before: &Value, after: &Value) -> Result<ObjectDiff> {
    let old = expect_object("before", before)?;
    let new = expect_object("after", after)?;
    let mut diff = ObjectDiff::default();

    for (key, old_value) in old {
        match new.get(key) {
            None => {
                diff.removed.insert(key.clone(), old_value.clone());
            }
            Some(new_value) if new_value != old_value => {
                diff.changed.insert(
                    key.clone(),
                    ValueChange {
                        before: old_value.clone(),
                        after: new_value.clone(),
                    },
                );
            }
            Some(_) => {}
        }
    }
    for (key, new_value) in new {
        if !old.contains_key(key) {
            diff.added.insert(key.clone(), new_value.clone());
        }
    }
    Ok(diff)
}
