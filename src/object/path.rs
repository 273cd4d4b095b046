//! Dot-path access into nested JSON values
//!
//! A path such as `"servers.0.host"` walks object keys and array indices.
//! Segments must be non-empty.

use crate::error::{common, ErrorCode, Result, ToolbeltError};
use crate::guards::{ensure_non_empty, expect_object, json_type_name};
use serde_json::{Map, Value};

fn split_path<'a>(path: &'a str, separator: &str) -> Result<Vec<&'a str>> {
    ensure_non_empty("path", path)?;
    let segments: Vec<&str> = path.split(separator).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(common::invalid_format(
            "path",
            "segments separated by single separators",
        ));
    }
    Ok(segments)
}

/// Look up the value at `path`, or `None` when any segment is missing
///
/// ```
/// use serde_json::json;
/// use toolbelt::object::get_nested;
///
/// let config = json!({"servers": [{"host": "alpha"}, {"host": "beta"}]});
/// assert_eq!(get_nested(&config, "servers.1.host").unwrap(), Some(json!("beta")));
/// assert_eq!(get_nested(&config, "servers.7.host").unwrap(), None);
/// ```
pub fn get_nested(value: &Value, path: &str) -> Result<Option<Value>> {
    let segments = split_path(path, ".")?;
    let mut current = value;
    for segment in segments {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(found) => current = found,
            None => return Ok(None),
        }
    }
    Ok(Some(current.clone()))
}

/// Copy of `object` with `new_value` stored at `path`
///
/// Missing intermediate keys become empty objects. Walking through a scalar is
/// a type error; an array index past the end is a value error.
pub fn set_nested(object: &Value, path: &str, new_value: Value) -> Result<Value> {
    expect_object("object", object)?;
    let segments = split_path(path, ".")?;
    let mut updated = object.clone();
    set_in(&mut updated, &segments, new_value, ".")?;
    Ok(updated)
}

fn set_in(root: &mut Value, segments: &[&str], new_value: Value, separator: &str) -> Result<()> {
    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        let last = depth + 1 == segments.len();
        let walked = segments[..depth].join(separator);
        current = match current {
            Value::Object(map) if last => {
                map.insert((*segment).to_string(), new_value);
                return Ok(());
            }
            Value::Object(map) => map
                .entry(*segment)
                .or_insert_with(|| Value::Object(Map::new())),
            Value::Array(items) => {
                let len = items.len();
                let slot = segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| items.get_mut(i))
                    .ok_or_else(|| {
                        common::out_of_range(
                            "path",
                            segment,
                            &format!("an index below {}", len),
                        )
                    })?;
                if last {
                    *slot = new_value;
                    return Ok(());
                }
                slot
            }
            other => {
                return Err(ToolbeltError::type_mismatch_with_code(
                    ErrorCode::TYPE_EXPECTED_OBJECT,
                    &walked,
                    "an object or array",
                    json_type_name(other),
                ))
            }
        };
    }
    Ok(())
}

/// Collapse nested objects into a single level joined by `separator`
///
/// Arrays and empty objects are kept as leaf values.
pub fn flatten_object(object: &Value, separator: &str) -> Result<Map<String, Value>> {
    let map = expect_object("object", object)?;
    ensure_non_empty("separator", separator)?;
    let mut flat = Map::new();
    flatten_into(map, None, separator, &mut flat);
    Ok(flat)
}

fn flatten_into(
    map: &Map<String, Value>,
    prefix: Option<&str>,
    separator: &str,
    flat: &mut Map<String, Value>,
) {
    for (key, value) in map {
        let full_key = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, separator, key),
            None => key.clone(),
        };
        match value {
            Value::Object(inner) if !inner.is_empty() => {
                flatten_into(inner, Some(&full_key), separator, flat)
            }
            leaf => {
                flat.insert(full_key, leaf.clone());
            }
        }
    }
}

/// Rebuild nesting from `separator`-joined keys
///
/// Conflicting keys such as `a = 1` next to `a.b = 2` are a type error.
pub fn unflatten_object(flat: &Map<String, Value>, separator: &str) -> Result<Value> {
    ensure_non_empty("separator", separator)?;
    let mut root = Value::Object(Map::new());
    for (key, value) in flat {
        let segments = split_path(key, separator)?;
        set_in_objects(&mut root, &segments, value.clone(), separator)?;
    }
    Ok(root)
}

// Like `set_in`, but digit segments stay object keys.
fn set_in_objects(
    root: &mut Value,
    segments: &[&str],
    new_value: Value,
    separator: &str,
) -> Result<()> {
    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        let map = match current {
            Value::Object(map) => map,
            other => {
                return Err(ToolbeltError::type_mismatch_with_code(
                    ErrorCode::TYPE_EXPECTED_OBJECT,
                    &segments[..depth].join(separator),
                    "an object",
                    json_type_name(other),
                ))
            }
        };
        if depth + 1 == segments.len() {
            if let Some(Value::Object(existing)) = map.get(*segment) {
                if !existing.is_empty() {
                    return Err(ToolbeltError::type_mismatch_with_code(
                        ErrorCode::TYPE_EXPECTED_OBJECT,
                        &segments.join(separator),
                        "an object",
                        json_type_name(&new_value),
                    ));
                }
            }
            map.insert((*segment).to_string(), new_value);
            return Ok(());
        }
        current = map
            .entry(*segment)
            .or_insert_with(|| Value::Object(Map::new()));
    }
    Ok(())
}
