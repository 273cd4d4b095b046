//! `application/x-www-form-urlencoded` query strings

use crate::error::{ErrorCode, Result, ToolbeltError};
use crate::guards::{expect_object, json_type_name, scalar_to_string};
use serde_json::{Map, Value};
use url::form_urlencoded;

/// Encode a flat object as a query string
///
/// Keys come out sorted. `null` values are skipped and arrays repeat their
/// key once per element. Nested objects are a type error.
///
/// ```
/// use serde_json::json;
/// use toolbelt::serialization::object_to_query_string;
///
/// let query = json!({"q": "rust lang", "tag": ["a", "b"], "page": 2, "draft": null});
/// assert_eq!(
///     object_to_query_string(&query).unwrap(),
///     "page=2&q=rust+lang&tag=a&tag=b"
/// );
/// ```
pub fn object_to_query_string(object: &Value) -> Result<String> {
    let map = expect_object("object", object)?;
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items.iter().filter(|item| !item.is_null()) {
                    serializer.append_pair(key, &scalar_to_string(key, item)?);
                }
            }
            Value::Object(_) => {
                return Err(ToolbeltError::type_mismatch_with_code(
                    ErrorCode::TYPE_EXPECTED_SCALAR,
                    key,
                    "a scalar or an array of scalars",
                    json_type_name(value),
                ))
            }
            scalar => {
                serializer.append_pair(key, &scalar_to_string(key, scalar)?);
            }
        }
    }
    Ok(serializer.finish())
}

/// Decode a query string into an object of strings
///
/// A leading `?` is ignored. A key that appears more than once maps to an
/// array of its values in order of appearance.
pub fn query_string_to_object(query: &str) -> Map<String, Value> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut object = Map::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = Value::String(value.into_owned());
        match object.get_mut(&*key) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                object.insert(key.into_owned(), value);
            }
        }
    }
    object
}
