//! Argument guards shared by the domain modules
//!
//! Every public function validates its inputs before computing anything. These
//! helpers keep the checks and their error messages uniform.

use crate::error::{common, ErrorCode, Result, ToolbeltError};
use serde_json::{Map, Value};

/// Name of a JSON value's runtime type, as reported in type errors
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn ensure_finite(param: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(common::not_finite(param, value))
    }
}

pub(crate) fn ensure_not_nan(param: &str, value: f64) -> Result<f64> {
    if value.is_nan() {
        Err(common::not_finite(param, value))
    } else {
        Ok(value)
    }
}

pub(crate) fn ensure_non_empty<'a>(param: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        Err(common::empty(param))
    } else {
        Ok(value)
    }
}

pub(crate) fn ensure_non_empty_slice<'a, T>(param: &str, values: &'a [T]) -> Result<&'a [T]> {
    if values.is_empty() {
        Err(common::empty(param))
    } else {
        Ok(values)
    }
}

pub(crate) fn ensure_min_count<T>(param: &str, values: &[T], required: usize) -> Result<()> {
    if values.len() < required {
        Err(common::too_few_arguments(param, required, values.len()))
    } else {
        Ok(())
    }
}

pub(crate) fn ensure_ordered<T: PartialOrd + std::fmt::Display>(min: T, max: T) -> Result<()> {
    if min > max {
        Err(common::invalid_range(min, max))
    } else {
        Ok(())
    }
}

/// Borrow the object behind `value`, or fail with a type error naming `param`
pub(crate) fn expect_object<'a>(param: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        ToolbeltError::type_mismatch_with_code(
            ErrorCode::TYPE_EXPECTED_OBJECT,
            param,
            "an object",
            json_type_name(value),
        )
    })
}

pub(crate) fn expect_array<'a>(param: &str, value: &'a Value) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| {
        ToolbeltError::type_mismatch_with_code(
            ErrorCode::TYPE_EXPECTED_ARRAY,
            param,
            "an array",
            json_type_name(value),
        )
    })
}

/// Render a scalar JSON value as plain text; objects and arrays are a type error
pub(crate) fn scalar_to_string(param: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(ToolbeltError::type_mismatch_with_code(
            ErrorCode::TYPE_EXPECTED_SCALAR,
            param,
            "a string, number, boolean or null",
            json_type_name(other),
        )),
    }
}
