//! Conversions between JSON and YAML, TOML and CSV

use crate::error::{ErrorCode, Result, ToolbeltError};
use crate::guards::{ensure_non_empty, expect_object};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

pub fn json_to_yaml(value: &Value) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

/// Parse a YAML document into JSON; blank input is a value error
pub fn yaml_to_json(input: &str) -> Result<Value> {
    ensure_non_empty("input", input.trim())?;
    Ok(serde_yaml::from_str(input)?)
}

/// Render an object as a TOML document
///
/// TOML has no `null`, so objects containing one fail with a serialization
/// error.
pub fn json_to_toml(value: &Value) -> Result<String> {
    expect_object("value", value)?;
    Ok(toml::to_string(value)?)
}

pub fn toml_to_json(input: &str) -> Result<Value> {
    Ok(toml::from_str(input)?)
}

/// Read CSV with a header row into one object per record
///
/// Every cell stays a string. Records with a different number of fields than
/// the header are a serialization error.
///
/// ```
/// use serde_json::json;
/// use toolbelt::serialization::csv_to_json;
///
/// let rows = csv_to_json("name;age\nada;36\n", b';').unwrap();
/// assert_eq!(rows, vec![json!({"name": "ada", "age": "36"})]);
/// ```
pub fn csv_to_json(input: &str, delimiter: u8) -> Result<Vec<Value>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(input.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), Value::String(cell.to_string())))
            .collect();
        rows.push(Value::Object(row));
    }
    Ok(rows)
}

/// Write objects as CSV
///
/// The header is the sorted union of all keys. Missing keys and `null` become
/// empty cells, arrays and objects are written as compact JSON.
pub fn json_to_csv(rows: &[Value]) -> Result<String> {
    let mut objects = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        objects.push(expect_object(&format!("rows[{}]", index), row)?);
    }
    if objects.is_empty() {
        return Ok(String::new());
    }

    let headers: BTreeSet<&str> = objects
        .iter()
        .flat_map(|object| object.keys().map(String::as_str))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&headers)?;
    for object in &objects {
        let mut cells = Vec::with_capacity(headers.len());
        for header in &headers {
            cells.push(cell_text(object.get(*header))?);
        }
        writer.write_record(&cells)?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        ToolbeltError::serialization(
            ErrorCode::SERIALIZATION_INVALID_CSV,
            "Failed to flush CSV output",
            "csv",
        )
        .with_source(e.into_error())
    })?;
    Ok(String::from_utf8(bytes)?)
}

fn cell_text(value: Option<&Value>) -> Result<String> {
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(nested @ (Value::Array(_) | Value::Object(_))) => serde_json::to_string(nested)?,
        Some(scalar) => scalar.to_string(),
    })
}
