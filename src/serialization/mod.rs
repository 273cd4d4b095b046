//! Encoding and decoding helpers
//!
//! JSON is the hub format: YAML, TOML, CSV and query strings convert to and
//! from `serde_json::Value`. Decoding failures are serialization errors with
//! the underlying parser error attached as the source.

pub mod formats;
pub mod query_string;

pub use formats::{csv_to_json, json_to_csv, json_to_toml, json_to_yaml, toml_to_json, yaml_to_json};
pub use query_string::{object_to_query_string, query_string_to_object};

use crate::error::{ErrorCode, Result, ToolbeltError};
use crate::guards::ensure_non_empty;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;
use tracing::debug;
use url::form_urlencoded;

pub fn to_json_string(value: &Value, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// Parse JSON text; blank input is a value error rather than a syntax error
pub fn parse_json(input: &str) -> Result<Value> {
    ensure_non_empty("input", input.trim())?;
    Ok(serde_json::from_str(input)?)
}

/// Parse JSON text, falling back to `default` on any failure
pub fn safe_parse_json(input: &str, default: Value) -> Value {
    parse_json(input).unwrap_or_else(|e| {
        debug!(error = %e, "Falling back to default JSON value");
        default
    })
}

/// Standard base64 with padding
pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode standard base64 into UTF-8 text
///
/// ```
/// use toolbelt::serialization::{base64_decode, base64_encode};
///
/// assert_eq!(base64_encode("hi there"), "aGkgdGhlcmU=");
/// assert_eq!(base64_decode("aGkgdGhlcmU=").unwrap(), "hi there");
/// assert!(base64_decode("not base64!").is_err());
/// ```
pub fn base64_decode(input: &str) -> Result<String> {
    let bytes = STANDARD.decode(input.trim())?;
    Ok(String::from_utf8(bytes)?)
}

/// Percent-encode everything except ASCII alphanumerics and `-._*`
///
/// Spaces become `%20`, not `+`.
pub fn url_encode(input: &str) -> String {
    // form_urlencoded emits `+` only for spaces; a literal `+` is already `%2B`
    form_urlencoded::byte_serialize(input.as_bytes())
        .map(|chunk| if chunk == "+" { "%20" } else { chunk })
        .collect()
}

/// Reverse percent-encoding; `+` is left as is
pub fn url_decode(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let byte = bytes
                .get(i + 1..i + 3)
                .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                .and_then(|hex| std::str::from_utf8(hex).ok())
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or_else(|| malformed_escape(i))?;
            decoded.push(byte);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }
    Ok(String::from_utf8(decoded)?)
}

fn malformed_escape(offset: usize) -> ToolbeltError {
    ToolbeltError::value_with_code(
        ErrorCode::VALUE_INVALID_FORMAT,
        format!("malformed percent-escape at offset {}", offset),
        Some("input".to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_json_string() {
        let value = json!({"b": [1, 2], "a": "x"});
        assert_eq!(to_json_string(&value, false).unwrap(), r#"{"a":"x","b":[1,2]}"#);
        insta::assert_snapshot!(to_json_string(&value, true).unwrap(), @r#"
        {
          "a": "x",
          "b": [
            1,
            2
          ]
        }
        "#);
    }

    #[test]
    fn test_parse_json() {
        assert_eq!(parse_json(r#"{"ok": true}"#).unwrap(), json!({"ok": true}));
        assert_eq!(parse_json("  ").unwrap_err().code(), ErrorCode::VALUE_EMPTY);

        let err = parse_json("{oops}").unwrap_err();
        assert_eq!(err.code(), ErrorCode::SERIALIZATION_INVALID_JSON);
        assert!(err.developer_message().contains("caused by"));
    }

    #[test]
    fn test_safe_parse_json_falls_back() {
        assert_eq!(safe_parse_json("[1]", json!(null)), json!([1]));
        assert_eq!(safe_parse_json("nope", json!({})), json!({}));
        assert_eq!(safe_parse_json("", json!(0)), json!(0));
    }

    #[test]
    fn test_base64_errors() {
        assert_eq!(
            base64_decode("@@@").unwrap_err().code(),
            ErrorCode::SERIALIZATION_INVALID_BASE64
        );
        // 0xFF 0xFE is not UTF-8
        assert_eq!(
            base64_decode("//4=").unwrap_err().code(),
            ErrorCode::SERIALIZATION_INVALID_UTF8
        );
        assert_eq!(base64_decode("").unwrap(), "");
    }

    #[test]
    fn test_url_encode_and_decode() {
        assert_eq!(url_encode("a b&c=d/é+"), "a%20b%26c%3Dd%2F%C3%A9%2B");
        assert_eq!(url_decode("a%20b%26c%3Dd%2F%C3%A9%2B").unwrap(), "a b&c=d/é+");
        assert_eq!(url_decode("1+1").unwrap(), "1+1");
    }

    #[test]
    fn test_url_decode_errors() {
        assert_eq!(
            url_decode("100%").unwrap_err().code(),
            ErrorCode::VALUE_INVALID_FORMAT
        );
        assert!(url_decode("%zz").is_err());
        assert_eq!(
            url_decode("%FF").unwrap_err().code(),
            ErrorCode::SERIALIZATION_INVALID_UTF8
        );
    }
}
