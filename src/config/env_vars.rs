//! Typed access to environment variables with fallback defaults
//!
//! Each reader comes in two forms:
//! - `env_*(&env, ..)` reads through any [`EnvSource`]
//! - `get_env_*(..)` reads the running process via [`ProcessEnv`]
//!
//! Absent or unparsable values fall back to the caller's default. Only an
//! invalid variable name is an error, plus [`require_env`] for variables that
//! have no sensible default.

use crate::env::{EnvSource, ProcessEnv};
use crate::error::{ErrorCode, Result, ToolbeltError};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Reject names the operating system cannot store
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ToolbeltError::config_with_code(
            ErrorCode::CONFIG_INVALID_NAME,
            "Environment variable name must not be empty",
            None,
        ));
    }
    if name.contains('=') || name.contains('\0') {
        return Err(ToolbeltError::config_with_code(
            ErrorCode::CONFIG_INVALID_NAME,
            format!(
                "Environment variable name '{}' must not contain '=' or NUL",
                name.escape_debug()
            ),
            Some(name.to_string()),
        ));
    }
    Ok(())
}

/// Interpret common boolean spellings, case-insensitively
///
/// ```
/// use toolbelt::config::parse_bool;
///
/// assert_eq!(parse_bool(" Yes "), Some(true));
/// assert_eq!(parse_bool("off"), Some(false));
/// assert_eq!(parse_bool("maybe"), None);
/// ```
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn env_var<E: EnvSource>(env: &E, name: &str) -> Result<Option<String>> {
    validate_name(name)?;
    let value = env.var(name);
    trace!("Read ${}: {}", name, if value.is_some() { "set" } else { "unset" });
    Ok(value)
}

pub fn env_string<E: EnvSource>(env: &E, name: &str, default: &str) -> Result<String> {
    Ok(env_var(env, name)?.unwrap_or_else(|| default.to_string()))
}

pub fn env_bool<E: EnvSource>(env: &E, name: &str, default: bool) -> Result<bool> {
    parse_or_default(env, name, default, "boolean", parse_bool)
}

pub fn env_int<E: EnvSource>(env: &E, name: &str, default: i64) -> Result<i64> {
    parse_or_default(env, name, default, "integer", |raw| raw.trim().parse().ok())
}

/// Non-finite values (`NaN`, `inf`) count as unparsable
pub fn env_float<E: EnvSource>(env: &E, name: &str, default: f64) -> Result<f64> {
    parse_or_default(env, name, default, "float", |raw| {
        raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    })
}

pub fn env_json<E: EnvSource, T: DeserializeOwned>(env: &E, name: &str, default: T) -> Result<T> {
    parse_or_default(env, name, default, "JSON", |raw| serde_json::from_str(raw).ok())
}

/// Split a variable on `separator`, trimming items and dropping empty ones
///
/// An unset variable yields an empty list.
pub fn env_list<E: EnvSource>(env: &E, name: &str, separator: &str) -> Result<Vec<String>> {
    if separator.is_empty() {
        return Err(crate::error::common::empty("separator"));
    }
    Ok(env_var(env, name)?
        .map(|raw| {
            raw.split(separator)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default())
}

/// Read a variable that must be present and non-blank
pub fn env_require<E: EnvSource>(env: &E, name: &str) -> Result<String> {
    match env_var(env, name)? {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(ToolbeltError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            "Required environment variable is blank",
            Some(name.to_string()),
        )),
        None => Err(ToolbeltError::config_with_code(
            ErrorCode::CONFIG_MISSING_VARIABLE,
            "Required environment variable is not set",
            Some(name.to_string()),
        )),
    }
}

fn parse_or_default<E, T, F>(env: &E, name: &str, default: T, kind: &str, parse: F) -> Result<T>
where
    E: EnvSource,
    F: FnOnce(&str) -> Option<T>,
{
    let Some(raw) = env_var(env, name)? else {
        return Ok(default);
    };
    match parse(&raw) {
        Some(value) => Ok(value),
        None => {
            debug!(
                "Environment variable ${} is not a valid {}, using default",
                name, kind
            );
            Ok(default)
        }
    }
}

pub fn get_env_var(name: &str) -> Result<Option<String>> {
    env_var(&ProcessEnv, name)
}

pub fn get_env_string(name: &str, default: &str) -> Result<String> {
    env_string(&ProcessEnv, name, default)
}

pub fn get_env_bool(name: &str, default: bool) -> Result<bool> {
    env_bool(&ProcessEnv, name, default)
}

pub fn get_env_int(name: &str, default: i64) -> Result<i64> {
    env_int(&ProcessEnv, name, default)
}

pub fn get_env_float(name: &str, default: f64) -> Result<f64> {
    env_float(&ProcessEnv, name, default)
}

pub fn get_env_json<T: DeserializeOwned>(name: &str, default: T) -> Result<T> {
    env_json(&ProcessEnv, name, default)
}

pub fn get_env_list(name: &str, separator: &str) -> Result<Vec<String>> {
    env_list(&ProcessEnv, name, separator)
}

pub fn require_env(name: &str) -> Result<String> {
    env_require(&ProcessEnv, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockEnv;
    use std::collections::HashMap;

    fn env() -> MockEnv {
        MockEnv::new()
            .with_var("DEBUG", "TRUE")
            .with_var("WORKERS", " 8 ")
            .with_var("RATIO", "0.75")
            .with_var("BAD_NUMBER", "eight")
            .with_var("NAN", "NaN")
            .with_var("HOSTS", "a.example, b.example,, c.example ")
            .with_var("LIMITS", r#"{"cpu": 2, "memory": 512}"#)
            .with_var("EMPTY", "")
            .with_var("BLANK", "   ")
    }

    #[test]
    fn test_env_string_returns_value_or_default() {
        let env = env();
        assert_eq!(env_string(&env, "DEBUG", "x").unwrap(), "TRUE");
        assert_eq!(env_string(&env, "MISSING", "fallback").unwrap(), "fallback");
        assert_eq!(env_string(&env, "EMPTY", "fallback").unwrap(), "");
    }

    #[test]
    fn test_env_bool() {
        let env = env();
        assert!(env_bool(&env, "DEBUG", false).unwrap());
        assert!(!env_bool(&env, "MISSING", false).unwrap());
        assert!(env_bool(&env, "BAD_NUMBER", true).unwrap());
    }

    #[test]
    fn test_env_int_trims_and_falls_back() {
        let env = env();
        assert_eq!(env_int(&env, "WORKERS", 1).unwrap(), 8);
        assert_eq!(env_int(&env, "BAD_NUMBER", 4).unwrap(), 4);
        assert_eq!(env_int(&env, "RATIO", 4).unwrap(), 4);
    }

    #[test]
    fn test_env_float_rejects_non_finite() {
        let env = env();
        assert_eq!(env_float(&env, "RATIO", 1.0).unwrap(), 0.75);
        assert_eq!(env_float(&env, "NAN", 1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_env_json() {
        let env = env();
        let limits: HashMap<String, u32> = env_json(&env, "LIMITS", HashMap::new()).unwrap();
        assert_eq!(limits["memory"], 512);

        let fallback: Vec<u8> = env_json(&env, "BAD_NUMBER", vec![1, 2]).unwrap();
        assert_eq!(fallback, vec![1, 2]);
    }

    #[test]
    fn test_env_list() {
        let env = env();
        assert_eq!(
            env_list(&env, "HOSTS", ",").unwrap(),
            vec!["a.example", "b.example", "c.example"]
        );
        assert!(env_list(&env, "MISSING", ",").unwrap().is_empty());
        assert!(env_list(&env, "HOSTS", "").unwrap_err().is_value_error());
    }

    #[test]
    fn test_env_require() {
        let env = env();
        assert_eq!(env_require(&env, "WORKERS").unwrap(), " 8 ");

        let err = env_require(&env, "MISSING").unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_MISSING_VARIABLE);
        assert_eq!(err.param(), Some("MISSING"));

        let err = env_require(&env, "BLANK").unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
    }

    #[test]
    fn test_invalid_names_are_rejected() {
        let env = env();
        for name in ["", "A=B", "NUL\0"] {
            let err = env_int(&env, name, 0).unwrap_err();
            assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_NAME);
        }
    }

    #[test]
    fn test_parse_bool_spellings() {
        for raw in ["true", "1", "YES", "On"] {
            assert_eq!(parse_bool(raw), Some(true), "{}", raw);
        }
        for raw in ["false", "0", "no", "OFF"] {
            assert_eq!(parse_bool(raw), Some(false), "{}", raw);
        }
        assert_eq!(parse_bool(""), None);
    }
}
