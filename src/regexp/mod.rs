//! Regular expression helpers
//!
//! Thin wrappers over the `regex` crate that compile a caller-supplied pattern
//! and report malformed patterns as value errors (`[E2006]`). See
//! [`backtracking`] for the pattern risk analysis.

pub mod backtracking;

pub use backtracking::{analyze_backtracking, has_catastrophic_backtracking, BacktrackingRisk, RiskKind};

use crate::error::Result;
use crate::guards::ensure_non_empty;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

fn compile(pattern: &str) -> Result<Regex> {
    ensure_non_empty("pattern", pattern)?;
    Regex::new(pattern).map_err(|e| {
        debug!(pattern, error = %e, "Rejected regex pattern");
        e.into()
    })
}

/// Whether `pattern` compiles; the empty pattern counts as invalid
pub fn is_valid_regex(pattern: &str) -> bool {
    !pattern.is_empty() && Regex::new(pattern).is_ok()
}

/// Escape every regex metacharacter in `text`
///
/// ```
/// use toolbelt::regexp::escape_regex;
///
/// assert_eq!(escape_regex("1+1=2?"), r"1\+1=2\?");
/// ```
pub fn escape_regex(text: &str) -> String {
    regex::escape(text)
}

/// Whether `pattern` matches anywhere in `text`
pub fn test_regex(pattern: &str, text: &str) -> Result<bool> {
    Ok(compile(pattern)?.is_match(text))
}

/// Every non-overlapping match, left to right
pub fn find_all_matches(text: &str, pattern: &str) -> Result<Vec<String>> {
    Ok(compile(pattern)?
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect())
}

pub fn count_matches(text: &str, pattern: &str) -> Result<usize> {
    Ok(compile(pattern)?.find_iter(text).count())
}

/// Replace every match; `replacement` may reference groups as `$1` or `${name}`
pub fn replace_all(text: &str, pattern: &str, replacement: &str) -> Result<String> {
    Ok(compile(pattern)?.replace_all(text, replacement).into_owned())
}

/// Capture groups of every match
///
/// Each inner vector is indexed like the pattern's groups: element 0 is the
/// whole match, and groups that did not participate are `None`.
pub fn extract_groups(text: &str, pattern: &str) -> Result<Vec<Vec<Option<String>>>> {
    let re = compile(pattern)?;
    Ok(re
        .captures_iter(text)
        .map(|caps| {
            caps.iter()
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect()
        })
        .collect())
}

/// Named groups of the first match, or `None` if nothing matches
///
/// Named groups that did not participate in the match are left out.
pub fn extract_named_groups(text: &str, pattern: &str) -> Result<Option<HashMap<String, String>>> {
    let re = compile(pattern)?;
    let Some(caps) = re.captures(text) else {
        return Ok(None);
    };
    let named = re
        .capture_names()
        .flatten()
        .filter_map(|name| caps.name(name).map(|m| (name.to_string(), m.as_str().to_string())))
        .collect();
    Ok(Some(named))
}
