//! String utilities
//!
//! Lengths and positions are counted in `char`s, not bytes, so multi-byte
//! text is never split inside a character.

pub mod case;

pub use case::{
    capitalize, split_words, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
    to_title_case,
};

use crate::error::{common, Result};
use crate::guards::ensure_non_empty;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("Valid regex pattern"));

pub fn reverse_string(input: &str) -> String {
    input.chars().rev().collect()
}

/// Palindrome check over alphanumerics only, ignoring case
///
/// ```
/// use toolbelt::string::is_palindrome;
///
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("palindrome"));
/// ```
pub fn is_palindrome(input: &str) -> bool {
    let normalized: Vec<char> = input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    normalized.iter().eq(normalized.iter().rev())
}

/// Shorten `input` to at most `max_len` characters, ending with `suffix` when cut
pub fn truncate_string(input: &str, max_len: usize, suffix: &str) -> Result<String> {
    let suffix_len = suffix.chars().count();
    if max_len < suffix_len {
        return Err(common::out_of_range(
            "max_len",
            max_len,
            &format!("at least the suffix length ({})", suffix_len),
        ));
    }
    if input.chars().count() <= max_len {
        return Ok(input.to_string());
    }
    let kept: String = input.chars().take(max_len - suffix_len).collect();
    Ok(kept + suffix)
}

pub fn count_words(input: &str) -> usize {
    input.split_whitespace().count()
}

/// Count of `a e i o u`, either case
pub fn count_vowels(input: &str) -> usize {
    input
        .chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

/// Lower-cased word counts; punctuation other than inner apostrophes is ignored
pub fn word_frequency(input: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    let words = input
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|word| word.trim_matches('\''))
        .filter(|word| !word.is_empty());
    for word in words {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

/// URL slug: lowercase ASCII alphanumerics separated by single hyphens
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

pub fn repeat_string(input: &str, count: usize, separator: &str) -> String {
    vec![input; count].join(separator)
}

/// Left-pad to `target_len` characters by cycling through `fill`
pub fn pad_start(input: &str, target_len: usize, fill: &str) -> Result<String> {
    let padding = padding_for(input, target_len, fill)?;
    Ok(padding + input)
}

/// Right-pad to `target_len` characters by cycling through `fill`
pub fn pad_end(input: &str, target_len: usize, fill: &str) -> Result<String> {
    let padding = padding_for(input, target_len, fill)?;
    Ok(input.to_string() + &padding)
}

fn padding_for(input: &str, target_len: usize, fill: &str) -> Result<String> {
    ensure_non_empty("fill", fill)?;
    let missing = target_len.saturating_sub(input.chars().count());
    Ok(fill.chars().cycle().take(missing).collect())
}

pub fn remove_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Trim and squeeze every whitespace run to a single space
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Edit distance counting single-character insertions, deletions and substitutions
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Replace all but the last `visible` characters with `mask_char`
///
/// ```
/// use toolbelt::string::mask_string;
///
/// assert_eq!(mask_string("4111111111111111", 4, '*'), "************1111");
/// ```
pub fn mask_string(input: &str, visible: usize, mask_char: char) -> String {
    let total = input.chars().count();
    let hidden = total.saturating_sub(visible);
    input
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { mask_char } else { c })
        .collect()
}

/// Remove HTML tags and comments, keeping the text between them
pub fn strip_html_tags(input: &str) -> String {
    HTML_TAG.replace_all(input, "").into_owned()
}
