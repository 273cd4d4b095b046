//! Format validators
//!
//! Every `is_valid_*` function is a total predicate: malformed input yields
//! `false`, never an error. Password checks return a [`ValidationResult`] so
//! callers can show every failed rule at once.

pub mod password;

pub use password::{check_password_strength, is_strong_password, ValidationResult};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use uuid::Uuid;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .expect("Valid regex pattern")
});

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("Valid regex pattern")
});

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Valid regex pattern"));

static USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]{2,15}$").expect("Valid regex pattern"));

/// Practical address check: dot-atom local part, dotted domain, alphabetic TLD
///
/// ```
/// use toolbelt::validation::is_valid_email;
///
/// assert!(is_valid_email("first.last+tag@example.co.uk"));
/// assert!(!is_valid_email("first..last@example.com"));
/// assert!(!is_valid_email("no-at-sign.example.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL.is_match(email)
}

/// Absolute `http` or `https` URL with a host
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

/// E.164-style number: optional leading `+`, then 7 to 15 digits
///
/// Spaces, dots, dashes and parentheses are ignored.
pub fn is_valid_phone(input: &str) -> bool {
    let trimmed = input.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = body
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '(' | ')'))
        .collect();
    (7..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `#rgb` or `#rrggbb`
pub fn is_valid_hex_color(input: &str) -> bool {
    HEX_COLOR.is_match(input)
}

/// 13 to 19 digits passing the Luhn checksum; spaces and dashes are ignored
pub fn is_valid_credit_card(input: &str) -> bool {
    let digits: Vec<u32> = match input
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
    {
        Some(digits) => digits,
        None => return false,
    };
    (13..=19).contains(&digits.len()) && luhn_checksum(&digits) % 10 == 0
}

fn luhn_checksum(digits: &[u32]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum()
}

/// Hyphenated UUID of any version, either case
pub fn is_valid_uuid(input: &str) -> bool {
    input.len() == 36 && Uuid::try_parse(input).is_ok()
}

/// `YYYY-MM-DD` naming a real calendar day
pub fn is_valid_date(input: &str) -> bool {
    ISO_DATE.is_match(input) && NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok()
}

/// Finite decimal number, optionally signed or in exponent form
pub fn is_numeric(input: &str) -> bool {
    let trimmed = input.trim();
    // Rust also parses "inf" and "NaN"; only digit-bearing forms count
    trimmed.bytes().any(|b| b.is_ascii_digit())
        && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Non-empty and ASCII letters or digits only
pub fn is_alphanumeric(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Semantic Versioning 2.0.0, including pre-release and build metadata
pub fn is_valid_semver(input: &str) -> bool {
    semver::Version::parse(input).is_ok()
}

pub fn is_valid_json(input: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(input).is_ok()
}

/// 3 to 16 characters of `[A-Za-z0-9_]`, starting with a letter
pub fn is_valid_username(input: &str) -> bool {
    USERNAME.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        for valid in ["a@b.io", "user.name@sub.example.org", "o'brien@example.ie"] {
            assert!(is_valid_email(valid), "{valid}");
        }
        for invalid in [
            "",
            "@example.com",
            "user@",
            "user@localhost",
            "user@-example.com",
            ".user@example.com",
            "user.@example.com",
            "user@example.c",
            "two@@example.com",
            "spaces in@example.com",
        ] {
            assert!(!is_valid_email(invalid), "{invalid}");
        }
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://localhost:8080/health?full=1"));
        assert!(!is_valid_url("ftp://example.com/file"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("https://"));
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("555.123.4567"));
        assert!(is_valid_phone("+442071838750"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+1234567890123456"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("++15551234567"));
    }

    #[test]
    fn test_is_valid_hex_color() {
        assert!(is_valid_hex_color("#fff"));
        assert!(is_valid_hex_color("#1A2b3C"));
        assert!(!is_valid_hex_color("fff"));
        assert!(!is_valid_hex_color("#ffff"));
        assert!(!is_valid_hex_color("#ggg"));
    }

    #[test]
    fn test_is_valid_credit_card() {
        assert!(is_valid_credit_card("4111 1111 1111 1111"));
        assert!(is_valid_credit_card("5500-0000-0000-0004"));
        assert!(is_valid_credit_card("378282246310005"));
        assert!(!is_valid_credit_card("4111 1111 1111 1112"));
        assert!(!is_valid_credit_card("4111"));
        assert!(!is_valid_credit_card("4111a111111111111"));
    }

    #[test]
    fn test_is_valid_uuid() {
        assert!(is_valid_uuid("550e8400-e29b-41d4-a716-446655440000"));
        assert!(is_valid_uuid("550E8400-E29B-41D4-A716-446655440000"));
        assert!(!is_valid_uuid("550e8400e29b41d4a716446655440000"));
        assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-44665544000g"));
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2024-2-9"));
        assert!(!is_valid_date("2024/02/09"));
    }

    #[test]
    fn test_is_numeric() {
        for valid in ["42", "-3.14", " 7 ", "1e10", "+0.5", ".5"] {
            assert!(is_numeric(valid), "{valid}");
        }
        for invalid in ["", "abc", "1.2.3", "NaN", "inf", "-infinity", "1e999"] {
            assert!(!is_numeric(invalid), "{invalid}");
        }
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(is_alphanumeric("abc123"));
        assert!(!is_alphanumeric(""));
        assert!(!is_alphanumeric("abc 123"));
        assert!(!is_alphanumeric("héllo"));
    }

    #[test]
    fn test_is_valid_semver() {
        assert!(is_valid_semver("1.2.3"));
        assert!(is_valid_semver("1.0.0-alpha.1+build.5"));
        assert!(!is_valid_semver("1.2"));
        assert!(!is_valid_semver("v1.2.3"));
        assert!(!is_valid_semver("01.2.3"));
    }

    #[test]
    fn test_is_valid_json() {
        assert!(is_valid_json(r#"{"a": [1, null]}"#));
        assert!(is_valid_json("42"));
        assert!(!is_valid_json("{a: 1}"));
        assert!(!is_valid_json(""));
    }

    #[test]
    fn test_is_valid_username() {
        assert!(is_valid_username("ada_99"));
        assert!(is_valid_username("abc"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("9lives"));
        assert!(!is_valid_username("this_name_is_too_long"));
        assert!(!is_valid_username("no-dashes"));
    }
}
