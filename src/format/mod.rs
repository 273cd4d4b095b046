//! Human-readable formatting of numbers, sizes and durations

use crate::error::{common, Result};
use crate::guards::ensure_finite;

const BYTE_UNITS: [&str; 7] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Most fractional digits any formatter here will render
pub const MAX_DECIMALS: usize = 20;

fn ensure_decimals(decimals: usize) -> Result<usize> {
    if decimals > MAX_DECIMALS {
        return Err(common::out_of_range(
            "decimals",
            decimals,
            &format!("at most {}", MAX_DECIMALS),
        ));
    }
    Ok(decimals)
}

/// Render a byte count with 1024-based units, trimming trailing zeros
///
/// `decimals` above [`MAX_DECIMALS`] is clamped.
///
/// ```
/// use toolbelt::format::format_bytes;
///
/// assert_eq!(format_bytes(0, 2), "0 Bytes");
/// assert_eq!(format_bytes(1536, 2), "1.5 KB");
/// assert_eq!(format_bytes(1_073_741_824, 2), "1 GB");
/// ```
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let decimals = decimals.min(MAX_DECIMALS);
    format!("{} {}", trim_decimal(&format!("{:.*}", decimals, value)), BYTE_UNITS[unit])
}

/// Drop trailing zeros (and a dangling point) from a fixed-point string
fn trim_decimal(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

/// Insert `,` thousands separators into the integer part of `value`
pub fn format_number(value: f64, decimals: usize) -> Result<String> {
    ensure_finite("value", value)?;
    let decimals = ensure_decimals(decimals)?;
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = group_thousands(integer);
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    if value < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.insert(0, '-');
    }
    Ok(grouped)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Currency amount such as `-$1,234.50`
pub fn format_currency(amount: f64, symbol: &str, decimals: usize) -> Result<String> {
    let formatted = format_number(amount, decimals)?;
    Ok(match formatted.strip_prefix('-') {
        Some(rest) => format!("-{}{}", symbol, rest),
        None => format!("{}{}", symbol, formatted),
    })
}

/// Render a ratio as a percentage: `0.256` with one decimal is `25.6%`
pub fn format_percentage(ratio: f64, decimals: usize) -> Result<String> {
    ensure_finite("ratio", ratio)?;
    let decimals = ensure_decimals(decimals)?;
    Ok(format!("{:.*}%", decimals, ratio * 100.0))
}

/// Compact duration such as `1d 2h 3m 4s`
///
/// Durations under a second are shown in milliseconds.
pub fn format_duration(millis: u64) -> String {
    if millis == 0 {
        return "0s".to_string();
    }
    if millis < 1000 {
        return format!("{}ms", millis);
    }

    let total_seconds = millis / 1000;
    let parts = [
        (total_seconds / 86_400, "d"),
        ((total_seconds % 86_400) / 3600, "h"),
        ((total_seconds % 3600) / 60, "m"),
        (total_seconds % 60, "s"),
    ];

    parts
        .iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, suffix)| format!("{}{}", amount, suffix))
        .collect::<Vec<_>>()
        .join(" ")
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 22nd, 113th
pub fn to_ordinal(n: u64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Zero-pad `n` to `width` characters (the sign counts towards the width)
pub fn pad_number(n: i64, width: usize) -> String {
    let digits = n.unsigned_abs().to_string();
    let sign = if n < 0 { "-" } else { "" };
    let zeros = width.saturating_sub(sign.len() + digits.len());
    format!("{}{}{}", sign, "0".repeat(zeros), digits)
}

/// North American phone formatting
///
/// Ten digits become `(555) 123-4567`; eleven digits starting with `1` gain a
/// `+1` prefix. Non-digit characters in the input are ignored.
pub fn format_phone_number(input: &str) -> Result<String> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => Ok(format!(
            "({}) {}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..]
        )),
        11 if digits.starts_with('1') => Ok(format!(
            "+1 ({}) {}-{}",
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        )),
        _ => Err(common::invalid_format(
            "phone",
            "10 digits, or 11 digits with a leading 1",
        )),
    }
}
