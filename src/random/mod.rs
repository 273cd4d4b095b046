//! Random values
//!
//! Each function draws from the thread-local generator. The `*_with` variant
//! takes any [`Rng`], so tests and simulations can pass a seeded `StdRng`.

use crate::error::{common, Result};
use crate::guards::{ensure_finite, ensure_non_empty, ensure_non_empty_slice, ensure_ordered};
use rand::distr::Alphanumeric;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::trace;

/// Uniform integer in `min..=max`
///
/// ```
/// use toolbelt::random::random_int;
///
/// let roll = random_int(1, 6).unwrap();
/// assert!((1..=6).contains(&roll));
/// assert!(random_int(6, 1).is_err());
/// ```
pub fn random_int(min: i64, max: i64) -> Result<i64> {
    random_int_with(&mut rand::rng(), min, max)
}

pub fn random_int_with<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<i64> {
    ensure_ordered(min, max)?;
    Ok(rng.random_range(min..=max))
}

/// Uniform float in `min..max`; `min == max` returns `min`
///
/// The span `max - min` must itself be finite.
pub fn random_float(min: f64, max: f64) -> Result<f64> {
    random_float_with(&mut rand::rng(), min, max)
}

pub fn random_float_with<R: Rng>(rng: &mut R, min: f64, max: f64) -> Result<f64> {
    ensure_finite("min", min)?;
    ensure_finite("max", max)?;
    ensure_ordered(min, max)?;
    if min == max {
        return Ok(min);
    }
    let span = max - min;
    if !span.is_finite() {
        return Err(common::out_of_range(
            "max",
            max,
            &format!("within {} of 'min'", f64::MAX),
        ));
    }
    Ok(rng.random_range(min..max))
}

/// `true` with probability `p`
pub fn random_bool(p: f64) -> Result<bool> {
    random_bool_with(&mut rand::rng(), p)
}

pub fn random_bool_with<R: Rng>(rng: &mut R, p: f64) -> Result<bool> {
    if !(0.0..=1.0).contains(&p) {
        return Err(common::out_of_range("p", p, "between 0 and 1"));
    }
    Ok(rng.random_bool(p))
}

pub fn random_element<T: Clone>(items: &[T]) -> Result<T> {
    random_element_with(&mut rand::rng(), items)
}

pub fn random_element_with<R: Rng, T: Clone>(rng: &mut R, items: &[T]) -> Result<T> {
    ensure_non_empty_slice("items", items)?;
    items
        .choose(rng)
        .cloned()
        .ok_or_else(|| common::empty("items"))
}

/// Shuffled copy of `items`
pub fn shuffle_array<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_array_with(&mut rand::rng(), items)
}

pub fn shuffle_array_with<R: Rng, T: Clone>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// `count` distinct positions of `items`, in random order
pub fn random_sample<T: Clone>(items: &[T], count: usize) -> Result<Vec<T>> {
    random_sample_with(&mut rand::rng(), items, count)
}

pub fn random_sample_with<R: Rng, T: Clone>(
    rng: &mut R,
    items: &[T],
    count: usize,
) -> Result<Vec<T>> {
    if count > items.len() {
        return Err(common::out_of_range(
            "count",
            count,
            &format!("at most the number of items ({})", items.len()),
        ));
    }
    Ok(items.choose_multiple(rng, count).cloned().collect())
}

/// `length` characters drawn from `charset`, or ASCII alphanumerics when `None`
pub fn random_string(length: usize, charset: Option<&str>) -> Result<String> {
    random_string_with(&mut rand::rng(), length, charset)
}

pub fn random_string_with<R: Rng>(
    rng: &mut R,
    length: usize,
    charset: Option<&str>,
) -> Result<String> {
    match charset {
        None => Ok((0..length)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect()),
        Some(charset) => {
            let chars: Vec<char> = ensure_non_empty("charset", charset)?.chars().collect();
            Ok((0..length)
                .filter_map(|_| chars.choose(rng).copied())
                .collect())
        }
    }
}

/// RFC 4122 version 4 UUID in hyphenated lowercase form
pub fn random_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn random_uuid_with<R: Rng>(rng: &mut R) -> String {
    uuid::Builder::from_random_bytes(rng.random())
        .into_uuid()
        .to_string()
}

/// `#rrggbb` with lowercase hex digits
pub fn random_hex_color() -> String {
    random_hex_color_with(&mut rand::rng())
}

pub fn random_hex_color_with<R: Rng>(rng: &mut R) -> String {
    format!("#{:06x}", rng.random_range(0..=0xFF_FFFFu32))
}

/// Pick an item with probability proportional to its weight
///
/// Weights must be finite and non-negative with a positive total. Items with a
/// zero weight are never chosen.
pub fn weighted_choice<T: Clone>(choices: &[(T, f64)]) -> Result<T> {
    weighted_choice_with(&mut rand::rng(), choices)
}

pub fn weighted_choice_with<R: Rng, T: Clone>(rng: &mut R, choices: &[(T, f64)]) -> Result<T> {
    ensure_non_empty_slice("choices", choices)?;
    for (_, weight) in choices {
        ensure_finite("weight", *weight)?;
        if *weight < 0.0 {
            return Err(common::negative("weight", weight));
        }
    }
    let total: f64 = choices.iter().map(|(_, w)| w).sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(common::out_of_range(
            "weights",
            total,
            "a finite positive total",
        ));
    }

    let draw = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (item, weight) in choices {
        cumulative += weight;
        if draw < cumulative {
            return Ok(item.clone());
        }
    }

    // Rounding can leave `draw` just past the last cumulative sum
    trace!(draw, total, "Weighted choice fell through, using last weighted item");
    choices
        .iter()
        .rev()
        .find(|(_, w)| *w > 0.0)
        .map(|(item, _)| item.clone())
        .ok_or_else(|| common::empty("choices"))
}
