//! Array utilities
//!
//! Pure functions over slices. Inputs are borrowed and every result is a new
//! collection:
//! - aggregates: `find_max`, `find_min`, `array_sum`, `count_occurrences`
//! - set-like helpers: `unique`, `array_intersection`, `array_difference`
//! - reshaping: see [`transform`]

pub mod transform;

pub use transform::{
    chunk_array, flatten_array, flatten_json_array, partition, range, range_iter, rotate_array,
    sliding_window, zip_arrays,
};

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Largest value in `values`
///
/// Returns negative infinity for an empty slice. NaN entries are skipped.
///
/// ```
/// use toolbelt::array::find_max;
///
/// assert_eq!(find_max(&[3.0, 9.5, -1.0]), 9.5);
/// assert_eq!(find_max(&[]), f64::NEG_INFINITY);
/// ```
pub fn find_max(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Smallest value in `values`, positive infinity for an empty slice
pub fn find_min(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::INFINITY, f64::min)
}

pub fn array_sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Distinct elements in order of first appearance
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Elements of `left` also present in `right`, deduplicated, in `left` order
pub fn array_intersection<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let right: HashSet<&T> = right.iter().collect();
    unique(left)
        .into_iter()
        .filter(|item| right.contains(item))
        .collect()
}

/// Elements of `left` absent from `right`, duplicates in `left` kept
pub fn array_difference<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let right: HashSet<&T> = right.iter().collect();
    left.iter()
        .filter(|item| !right.contains(item))
        .cloned()
        .collect()
}

pub fn count_occurrences<T: Eq + Hash + Clone>(items: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}
