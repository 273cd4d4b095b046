//! Reshaping helpers: chunking, flattening, rotation, windows and ranges

use crate::error::{common, ErrorCode, Result, ToolbeltError};
use crate::guards::expect_array;
use serde_json::Value;

/// Split `items` into consecutive chunks of `size`; the last chunk may be short
///
/// ```
/// use toolbelt::array::chunk_array;
///
/// let chunks = chunk_array(&[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(chunk_array(&[1], 0).is_err());
/// ```
pub fn chunk_array<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(common::out_of_range("size", size, "at least 1"));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

pub fn flatten_array<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    nested.iter().flatten().cloned().collect()
}

/// Flatten nested JSON arrays up to `depth` levels
///
/// `depth == 0` returns a copy of the input. Non-array elements are kept as is.
pub fn flatten_json_array(value: &Value, depth: usize) -> Result<Value> {
    let items = expect_array("value", value)?;
    let mut out = Vec::with_capacity(items.len());
    flatten_into(items, depth, &mut out);
    Ok(Value::Array(out))
}

fn flatten_into(items: &[Value], depth: usize, out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Array(inner) if depth > 0 => flatten_into(inner, depth - 1, out),
            other => out.push(other.clone()),
        }
    }
}

/// Rotate left by `k` positions; negative `k` rotates right
pub fn rotate_array<T: Clone>(items: &[T], k: i64) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let len = items.len() as i64;
    let shift = k.rem_euclid(len) as usize;
    let mut rotated = items.to_vec();
    rotated.rotate_left(shift);
    rotated
}

/// Split into `(matching, rest)` while keeping relative order
pub fn partition<T: Clone, F>(items: &[T], mut predicate: F) -> (Vec<T>, Vec<T>)
where
    F: FnMut(&T) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for item in items {
        if predicate(item) {
            matching.push(item.clone());
        } else {
            rest.push(item.clone());
        }
    }
    (matching, rest)
}

/// Integers from `start` (inclusive) towards `end` (exclusive) by `step`
///
/// A step that points away from `end` yields an empty vector. The whole range
/// is materialized, so `range(0, i64::MAX, 1)` tries to allocate every value;
/// use [`range_iter`] to walk large spans lazily.
pub fn range(start: i64, end: i64, step: i64) -> Result<Vec<i64>> {
    Ok(range_iter(start, end, step)?.collect())
}

/// Lazy form of [`range`]; stops before `current + step` would overflow
///
/// ```
/// use toolbelt::array::range_iter;
///
/// let head: Vec<i64> = range_iter(0, i64::MAX, 1).unwrap().take(3).collect();
/// assert_eq!(head, vec![0, 1, 2]);
/// ```
pub fn range_iter(start: i64, end: i64, step: i64) -> Result<impl Iterator<Item = i64>> {
    if step == 0 {
        return Err(ToolbeltError::value_with_code(
            ErrorCode::VALUE_OUT_OF_RANGE,
            "'step' must not be zero",
            Some("step".to_string()),
        ));
    }

    let in_bounds = move |current: &i64| {
        (step > 0 && *current < end) || (step < 0 && *current > end)
    };
    Ok(std::iter::successors(Some(start), move |current| current.checked_add(step))
        .take_while(in_bounds))
}

/// Every contiguous window of `size` elements
pub fn sliding_window<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(common::out_of_range("size", size, "at least 1"));
    }
    Ok(items.windows(size).map(<[T]>::to_vec).collect())
}

/// Pair elements positionally, stopping at the shorter slice
pub fn zip_arrays<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(A, B)> {
    left.iter().cloned().zip(right.iter().cloned()).collect()
}
