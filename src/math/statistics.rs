//! Descriptive statistics over `f64` samples
//!
//! All functions reject empty samples and NaN entries. Variance and standard
//! deviation are population statistics (divided by `n`).

use crate::error::Result;
use crate::guards::{ensure_non_empty_slice, ensure_not_nan};
use std::collections::HashMap;

fn validated(values: &[f64]) -> Result<&[f64]> {
    ensure_non_empty_slice("values", values)?;
    for value in values {
        ensure_not_nan("values", *value)?;
    }
    Ok(values)
}

pub fn mean(values: &[f64]) -> Result<f64> {
    let values = validated(values)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle value, or the mean of the two middle values for even-sized samples
pub fn median(values: &[f64]) -> Result<f64> {
    let mut sorted = validated(values)?.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Every value tied for the highest count, in ascending order
///
/// ```
/// use toolbelt::math::mode;
///
/// assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0, 3.0]).unwrap(), vec![2.0, 3.0]);
/// ```
pub fn mode(values: &[f64]) -> Result<Vec<f64>> {
    let values = validated(values)?;
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for value in values {
        // -0.0 and 0.0 count as the same value
        let key = if *value == 0.0 { 0.0f64 } else { *value };
        *counts.entry(key.to_bits()).or_insert(0) += 1;
    }

    let highest = counts.values().copied().max().unwrap_or(0);
    let mut modes: Vec<f64> = counts
        .into_iter()
        .filter(|(_, count)| *count == highest)
        .map(|(bits, _)| f64::from_bits(bits))
        .collect();
    modes.sort_by(f64::total_cmp);
    Ok(modes)
}

/// Population variance
pub fn variance(values: &[f64]) -> Result<f64> {
    let average = mean(values)?;
    let squared: f64 = values.iter().map(|v| (v - average).powi(2)).sum();
    Ok(squared / values.len() as f64)
}

pub fn standard_deviation(values: &[f64]) -> Result<f64> {
    Ok(variance(values)?.sqrt())
}
