//! Numeric helpers
//!
//! Scalar arithmetic lives here; aggregate statistics over slices are in
//! [`statistics`]. Integer sequences report overflow as a value error rather
//! than wrapping.

pub mod statistics;

pub use statistics::{mean, median, mode, standard_deviation, variance};

use crate::error::{common, Result};
use crate::guards::{ensure_finite, ensure_min_count, ensure_not_nan, ensure_ordered};

/// Largest number of decimal places `round_to_decimals` accepts
pub const MAX_DECIMALS: i32 = 15;

/// Real cube root, defined for negative inputs
///
/// ```
/// use toolbelt::math::calculate_cube_root;
///
/// assert_eq!(calculate_cube_root(-27.0).unwrap(), -3.0);
/// assert_eq!(calculate_cube_root(0.0).unwrap(), 0.0);
/// assert!(calculate_cube_root(f64::NAN).is_err());
/// ```
pub fn calculate_cube_root(value: f64) -> Result<f64> {
    ensure_not_nan("value", value)?;
    Ok(value.cbrt())
}

pub fn calculate_square_root(value: f64) -> Result<f64> {
    ensure_not_nan("value", value)?;
    if value < 0.0 {
        return Err(common::negative("value", value));
    }
    Ok(value.sqrt())
}

/// Round half away from zero to `decimals` places
pub fn round_to_decimals(value: f64, decimals: i32) -> Result<f64> {
    ensure_finite("value", value)?;
    if !(0..=MAX_DECIMALS).contains(&decimals) {
        return Err(common::out_of_range(
            "decimals",
            decimals,
            "between 0 and 15",
        ));
    }

    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        // Magnitude too large to carry a fractional part
        return Ok(value);
    }
    Ok(scaled.round() / factor)
}

/// `n!`, which fits in a `u64` up to `20!`
pub fn factorial(n: u32) -> Result<u64> {
    (1..=u64::from(n))
        .try_fold(1u64, |acc, k| acc.checked_mul(k))
        .ok_or_else(|| common::overflow("factorial", n))
}

/// `n`-th Fibonacci number with `fibonacci(0) == 0`; fits in a `u64` up to `n = 93`
pub fn fibonacci(n: u32) -> Result<u64> {
    if n == 0 {
        return Ok(0);
    }
    let (mut previous, mut current) = (0u64, 1u64);
    for _ in 1..n {
        let next = previous
            .checked_add(current)
            .ok_or_else(|| common::overflow("fibonacci", n))?;
        previous = current;
        current = next;
    }
    Ok(current)
}

/// Greatest common divisor of the absolute values; `gcd(0, 0) == 0`
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of the absolute values; zero if either is zero
pub fn lcm(a: i64, b: i64) -> Result<u64> {
    lcm_unsigned(a.unsigned_abs(), b.unsigned_abs())
}

fn lcm_unsigned(a: u64, b: u64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let divisor = gcd_unsigned(a, b);
    (a / divisor)
        .checked_mul(b)
        .ok_or_else(|| common::overflow("lcm", format!("{} and {}", a, b)))
}

fn gcd_unsigned(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn gcd_of(values: &[i64]) -> Result<u64> {
    ensure_min_count("values", values, 2)?;
    Ok(values
        .iter()
        .fold(0u64, |acc, v| gcd_unsigned(acc, v.unsigned_abs())))
}

pub fn lcm_of(values: &[i64]) -> Result<u64> {
    ensure_min_count("values", values, 2)?;
    values
        .iter()
        .try_fold(1u64, |acc, v| lcm_unsigned(acc, v.unsigned_abs()))
}

/// Deterministic trial division over `6k ± 1`
pub fn is_prime(n: u64) -> bool {
    match n {
        0 | 1 => false,
        2 | 3 => true,
        _ if n % 2 == 0 || n % 3 == 0 => false,
        _ => {
            let mut i = 5u64;
            while i <= n / i {
                if n % i == 0 || n % (i + 2) == 0 {
                    return false;
                }
                i += 6;
            }
            true
        }
    }
}

pub fn clamp(value: f64, min: f64, max: f64) -> Result<f64> {
    ensure_not_nan("value", value)?;
    ensure_not_nan("min", min)?;
    ensure_not_nan("max", max)?;
    ensure_ordered(min, max)?;
    Ok(value.clamp(min, max))
}

/// Linear interpolation `a + (b - a) * t`; `t` is not restricted to `[0, 1]`
pub fn lerp(a: f64, b: f64, t: f64) -> Result<f64> {
    ensure_finite("a", a)?;
    ensure_finite("b", b)?;
    ensure_finite("t", t)?;
    Ok(a + (b - a) * t)
}

/// `part` as a percentage of `total`
pub fn percentage_of(part: f64, total: f64) -> Result<f64> {
    ensure_finite("part", part)?;
    ensure_finite("total", total)?;
    if total == 0.0 {
        return Err(common::division_by_zero("total"));
    }
    Ok(part / total * 100.0)
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::f64::consts::PI;

    #[test]
    fn test_cube_root() {
        assert_eq!(calculate_cube_root(27.0).unwrap(), 3.0);
        assert_eq!(calculate_cube_root(-8.0).unwrap(), -2.0);
        assert_eq!(
            calculate_cube_root(f64::NAN).unwrap_err().code(),
            ErrorCode::VALUE_NOT_FINITE
        );
    }

    #[test]
    fn test_square_root() {
        assert_eq!(calculate_square_root(16.0).unwrap(), 4.0);
        assert_eq!(calculate_square_root(0.0).unwrap(), 0.0);
        let err = calculate_square_root(-1.0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALUE_NEGATIVE);
        assert_eq!(err.param(), Some("value"));
    }

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(5.6789, 2).unwrap(), 5.68);
        assert_eq!(round_to_decimals(2.5, 0).unwrap(), 3.0);
        assert_eq!(round_to_decimals(-1.005, 1).unwrap(), -1.0);
        assert_eq!(round_to_decimals(1e300, 15).unwrap(), 1e300);
    }

    #[test]
    fn test_round_to_decimals_rejects_bad_arguments() {
        assert_eq!(
            round_to_decimals(1.0, -1).unwrap_err().code(),
            ErrorCode::VALUE_OUT_OF_RANGE
        );
        assert!(round_to_decimals(1.0, 16).is_err());
        assert!(round_to_decimals(f64::INFINITY, 2).is_err());
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
        assert_eq!(factorial(21).unwrap_err().code(), ErrorCode::VALUE_OVERFLOW);
    }

    #[test]
    fn test_fibonacci() {
        let first: Vec<u64> = (0..10).map(|n| fibonacci(n).unwrap()).collect();
        assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert_eq!(fibonacci(93).unwrap(), 12_200_160_415_121_876_738);
        assert_eq!(fibonacci(94).unwrap_err().code(), ErrorCode::VALUE_OVERFLOW);
        assert!(fibonacci(500).is_err());
    }

    #[test]
    fn test_gcd_and_lcm() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(-48, 18), 6);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(i64::MIN, 0), 1u64 << 63);
        assert_eq!(lcm(4, 6).unwrap(), 12);
        assert_eq!(lcm(0, 6).unwrap(), 0);
        assert!(lcm(i64::MAX, i64::MAX - 1).is_err());
    }

    #[test]
    fn test_variadic_gcd_and_lcm() {
        assert_eq!(gcd_of(&[12, 18, 24]).unwrap(), 6);
        assert_eq!(lcm_of(&[2, 3, 4]).unwrap(), 12);
        assert_eq!(
            gcd_of(&[12]).unwrap_err().code(),
            ErrorCode::VALUE_TOO_FEW_ARGUMENTS
        );
        assert!(lcm_of(&[]).is_err());
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..30).filter(|n| is_prime(*n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(1_000_000_007 * 3));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(15.0, 0.0, 10.0).unwrap(), 10.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0).unwrap(), 0.0);
        assert_eq!(
            clamp(1.0, 5.0, 0.0).unwrap_err().code(),
            ErrorCode::VALUE_INVALID_RANGE
        );
        assert!(clamp(f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_lerp_and_percentages() {
        assert_eq!(lerp(0.0, 10.0, 0.25).unwrap(), 2.5);
        assert_eq!(lerp(10.0, 20.0, 1.5).unwrap(), 25.0);
        assert!(lerp(0.0, f64::INFINITY, 0.5).is_err());

        assert_eq!(percentage_of(25.0, 200.0).unwrap(), 12.5);
        assert_eq!(
            percentage_of(1.0, 0.0).unwrap_err().code(),
            ErrorCode::VALUE_DIVISION_BY_ZERO
        );
    }

    #[test]
    fn test_angle_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < 1e-12);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < 1e-12);
    }
}
