//! Salts, tokens and salted hashes

use super::{hash_bytes_sha256, to_hex};
use crate::error::{common, Result};
use crate::guards::ensure_non_empty;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::Rng;

/// Upper bound on random bytes per call
const MAX_RANDOM_BYTES: usize = 1024;

fn ensure_byte_length(param: &str, length: usize) -> Result<()> {
    if length == 0 || length > MAX_RANDOM_BYTES {
        return Err(common::out_of_range(
            param,
            length,
            &format!("between 1 and {}", MAX_RANDOM_BYTES),
        ));
    }
    Ok(())
}

fn random_bytes<R: Rng>(rng: &mut R, length: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; length];
    rng.fill(bytes.as_mut_slice());
    bytes
}

/// `length` random bytes rendered as `2 * length` lowercase hex characters
///
/// ```
/// use toolbelt::crypto::generate_salt;
///
/// let salt = generate_salt(16).unwrap();
/// assert_eq!(salt.len(), 32);
/// assert!(salt.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
/// ```
pub fn generate_salt(length: usize) -> Result<String> {
    generate_salt_with(&mut rand::rng(), length)
}

pub fn generate_salt_with<R: Rng>(rng: &mut R, length: usize) -> Result<String> {
    ensure_byte_length("length", length)?;
    Ok(to_hex(&random_bytes(rng, length)))
}

/// `length` random bytes as URL-safe base64 without padding
pub fn generate_token(length: usize) -> Result<String> {
    generate_token_with(&mut rand::rng(), length)
}

pub fn generate_token_with<R: Rng>(rng: &mut R, length: usize) -> Result<String> {
    ensure_byte_length("length", length)?;
    Ok(URL_SAFE_NO_PAD.encode(random_bytes(rng, length)))
}

/// SHA-256 of `salt` followed by `input`
pub fn hash_with_salt(input: &str, salt: &str) -> Result<String> {
    ensure_non_empty("salt", salt)?;
    let mut material = Vec::with_capacity(salt.len() + input.len());
    material.extend_from_slice(salt.as_bytes());
    material.extend_from_slice(input.as_bytes());
    Ok(hash_bytes_sha256(&material))
}

/// Check `input` against a digest produced by [`hash_with_salt`]
///
/// The digest comparison is case-insensitive and constant-time.
pub fn verify_salted_hash(input: &str, salt: &str, expected: &str) -> Result<bool> {
    let actual = hash_with_salt(input, salt)?;
    Ok(constant_time_eq(&actual, &expected.to_ascii_lowercase()))
}

/// Compare two strings without short-circuiting on the first difference
///
/// Only the length comparison returns early.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_salt_length_and_alphabet() {
        for n in [1, 8, 32] {
            let salt = generate_salt(n).unwrap();
            assert_eq!(salt.len(), 2 * n);
            assert!(salt.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        }
    }

    #[test]
    fn test_successive_salts_differ() {
        assert_ne!(generate_salt(16).unwrap(), generate_salt(16).unwrap());
    }

    #[test]
    fn test_salt_bounds() {
        let err = generate_salt(0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALUE_OUT_OF_RANGE);
        assert!(generate_salt(MAX_RANDOM_BYTES + 1).is_err());
        assert!(generate_salt(MAX_RANDOM_BYTES).is_ok());
    }

    #[test]
    fn test_seeded_salt_is_reproducible() {
        let a = generate_salt_with(&mut StdRng::seed_from_u64(7), 12).unwrap();
        let b = generate_salt_with(&mut StdRng::seed_from_u64(7), 12).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = generate_token(32).unwrap();
        // 32 bytes -> 43 base64 characters without padding
        assert_eq!(token.len(), 43);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert!(generate_token(0).is_err());
    }

    #[test]
    fn test_salted_hash_round_trip() {
        let digest = hash_with_salt("hunter2", "a1b2").unwrap();
        assert_eq!(digest, hash_bytes_sha256(b"a1b2hunter2"));
        assert!(verify_salted_hash("hunter2", "a1b2", &digest).unwrap());
        assert!(verify_salted_hash("hunter2", "a1b2", &digest.to_uppercase()).unwrap());
        assert!(!verify_salted_hash("hunter3", "a1b2", &digest).unwrap());
    }

    #[test]
    fn test_salted_hash_requires_salt() {
        let err = hash_with_salt("x", "").unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALUE_EMPTY);
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq("abc", "abc"));
        assert!(!constant_time_eq("abc", "abd"));
        assert!(!constant_time_eq("abc", "abcd"));
        assert!(constant_time_eq("", ""));
    }
}
