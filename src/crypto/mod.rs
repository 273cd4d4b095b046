//! Hashing and secret generation
//!
//! Digests are returned as lowercase hexadecimal strings. Random material is
//! drawn from the thread-local CSPRNG (`rand::rng()`).

pub mod secrets;

pub use secrets::{
    constant_time_eq, generate_salt, generate_salt_with, generate_token, generate_token_with,
    hash_with_salt, verify_salted_hash,
};

use sha2::{Digest, Sha256, Sha512};

/// MD5 digest of `input` as 32 hex characters
///
/// MD5 is broken for security purposes; use it for checksums and cache keys only.
///
/// ```
/// use toolbelt::crypto::hash_md5;
///
/// assert_eq!(hash_md5(""), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
pub fn hash_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

/// SHA-256 digest of `input` as 64 hex characters
pub fn hash_sha256(input: &str) -> String {
    hash_bytes_sha256(input.as_bytes())
}

pub fn hash_bytes_sha256(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// SHA-512 digest of `input` as 128 hex characters
pub fn hash_sha512(input: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub(crate) fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
