//! Network address helpers
//!
//! Validation and arithmetic for IPv4/IPv6 addresses, ports, MAC addresses and
//! URLs. Nothing here opens a socket or resolves a name.

pub mod ipv4;
pub mod url;

pub use self::ipv4::{
    cidr_contains, int_to_ipv4, ipv4_to_int, is_private_ipv4, is_valid_ipv4, is_valid_ipv6,
    subnet_mask,
};
pub use self::url::{extract_domain, parse_url, UrlParts};

use once_cell::sync::Lazy;
use regex::Regex;

static MAC_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9A-Fa-f]{2}(?::[0-9A-Fa-f]{2}){5}|[0-9A-Fa-f]{2}(?:-[0-9A-Fa-f]{2}){5})$")
        .expect("Valid regex pattern")
});

/// TCP/UDP port in `1..=65535`
pub fn is_valid_port(port: i64) -> bool {
    (1..=65535).contains(&port)
}

/// Six hex pairs separated consistently by `:` or `-`
///
/// ```
/// use toolbelt::network::is_valid_mac_address;
///
/// assert!(is_valid_mac_address("00:1A:2b:3C:4d:5E"));
/// assert!(is_valid_mac_address("00-1A-2B-3C-4D-5E"));
/// assert!(!is_valid_mac_address("00:1A-2B:3C:4D:5E"));
/// ```
pub fn is_valid_mac_address(address: &str) -> bool {
    MAC_ADDRESS.is_match(address)
}
