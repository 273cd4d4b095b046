//! IPv4/IPv6 address helpers
//!
//! Parsing is strict: dotted-quad notation only, no leading zeros, no
//! surrounding whitespace.

use crate::error::{common, Result};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Strict dotted-quad check
///
/// ```
/// use toolbelt::network::is_valid_ipv4;
///
/// assert!(is_valid_ipv4("0.0.0.0"));
/// assert!(is_valid_ipv4("192.168.1.254"));
/// assert!(!is_valid_ipv4("192.168.01.1"));
/// assert!(!is_valid_ipv4("256.1.1.1"));
/// ```
pub fn is_valid_ipv4(address: &str) -> bool {
    parse_octets(address).is_some()
}

fn parse_octets(address: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = address.split('.');
    for octet in octets.iter_mut() {
        *octet = parse_octet(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(octets)
}

fn parse_octet(part: &str) -> Option<u8> {
    let well_formed = !part.is_empty()
        && part.len() <= 3
        && part.bytes().all(|b| b.is_ascii_digit())
        && (part == "0" || !part.starts_with('0'));
    if well_formed {
        part.parse().ok()
    } else {
        None
    }
}

fn parse_ipv4(param: &str, address: &str) -> Result<Ipv4Addr> {
    parse_octets(address)
        .map(Ipv4Addr::from)
        .ok_or_else(|| common::invalid_format(param, "a dotted-quad IPv4 address"))
}

pub fn is_valid_ipv6(address: &str) -> bool {
    Ipv6Addr::from_str(address).is_ok()
}

/// RFC 1918 private ranges plus loopback and link-local
pub fn is_private_ipv4(address: &str) -> Result<bool> {
    let ip = parse_ipv4("address", address)?;
    Ok(ip.is_private() || ip.is_loopback() || ip.is_link_local())
}

pub fn ipv4_to_int(address: &str) -> Result<u32> {
    Ok(u32::from(parse_ipv4("address", address)?))
}

pub fn int_to_ipv4(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

fn prefix_to_mask(prefix: u8) -> Result<u32> {
    match prefix {
        0 => Ok(0),
        1..=32 => Ok(u32::MAX << (32 - u32::from(prefix))),
        _ => Err(common::out_of_range("prefix", prefix, "between 0 and 32")),
    }
}

/// Dotted netmask for a prefix length: `24` is `255.255.255.0`
pub fn subnet_mask(prefix: u8) -> Result<String> {
    Ok(int_to_ipv4(prefix_to_mask(prefix)?))
}

/// Whether `address` falls inside the `network/prefix` block `cidr`
pub fn cidr_contains(cidr: &str, address: &str) -> Result<bool> {
    let (network, prefix) = cidr
        .split_once('/')
        .ok_or_else(|| common::invalid_format("cidr", "<address>/<prefix>"))?;
    let prefix: u8 = prefix
        .parse()
        .map_err(|_| common::invalid_format("cidr", "a numeric prefix length"))?;
    let mask = prefix_to_mask(prefix)?;
    let network = u32::from(parse_ipv4("cidr", network)?);
    let ip = u32::from(parse_ipv4("address", address)?);
    Ok(network & mask == ip & mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_is_valid_ipv4() {
        for valid in ["0.0.0.0", "255.255.255.255", "10.0.0.1", "8.8.8.8"] {
            assert!(is_valid_ipv4(valid), "{valid} should be valid");
        }
        for invalid in [
            "",
            "1.2.3",
            "1.2.3.4.5",
            "01.2.3.4",
            "1.2.3.256",
            "1.2.3.-4",
            "1.2.3.+4",
            " 1.2.3.4",
            "1..3.4",
            "a.b.c.d",
        ] {
            assert!(!is_valid_ipv4(invalid), "{invalid:?} should be invalid");
        }
    }

    #[test]
    fn test_is_valid_ipv6() {
        assert!(is_valid_ipv6("::1"));
        assert!(is_valid_ipv6("2001:db8::ff00:42:8329"));
        assert!(!is_valid_ipv6("2001:db8:::1"));
        assert!(!is_valid_ipv6("192.168.0.1"));
    }

    #[test]
    fn test_is_private_ipv4() {
        assert!(is_private_ipv4("10.1.2.3").unwrap());
        assert!(is_private_ipv4("172.16.0.1").unwrap());
        assert!(!is_private_ipv4("172.32.0.1").unwrap());
        assert!(is_private_ipv4("192.168.100.1").unwrap());
        assert!(is_private_ipv4("127.0.0.1").unwrap());
        assert!(is_private_ipv4("169.254.1.1").unwrap());
        assert!(!is_private_ipv4("8.8.8.8").unwrap());

        let err = is_private_ipv4("300.1.1.1").unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALUE_INVALID_FORMAT);
    }

    #[test]
    fn test_int_conversions() {
        assert_eq!(ipv4_to_int("192.168.1.1").unwrap(), 3_232_235_777);
        assert_eq!(int_to_ipv4(3_232_235_777), "192.168.1.1");
        assert_eq!(ipv4_to_int("0.0.0.0").unwrap(), 0);
        assert_eq!(int_to_ipv4(u32::MAX), "255.255.255.255");
        assert!(ipv4_to_int("1.2.3").is_err());
    }

    #[test]
    fn test_subnet_mask() {
        assert_eq!(subnet_mask(24).unwrap(), "255.255.255.0");
        assert_eq!(subnet_mask(0).unwrap(), "0.0.0.0");
        assert_eq!(subnet_mask(32).unwrap(), "255.255.255.255");
        assert_eq!(subnet_mask(20).unwrap(), "255.255.240.0");
        assert_eq!(
            subnet_mask(33).unwrap_err().code(),
            ErrorCode::VALUE_OUT_OF_RANGE
        );
    }

    #[test]
    fn test_cidr_contains() {
        assert!(cidr_contains("192.168.1.0/24", "192.168.1.77").unwrap());
        assert!(!cidr_contains("192.168.1.0/24", "192.168.2.1").unwrap());
        assert!(cidr_contains("0.0.0.0/0", "8.8.8.8").unwrap());
        assert!(cidr_contains("10.0.0.5/32", "10.0.0.5").unwrap());

        assert!(cidr_contains("192.168.1.0", "192.168.1.1").is_err());
        assert!(cidr_contains("192.168.1.0/40", "192.168.1.1").is_err());
        assert!(cidr_contains("192.168.1.0/x", "192.168.1.1").is_err());
        assert!(cidr_contains("192.168.1.0/24", "nope").is_err());
    }
}
