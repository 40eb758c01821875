//! Parsing of CIDR text and host addresses.

use super::address::IpFamily;
use super::network::{IpNetwork, Network};
use crate::error::CidrError;
use regex::Regex;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::OnceLock;

/// `ADDRESS/PREFIX` with nothing after the prefix digits.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| Regex::new(r"^([^/\s]+)/([0-9]+)$").expect("Invalid Regex"))
}

/// Split CIDR text into its address and prefix length parts.
///
/// Surrounding whitespace is ignored. A missing `/`, a non numeric prefix or
/// anything trailing the prefix is an [`CidrError::InvalidCidrSyntax`].
pub fn parse_cidr_text(text: &str) -> Result<(&str, &str), CidrError> {
    let text = text.trim();
    let caps = get_cidr_regex()
        .captures(text)
        .ok_or_else(|| CidrError::InvalidCidrSyntax(text.to_string()))?;
    match (caps.get(1), caps.get(2)) {
        (Some(addr), Some(prefix)) => Ok((addr.as_str(), prefix.as_str())),
        _ => Err(CidrError::InvalidCidrSyntax(text.to_string())),
    }
}

/// Parse a decimal prefix length and check it against the address width.
pub fn parse_prefix_len(text: &str, width: u8) -> Result<u8, CidrError> {
    match text.parse::<u8>() {
        Ok(len) if len <= width => Ok(len),
        _ => Err(CidrError::InvalidPrefixLength {
            prefix: text.to_string(),
            width,
        }),
    }
}

/// Parse an address of one family.
pub fn parse_address<A: IpFamily>(text: &str) -> Result<A, CidrError> {
    A::from_str(text.trim()).map_err(|_| CidrError::InvalidAddressText(text.to_string()))
}

/// Parse a host address to test against a network of family `A`.
///
/// A valid address of the other family is reported as a family mismatch rather
/// than as unparseable text.
pub fn parse_host<A: IpFamily>(text: &str) -> Result<A, CidrError> {
    parse_address::<A>(text).map_err(|e| match text.trim().parse::<IpAddr>() {
        Ok(other) => CidrError::AddressFamilyMismatch {
            host: other.to_string(),
            host_family: if other.is_ipv4() {
                Ipv4Addr::NAME
            } else {
                Ipv6Addr::NAME
            },
            network_family: A::NAME,
        },
        Err(_) => e,
    })
}

impl<A: IpFamily> FromStr for Network<A> {
    type Err = CidrError;

    /// Parse `ADDRESS/PREFIX` of this family, the address is checked before the prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = parse_cidr_text(s)?;
        let addr = parse_address::<A>(addr)?;
        let prefix_len = parse_prefix_len(prefix, A::WIDTH)?;
        Network::new(addr, prefix_len)
    }
}

impl FromStr for IpNetwork {
    type Err = CidrError;

    /// Parse CIDR text of either family, detected from the address part.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = parse_cidr_text(s)?;
        if let Ok(v4) = addr.parse::<Ipv4Addr>() {
            let prefix_len = parse_prefix_len(prefix, Ipv4Addr::WIDTH)?;
            Ok(IpNetwork::V4(Network::new(v4, prefix_len)?))
        } else if let Ok(v6) = addr.parse::<Ipv6Addr>() {
            let prefix_len = parse_prefix_len(prefix, Ipv6Addr::WIDTH)?;
            Ok(IpNetwork::V6(Network::new(v6, prefix_len)?))
        } else {
            Err(CidrError::InvalidAddressText(addr.to_string()))
        }
    }
}
