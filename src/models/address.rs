//! Address family abstraction and the fixed-width arithmetic behind every CIDR calculation.
//!
//! Both families are handled as unsigned integers: an IPv4 address is its 32-bit value and an
//! IPv6 address its 128-bit value, held in the low bits of a `u128`. Masking, bounds and
//! increments are then plain integer operations with no per-byte carry handling.

use crate::error::CidrError;
use std::fmt;
use std::hash::Hash;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// An IP address family with a fixed bit width.
pub trait IpFamily: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr {
    /// Address width in bits (32 or 128).
    const WIDTH: u8;
    /// Largest number of host bits (or subnet-id bits) that may be enumerated.
    const MAX_ENUMERATION_BITS: u8;
    /// Human readable family name.
    const NAME: &'static str;

    /// Numeric value of the address, most significant byte first.
    fn to_bits(self) -> u128;

    /// Build an address from the low [`IpFamily::WIDTH`] bits of `bits`.
    fn from_bits(bits: u128) -> Self;

    /// All [`IpFamily::WIDTH`] bits set.
    fn all_ones() -> u128 {
        u128::MAX >> (128 - u32::from(Self::WIDTH))
    }
}

impl IpFamily for Ipv4Addr {
    const WIDTH: u8 = 32;
    const MAX_ENUMERATION_BITS: u8 = 32;
    const NAME: &'static str = "IPv4";

    fn to_bits(self) -> u128 {
        u128::from(u32::from(self))
    }

    fn from_bits(bits: u128) -> Self {
        Ipv4Addr::from(bits as u32)
    }
}

impl IpFamily for Ipv6Addr {
    const WIDTH: u8 = 128;
    const MAX_ENUMERATION_BITS: u8 = 64;
    const NAME: &'static str = "IPv6";

    fn to_bits(self) -> u128 {
        u128::from(self)
    }

    fn from_bits(bits: u128) -> Self {
        Ipv6Addr::from(bits)
    }
}

/// Mask bits for a prefix length already known to be in range.
pub(crate) fn prefix_mask_bits<A: IpFamily>(prefix_len: u8) -> u128 {
    debug_assert!(prefix_len <= A::WIDTH);
    if prefix_len == 0 {
        0
    } else {
        let host_bits = u32::from(A::WIDTH - prefix_len);
        (A::all_ones() >> host_bits) << host_bits
    }
}

/// Convert a CIDR prefix length to a netmask of the family's width.
///
/// # Examples
/// ```
/// use cidrl::models::derive_mask;
/// use std::net::Ipv4Addr;
/// assert_eq!(derive_mask::<Ipv4Addr>(24).unwrap(), Ipv4Addr::new(255, 255, 255, 0));
/// ```
pub fn derive_mask<A: IpFamily>(prefix_len: u8) -> Result<A, CidrError> {
    if prefix_len > A::WIDTH {
        Err(CidrError::InvalidPrefixLength {
            prefix: prefix_len.to_string(),
            width: A::WIDTH,
        })
    } else {
        Ok(A::from_bits(prefix_mask_bits::<A>(prefix_len)))
    }
}

/// Get the network (first) address: all host bits cleared.
pub fn network_addr<A: IpFamily>(addr: A, mask: A) -> A {
    A::from_bits(addr.to_bits() & mask.to_bits())
}

/// Get the end (broadcast) address: all host bits set.
pub fn end_addr<A: IpFamily>(addr: A, mask: A) -> A {
    let mask = mask.to_bits();
    A::from_bits((addr.to_bits() & mask) | (!mask & A::all_ones()))
}

/// Advance an address by `2^n`.
///
/// Returns `None` when the result would fall outside the address space, so callers
/// walking up to the last address stop instead of wrapping around to zero.
pub fn increment_by_pow2<A: IpFamily>(addr: A, n: u8) -> Option<A> {
    if n >= A::WIDTH {
        return None;
    }
    addr.to_bits()
        .checked_add(1u128 << n)
        .filter(|bits| *bits <= A::all_ones())
        .map(A::from_bits)
}

/// Advance an address by one.
pub fn increment<A: IpFamily>(addr: A) -> Option<A> {
    increment_by_pow2(addr, 0)
}
