//! Exact address counts.

use serde::{Serialize, Serializer};
use std::fmt;

/// Decimal form of 2^128, the size of the whole IPv6 address space.
const TWO_POW_128: &str = "340282366920938463463374607431768211456";

/// The number of addresses in a network, always a power of two.
///
/// Stored as the exponent so that the whole IPv6 space (2^128) is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressCount {
    exponent: u8,
}

impl AddressCount {
    /// A count of `2^exponent`, exponents above 128 are clamped.
    pub fn pow2(exponent: u8) -> AddressCount {
        AddressCount {
            exponent: exponent.min(128),
        }
    }

    pub fn exponent(&self) -> u8 {
        self.exponent
    }

    /// The count as a `u128`, `None` only for 2^128.
    pub fn as_u128(&self) -> Option<u128> {
        1u128.checked_shl(u32::from(self.exponent))
    }
}

impl fmt::Display for AddressCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.as_u128() {
            Some(count) => write!(f, "{count}"),
            None => f.write_str(TWO_POW_128),
        }
    }
}

impl Serialize for AddressCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
