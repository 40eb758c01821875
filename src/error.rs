//! Error types for CIDR parsing and address-range calculations.

use thiserror::Error;

/// Process exit code used when a host is not a member of the network.
pub const EXIT_NOT_MEMBER: u8 = 64;

/// Everything that can go wrong while parsing or calculating a CIDR block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    #[error("invalid prefix length {prefix}, must be between 0 and {width}")]
    InvalidPrefixLength { prefix: String, width: u8 },

    #[error("invalid address: {0}")]
    InvalidAddressText(String),

    #[error("invalid CIDR notation: {0:?} (expected ADDRESS/PREFIX)")]
    InvalidCidrSyntax(String),

    #[error("address {host} is {host_family} but the network is {network_family}")]
    AddressFamilyMismatch {
        host: String,
        host_family: &'static str,
        network_family: &'static str,
    },

    #[error("subnet prefix /{subnet} must be longer than the network prefix /{prefix}")]
    SubnetNotNarrower { subnet: u8, prefix: u8 },

    #[error("subnet prefix /{subnet} exceeds the address width of {width} bits")]
    SubnetPrefixOutOfRange { subnet: u32, width: u8 },

    #[error("splitting /{prefix} into /{subnet} spans {bits} bits, at most {limit} supported")]
    TooManySubnets {
        prefix: u8,
        subnet: u8,
        bits: u8,
        limit: u8,
    },

    #[error("a /{prefix} holds 2^{bits} addresses, at most 2^{limit} can be listed")]
    TooManyHosts { prefix: u8, bits: u8, limit: u8 },
}

impl CidrError {
    /// Exit code reported by the command line tool for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CidrError::InvalidCidrSyntax(_) => 1,
            CidrError::InvalidAddressText(_) | CidrError::AddressFamilyMismatch { .. } => 2,
            CidrError::InvalidPrefixLength { .. } | CidrError::TooManyHosts { .. } => 3,
            CidrError::SubnetNotNarrower { .. }
            | CidrError::SubnetPrefixOutOfRange { .. }
            | CidrError::TooManySubnets { .. } => 4,
        }
    }
}
