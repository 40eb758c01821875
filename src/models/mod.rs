//! Domain models for CIDR calculations.
//!
//! This module contains the core data structures and address arithmetic:
//! - [`IpFamily`] - IPv4/IPv6 as fixed-width unsigned integers
//! - [`Network`] and [`IpNetwork`] - CIDR networks
//! - [`AddressCount`] - exact power-of-two address counts

mod address;
mod count;
mod network;
mod parse;

// Re-export public types
pub use address::{derive_mask, end_addr, increment, increment_by_pow2, network_addr, IpFamily};
pub use count::AddressCount;
pub use network::{IpNetwork, Network};
pub use parse::{parse_address, parse_cidr_text, parse_host, parse_prefix_len};
