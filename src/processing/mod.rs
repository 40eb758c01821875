//! CIDR processing logic.
//!
//! This module contains the operations run against a parsed network:
//! - `enumerate` - Stream every address of a network
//! - `subnets` - Split a network into smaller subnetworks
//! - `analyze` - Network, end, netmask and address count
//! - `membership` - Test whether a host lies within a network

mod analyze;
mod enumerate;
mod membership;
mod subnets;

// Re-export public functions
pub use analyze::{analyze, Analysis};
pub use enumerate::{enumerate, AddressIter};
pub use membership::{check_host, is_member};
pub use subnets::{enumerate_subnets, SubnetIter};
