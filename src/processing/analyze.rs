//! Network analysis: bounds, netmask and address count.

use crate::models::{AddressCount, IpFamily, Network};
use serde::Serialize;

/// Summary of a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis<A: IpFamily> {
    /// First address of the network.
    pub network: A,
    /// Last (broadcast) address of the network.
    pub end: A,
    pub netmask: A,
    pub prefix_len: u8,
    /// Every address in the network, network and broadcast addresses included.
    pub host_count: AddressCount,
}

pub fn analyze<A: IpFamily>(network: &Network<A>) -> Analysis<A> {
    log::debug!("analyze({network})");
    Analysis {
        network: network.addr(),
        end: network.end(),
        netmask: network.mask(),
        prefix_len: network.prefix_len(),
        host_count: network.size(),
    }
}
