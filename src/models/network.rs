//! CIDR network values.
//!
//! A [`Network`] always holds its base address with every host bit cleared, so two
//! networks compare equal exactly when they cover the same range.

use super::address::{derive_mask, end_addr, network_addr, prefix_mask_bits, IpFamily};
use super::count::AddressCount;
use crate::error::CidrError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A network of one address family: base address plus prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Network<A: IpFamily> {
    addr: A,
    prefix_len: u8,
}

impl<A: IpFamily> Network<A> {
    /// Create a network from any address inside it, host bits are cleared.
    pub fn new(addr: A, prefix_len: u8) -> Result<Network<A>, CidrError> {
        let mask = derive_mask(prefix_len)?;
        Ok(Network {
            addr: network_addr(addr, mask),
            prefix_len,
        })
    }

    /// Build from an address that is already a valid base for `prefix_len`.
    pub(crate) fn from_base(addr: A, prefix_len: u8) -> Network<A> {
        debug_assert!(prefix_len <= A::WIDTH);
        debug_assert_eq!(addr.to_bits() & !prefix_mask_bits::<A>(prefix_len), 0);
        Network { addr, prefix_len }
    }

    /// The network (first) address.
    pub fn addr(&self) -> A {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn mask(&self) -> A {
        A::from_bits(prefix_mask_bits::<A>(self.prefix_len))
    }

    /// The end (broadcast) address.
    pub fn end(&self) -> A {
        end_addr(self.addr, self.mask())
    }

    /// Number of host bits.
    pub fn host_bits(&self) -> u8 {
        A::WIDTH - self.prefix_len
    }

    /// Total number of addresses, network and broadcast included.
    pub fn size(&self) -> AddressCount {
        AddressCount::pow2(self.host_bits())
    }

    /// Test whether `host` lies within this network.
    pub fn contains(&self, host: A) -> bool {
        network_addr(host, self.mask()) == self.addr
    }
}

impl<A: IpFamily> fmt::Display for Network<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl<A: IpFamily> Serialize for Network<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A network of either family, as parsed from CIDR text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpNetwork {
    V4(Network<Ipv4Addr>),
    V6(Network<Ipv6Addr>),
}

impl IpNetwork {
    pub fn prefix_len(&self) -> u8 {
        match self {
            IpNetwork::V4(net) => net.prefix_len(),
            IpNetwork::V6(net) => net.prefix_len(),
        }
    }

    /// Address width in bits.
    pub fn width(&self) -> u8 {
        match self {
            IpNetwork::V4(_) => Ipv4Addr::WIDTH,
            IpNetwork::V6(_) => Ipv6Addr::WIDTH,
        }
    }

    /// Family name, "IPv4" or "IPv6".
    pub fn family(&self) -> &'static str {
        match self {
            IpNetwork::V4(_) => Ipv4Addr::NAME,
            IpNetwork::V6(_) => Ipv6Addr::NAME,
        }
    }

    pub fn size(&self) -> AddressCount {
        match self {
            IpNetwork::V4(net) => net.size(),
            IpNetwork::V6(net) => net.size(),
        }
    }
}

impl From<Network<Ipv4Addr>> for IpNetwork {
    fn from(net: Network<Ipv4Addr>) -> Self {
        IpNetwork::V4(net)
    }
}

impl From<Network<Ipv6Addr>> for IpNetwork {
    fn from(net: Network<Ipv6Addr>) -> Self {
        IpNetwork::V6(net)
    }
}

impl fmt::Display for IpNetwork {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpNetwork::V4(net) => write!(f, "{net}"),
            IpNetwork::V6(net) => write!(f, "{net}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clears_host_bits() {
        let net = Network::new(Ipv4Addr::new(192, 168, 0, 1), 28).unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(net.end(), Ipv4Addr::new(192, 168, 0, 15));
        assert_eq!(net.mask(), Ipv4Addr::new(255, 255, 255, 240));
        assert_eq!(net.to_string(), "192.168.0.0/28");
        assert!(Network::new(Ipv4Addr::new(10, 0, 0, 0), 33).is_err());
    }

    #[test]
    fn test_boundaries() {
        let ip = Ipv4Addr::new(10, 1, 2, 3);
        let host = Network::new(ip, 32).unwrap();
        assert_eq!(host.addr(), ip);
        assert_eq!(host.end(), ip);
        assert_eq!(host.size().as_u128(), Some(1));

        let all = Network::new(ip, 0).unwrap();
        assert_eq!(all.addr(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(all.end(), Ipv4Addr::BROADCAST);
        assert_eq!(all.size().as_u128(), Some(1 << 32));

        let all6 = Network::new("2001:db8::1".parse::<Ipv6Addr>().unwrap(), 0).unwrap();
        assert_eq!(all6.end(), Ipv6Addr::from(u128::MAX));
        assert_eq!(all6.size().as_u128(), None);
    }

    #[test]
    fn test_contains() {
        let net = Network::new(Ipv4Addr::new(192, 168, 1, 0), 24).unwrap();
        assert!(net.contains(Ipv4Addr::new(192, 168, 1, 200)));
        assert!(net.contains(Ipv4Addr::new(192, 168, 1, 0)));
        assert!(net.contains(Ipv4Addr::new(192, 168, 1, 255)));
        assert!(!net.contains(Ipv4Addr::new(192, 168, 2, 1)));
        assert!(!net.contains(Ipv4Addr::new(192, 168, 0, 255)));

        let net6 = Network::new("2001:db8::".parse::<Ipv6Addr>().unwrap(), 32).unwrap();
        assert!(net6.contains("2001:db8:ffff::1".parse().unwrap()));
        assert!(!net6.contains("2001:db9::".parse().unwrap()));
    }

    #[test]
    fn test_ordering() {
        let net = |s: &str, len| Network::new(s.parse::<Ipv4Addr>().unwrap(), len).unwrap();
        assert!(net("10.0.0.0", 8) < net("10.0.0.0", 24));
        assert!(net("10.0.0.0", 24) < net("10.0.1.0", 24));
        assert_eq!(net("10.0.0.7", 24), net("10.0.0.0", 24));
    }

    #[test]
    fn test_ip_network_dispatch() {
        let v4: IpNetwork = Network::new(Ipv4Addr::new(10, 0, 0, 0), 30).unwrap().into();
        assert_eq!(v4.family(), "IPv4");
        assert_eq!(v4.width(), 32);
        assert_eq!(v4.prefix_len(), 30);
        assert_eq!(v4.size().as_u128(), Some(4));
        assert_eq!(v4.to_string(), "10.0.0.0/30");

        let v6: IpNetwork = Network::new(Ipv6Addr::LOCALHOST, 128).unwrap().into();
        assert_eq!(v6.family(), "IPv6");
        assert_eq!(v6.width(), 128);
        assert_eq!(v6.to_string(), "::1/128");
    }
}
