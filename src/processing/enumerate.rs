//! Streaming enumeration of every address in a network.

use crate::error::CidrError;
use crate::models::{increment, IpFamily, Network};
use std::iter::FusedIterator;

/// Lazily yields the addresses of a network in ascending order.
#[derive(Debug, Clone)]
pub struct AddressIter<A: IpFamily> {
    next: Option<A>,
    end: A,
}

impl<A: IpFamily> AddressIter<A> {
    /// Number of addresses still to be yielded.
    pub fn remaining(&self) -> u128 {
        match self.next {
            Some(next) => self.end.to_bits() - next.to_bits() + 1,
            None => 0,
        }
    }
}

impl<A: IpFamily> Iterator for AddressIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        let current = self.next?;
        self.next = increment(current).filter(|next| *next <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<A: IpFamily> FusedIterator for AddressIter<A> {}

/// List every address of `network`, from its base address to its end address.
///
/// Networks with more than `2^MAX_ENUMERATION_BITS` addresses are refused with
/// [`CidrError::TooManyHosts`]. IPv4 always qualifies; IPv6 needs a prefix of /64 or longer.
pub fn enumerate<A: IpFamily>(network: &Network<A>) -> Result<AddressIter<A>, CidrError> {
    let bits = network.host_bits();
    if bits > A::MAX_ENUMERATION_BITS {
        log::warn!("Refusing to list {network}: 2^{bits} addresses");
        return Err(CidrError::TooManyHosts {
            prefix: network.prefix_len(),
            bits,
            limit: A::MAX_ENUMERATION_BITS,
        });
    }
    log::debug!(
        "enumerate({network}) {} .. {} ({} addresses)",
        network.addr(),
        network.end(),
        network.size()
    );
    Ok(AddressIter {
        next: Some(network.addr()),
        end: network.end(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_enumerate_ipv4_28() {
        let net: Network<Ipv4Addr> = "192.168.0.1/28".parse().unwrap();
        let addrs: Vec<Ipv4Addr> = enumerate(&net).unwrap().collect();
        assert_eq!(addrs.len(), 16);
        assert_eq!(addrs[0], Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(addrs[15], Ipv4Addr::new(192, 168, 0, 15));
        assert!(addrs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_enumerate_single_host() {
        let net: Network<Ipv4Addr> = "10.9.8.7/32".parse().unwrap();
        let addrs: Vec<Ipv4Addr> = enumerate(&net).unwrap().collect();
        assert_eq!(addrs, vec![Ipv4Addr::new(10, 9, 8, 7)]);

        let net: Network<Ipv6Addr> = "2001:db8::42/128".parse().unwrap();
        assert_eq!(enumerate(&net).unwrap().count(), 1);
    }

    #[test]
    fn test_enumerate_ends_at_top_of_address_space() {
        let net: Network<Ipv4Addr> = "255.255.255.240/28".parse().unwrap();
        let addrs: Vec<Ipv4Addr> = enumerate(&net).unwrap().collect();
        assert_eq!(addrs.len(), 16);
        assert_eq!(addrs.last(), Some(&Ipv4Addr::BROADCAST));

        let net: Network<Ipv6Addr> = "ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffc/126"
            .parse()
            .unwrap();
        assert_eq!(enumerate(&net).unwrap().count(), 4);
    }

    #[test]
    fn test_enumerate_ipv6_126() {
        let net: Network<Ipv6Addr> = "2001:db8::/126".parse().unwrap();
        let addrs: Vec<String> = enumerate(&net).unwrap().map(|a| a.to_string()).collect();
        assert_eq!(
            addrs,
            vec!["2001:db8::", "2001:db8::1", "2001:db8::2", "2001:db8::3"]
        );
    }

    #[test]
    fn test_enumerate_crosses_byte_boundaries() {
        let net: Network<Ipv6Addr> = "2001:db8::ff00/119".parse().unwrap();
        let mut iter = enumerate(&net).unwrap();
        assert_eq!(iter.remaining(), 512);
        let addrs: Vec<Ipv6Addr> = iter.by_ref().skip(255).take(2).collect();
        assert_eq!(addrs[0].to_string(), "2001:db8::feff");
        assert_eq!(addrs[1].to_string(), "2001:db8::ff00");
        assert_eq!(iter.remaining(), 512 - 257);
    }

    #[test]
    fn test_enumerate_size_policy() {
        let net: Network<Ipv4Addr> = "0.0.0.0/0".parse().unwrap();
        let iter = enumerate(&net).unwrap();
        assert_eq!(iter.remaining(), 1 << 32);

        let net: Network<Ipv6Addr> = "2001:db8::/64".parse().unwrap();
        assert_eq!(enumerate(&net).unwrap().remaining(), 1 << 64);

        let net: Network<Ipv6Addr> = "2001:db8::/63".parse().unwrap();
        assert_eq!(
            enumerate(&net).unwrap_err(),
            CidrError::TooManyHosts {
                prefix: 63,
                bits: 65,
                limit: 64
            }
        );
    }

    #[test]
    fn test_enumerate_is_lazy_and_restartable() {
        let net: Network<Ipv4Addr> = "10.0.0.0/8".parse().unwrap();
        let first: Vec<Ipv4Addr> = enumerate(&net).unwrap().take(3).collect();
        let again: Vec<Ipv4Addr> = enumerate(&net).unwrap().take(3).collect();
        assert_eq!(first, again);
        assert_eq!(first[2], Ipv4Addr::new(10, 0, 0, 2));
        assert_eq!(enumerate(&net).unwrap().size_hint(), (1 << 24, Some(1 << 24)));
    }

    #[test]
    fn test_enumerate_is_fused() {
        let net: Network<Ipv4Addr> = "10.0.0.0/31".parse().unwrap();
        let mut iter = enumerate(&net).unwrap();
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.remaining(), 0);
    }
}
