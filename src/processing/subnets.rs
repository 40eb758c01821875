//! Splitting a network into equal, smaller subnetworks.

use crate::error::CidrError;
use crate::models::{increment_by_pow2, IpFamily, Network};
use std::iter::FusedIterator;

/// Lazily yields the subnetworks of a split in ascending order.
#[derive(Debug, Clone)]
pub struct SubnetIter<A: IpFamily> {
    next: Option<A>,
    last: A,
    prefix_len: u8,
}

impl<A: IpFamily> SubnetIter<A> {
    /// Prefix length of the yielded subnetworks.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Number of subnetworks still to be yielded.
    pub fn remaining(&self) -> u128 {
        match self.next {
            Some(next) => {
                let step_bits = A::WIDTH - self.prefix_len;
                ((self.last.to_bits() - next.to_bits()) >> step_bits) + 1
            }
            None => 0,
        }
    }
}

impl<A: IpFamily> Iterator for SubnetIter<A> {
    type Item = Network<A>;

    fn next(&mut self) -> Option<Network<A>> {
        let current = self.next?;
        // Only the subnet-id bits move, host bits stay zero.
        self.next = increment_by_pow2(current, A::WIDTH - self.prefix_len)
            .filter(|next| *next <= self.last);
        Some(Network::from_base(current, self.prefix_len))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<A: IpFamily> FusedIterator for SubnetIter<A> {}

/// Split `network` into the `2^(subnet_prefix - prefix_len)` subnetworks of length `subnet_prefix`.
///
/// # Errors
/// * [`CidrError::SubnetPrefixOutOfRange`] - `subnet_prefix` is longer than the address width
/// * [`CidrError::SubnetNotNarrower`] - `subnet_prefix` is not longer than the network prefix
/// * [`CidrError::TooManySubnets`] - the split spans more than `MAX_ENUMERATION_BITS` bits
pub fn enumerate_subnets<A: IpFamily>(
    network: &Network<A>,
    subnet_prefix: u8,
) -> Result<SubnetIter<A>, CidrError> {
    if subnet_prefix > A::WIDTH {
        return Err(CidrError::SubnetPrefixOutOfRange {
            subnet: u32::from(subnet_prefix),
            width: A::WIDTH,
        });
    }
    if subnet_prefix <= network.prefix_len() {
        return Err(CidrError::SubnetNotNarrower {
            subnet: subnet_prefix,
            prefix: network.prefix_len(),
        });
    }
    let bits = subnet_prefix - network.prefix_len();
    if bits > A::MAX_ENUMERATION_BITS {
        log::warn!("Refusing to split {network} into /{subnet_prefix}: 2^{bits} subnets");
        return Err(CidrError::TooManySubnets {
            prefix: network.prefix_len(),
            subnet: subnet_prefix,
            bits,
            limit: A::MAX_ENUMERATION_BITS,
        });
    }

    let first = Network::new(network.addr(), subnet_prefix)?;
    let last = Network::new(network.end(), subnet_prefix)?;
    log::debug!(
        "enumerate_subnets({network}, /{subnet_prefix}) {first} .. {last} (2^{bits} subnets)"
    );
    Ok(SubnetIter {
        next: Some(first.addr()),
        last: last.addr(),
        prefix_len: subnet_prefix,
    })
}
