//! Host membership tests.

use crate::error::CidrError;
use crate::models::{parse_host, IpFamily, Network};

/// Test whether `host` lies within `network`.
pub fn is_member<A: IpFamily>(network: &Network<A>, host: A) -> bool {
    let member = network.contains(host);
    log::debug!("is_member({network}, {host}) = {member}");
    member
}

/// Parse `host` in the family of `network` and test membership.
///
/// # Returns
/// * `Ok((host, member))` - the parsed host and whether it is within `network`
/// * `Err` - the text is not an address of the network's family
pub fn check_host<A: IpFamily>(
    network: &Network<A>,
    host: &str,
) -> Result<(A, bool), CidrError> {
    let host = parse_host::<A>(host)?;
    Ok((host, is_member(network, host)))
}
