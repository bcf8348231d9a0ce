//! Address block parsing and containment

use ipnetwork::IpNetwork;
use std::net::IpAddr;
use std::str::FromStr;
use tracing::trace;

use crate::{Result, ValidationError};

/// Parse an address block in `address/prefix` form. The prefix is required.
pub fn parse_cidr(cidr: &str) -> Result<IpNetwork> {
    if !cidr.contains('/') {
        return Err(ValidationError::MalformedCidr(cidr.to_string()));
    }
    IpNetwork::from_str(cidr).map_err(|_| ValidationError::MalformedCidr(cidr.to_string()))
}

/// Parse a single IPv4 or IPv6 address
pub fn parse_ip(address: &str) -> Result<IpAddr> {
    IpAddr::from_str(address).map_err(|_| ValidationError::MalformedIp(address.to_string()))
}

pub fn contains(network: &IpNetwork, address: IpAddr) -> bool {
    network.contains(address)
}

/// Whether the base address of `candidate` lies in any of `parents`.
///
/// A malformed candidate is an error. Malformed parents are skipped: they are
/// reported on their own by the vnet CIDR check.
pub fn contained_in_any(candidate: &str, parents: &[String]) -> Result<bool> {
    let candidate = parse_cidr(candidate)?;
    Ok(address_in_any(candidate.network(), parents))
}

/// Whether `address` lies in any of `cidrs`, skipping malformed blocks
pub fn address_in_any(address: IpAddr, cidrs: &[String]) -> bool {
    cidrs
        .iter()
        .filter_map(|cidr| match parse_cidr(cidr) {
            Ok(network) => Some(network),
            Err(_) => {
                trace!("Skipping malformed CIDR {}", cidr);
                None
            }
        })
        .any(|network| contains(&network, address))
}
