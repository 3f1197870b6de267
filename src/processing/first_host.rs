//! First-usable-host resolution for an IPv4 CIDR subnet.

use crate::models::{HostAddresses, Ipv4};
use crate::processing::get_ipv4_mapped_ipv6_address;
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;

lazy_static! {
    // Shape gate only; numeric ranges are checked by the Ipv4 parser.
    static ref CIDR_RE: Regex =
        Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}/\d{1,2}$").expect("Invalid Regex?");
}

/// Narrow view of a CIDR address range.
///
/// This is the seam between the resolver and the subnet model, so tests can
/// substitute a canned range for the real [`Ipv4`]-backed one.
pub trait CidrRange {
    /// Whether the range was constructed from a valid CIDR string.
    fn is_valid(&self) -> bool;
    /// Up to `limit` addresses starting at host offset `from`, where
    /// offset 0 is the network address.
    fn addresses(&self, from: u64, limit: u64) -> Vec<String>;
}

/// Production [`CidrRange`] backed by [`Ipv4`].
pub struct SubnetRange {
    subnet: Option<Ipv4>,
}

impl SubnetRange {
    /// Parse a CIDR string. Parse failures are held as an invalid range
    /// rather than returned, so callers probe with [`CidrRange::is_valid`].
    pub fn new(cidr: &str) -> SubnetRange {
        let cidr = cidr.trim();
        if !CIDR_RE.is_match(cidr) {
            log::debug!("CIDR shape check failed for {cidr:?}");
            return SubnetRange { subnet: None };
        }
        let subnet = match Ipv4::new(cidr) {
            Ok(subnet) => Some(subnet),
            Err(e) => {
                log::debug!("CIDR parse failed for {cidr:?}: {e}");
                None
            }
        };
        SubnetRange { subnet }
    }
}

impl CidrRange for SubnetRange {
    fn is_valid(&self) -> bool {
        self.subnet.is_some()
    }

    fn addresses(&self, from: u64, limit: u64) -> Vec<String> {
        match self.subnet {
            Some(subnet) => subnet
                .addresses(from, limit)
                .unwrap_or_default()
                .iter()
                .map(|addr| addr.to_string())
                .collect(),
            None => vec![],
        }
    }
}

/// Resolve the first usable host of `range` in both address families.
///
/// The first usable host is the address at offset 1, skipping the network
/// address at offset 0. A /31 resolves to its second address; a /32 has no
/// offset-1 address and yields an explicit error.
pub fn first_host(range: &impl CidrRange) -> Result<HostAddresses, Box<dyn Error>> {
    if !range.is_valid() {
        log::warn!("Invalid CIDR passed to getFirstIpAddress");
        return Err("Invalid CIDR passed to getFirstIpAddress".into());
    }

    let mut hosts = range.addresses(1, 1);
    if hosts.is_empty() {
        return Err("No usable host address in subnet".into());
    }
    let ipv4 = hosts.remove(0);
    let ipv6 = get_ipv4_mapped_ipv6_address(&ipv4);
    log::debug!("first host ipv4={ipv4} ipv6={ipv6:?}");

    Ok(HostAddresses {
        ipv4: Some(ipv4),
        ipv6,
    })
}
