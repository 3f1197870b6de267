// cargo watch -x 'fmt' -x 'run -- 192.168.1.0/24'

pub mod models;
pub mod output;
pub mod processing;

use std::error::Error;

pub use models::{HostAddresses, Ipv4};
pub use processing::{first_host, get_ipv4_mapped_ipv6_address, CidrRange, SubnetRange};

/// Resolve the first usable host of a CIDR subnet, in dotted-quad IPv4 and
/// IPv4-mapped IPv6 form.
///
/// The network address (host offset 0) is skipped; the address at offset 1
/// is returned. Invalid CIDR input and subnets with no offset-1 address
/// (/32) produce an error, never a partial pair.
pub fn get_first_ip_address(cidr: &str) -> Result<HostAddresses, Box<dyn Error>> {
    let range = SubnetRange::new(cidr);
    first_host(&range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_first_ip_address() {
        let pair = get_first_ip_address("10.0.0.0/30").unwrap();
        assert_eq!(pair.ipv4.as_deref(), Some("10.0.0.1"));
        assert_eq!(pair.ipv6.as_deref(), Some("0:0:0:0:0:ffff:0a00:0001"));
    }

    #[test]
    fn test_get_first_ip_address_invalid() {
        let err = get_first_ip_address("not-a-cidr").unwrap_err();
        assert_eq!(err.to_string(), "Invalid CIDR passed to getFirstIpAddress");
    }
}
