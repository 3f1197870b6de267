//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for representing a subnet in CIDR notation, along with
//! the bit-level helpers used to enumerate its addresses by host offset.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let mask = get_cidr_mask(len)?;
        let addr_bits = u32::from(addr);
        let network_bits = addr_bits & mask;
        let broadcast_bits = network_bits | (!mask);
        Ok(Ipv4Addr::from(broadcast_bits))
    }
}

/// Total number of enumerable addresses in a subnet, network and broadcast
/// included. A /32 counts 1, a /31 counts 2.
pub fn num_addresses(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// An IPv4 subnet in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    pub addr: Ipv4Addr,
    pub mask: u8,
}
impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}
impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(de::Error::custom(format!("invalid CIDR format: {s}")));
        }

        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| de::Error::custom(format!("invalid IP address: {}", parts[0])))?;
        let mask = u8::from_str(parts[1])
            .map_err(|_| de::Error::custom(format!("invalid subnet mask: {}", parts[1])))?;

        Ok(Ipv4 { addr, mask })
    }
}
impl Ipv4 {
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid address/mask: {addr_cidr}").into());
        }
        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| format!("Invalid address: {}", parts[0]))?;
        let mask: u8 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid subnet mask: {}", parts[1]))?;
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 { addr, mask })
    }
    /// Network address of the subnet (host offset 0).
    pub fn network(&self) -> Result<Ipv4Addr, Box<dyn Error>> {
        cut_addr(self.addr, self.mask)
    }
    /// Enumerate up to `limit` addresses starting at host offset `from`,
    /// where offset 0 is the network address.
    ///
    /// Enumeration is clamped to the subnet, so a `from` past the last
    /// address yields an empty vec rather than an error.
    pub fn addresses(&self, from: u64, limit: u64) -> Result<Vec<Ipv4Addr>, Box<dyn Error>> {
        let total = num_addresses(self.mask)?;
        let network = u32::from(self.network()?) as u64;
        let end = total.min(from.saturating_add(limit));

        let mut addrs = Vec::new();
        let mut offset = from;
        while offset < end {
            addrs.push(Ipv4Addr::from((network + offset) as u32));
            offset += 1;
        }
        Ok(addrs)
    }
}
impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);

        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));

        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );

        assert!(broadcast_addr(ip, 33).is_err());
    }

    #[test]
    fn test_num_addresses() {
        assert_eq!(num_addresses(32).unwrap(), 1);
        assert_eq!(num_addresses(31).unwrap(), 2);
        assert_eq!(num_addresses(24).unwrap(), 256);
        assert_eq!(num_addresses(0).unwrap(), 4294967296);

        assert!(num_addresses(33).is_err());
    }

    #[test]
    fn test_new_valid() {
        let ip = Ipv4::new("192.168.1.0/24").unwrap();
        assert_eq!(ip.addr, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(ip.mask, 24);
        assert_eq!(ip.to_string(), "192.168.1.0/24");

        // leading/trailing whitespace is tolerated
        assert!(Ipv4::new(" 10.0.0.0/8 ").is_ok());
    }

    #[test]
    fn test_new_invalid() {
        assert!(Ipv4::new("not-a-cidr").is_err());
        assert!(Ipv4::new("192.168.1.0").is_err());
        assert!(Ipv4::new("192.168.1.0/24/7").is_err());
        assert!(Ipv4::new("192.168.1.300/24").is_err());
        assert!(Ipv4::new("192.168.1.0/33").is_err());
        assert!(Ipv4::new("192.168.1.0/ab").is_err());
    }

    #[test]
    fn test_addresses_offsets() {
        let net = Ipv4::new("192.168.1.0/24").unwrap();
        assert_eq!(
            net.addresses(1, 1).unwrap(),
            vec![Ipv4Addr::new(192, 168, 1, 1)]
        );
        assert_eq!(
            net.addresses(0, 3).unwrap(),
            vec![
                Ipv4Addr::new(192, 168, 1, 0),
                Ipv4Addr::new(192, 168, 1, 1),
                Ipv4Addr::new(192, 168, 1, 2),
            ]
        );
        // clamped at the end of the subnet
        assert_eq!(
            net.addresses(255, 10).unwrap(),
            vec![Ipv4Addr::new(192, 168, 1, 255)]
        );
        assert_eq!(net.addresses(256, 1).unwrap(), Vec::<Ipv4Addr>::new());
    }

    #[test]
    fn test_addresses_masks_host_bits() {
        // host bits in the address are ignored, enumeration starts at the
        // network address
        let net = Ipv4::new("10.0.0.5/24").unwrap();
        assert_eq!(
            net.addresses(1, 1).unwrap(),
            vec![Ipv4Addr::new(10, 0, 0, 1)]
        );
    }

    #[test]
    fn test_addresses_small_subnets() {
        let net31 = Ipv4::new("10.0.0.0/31").unwrap();
        assert_eq!(
            net31.addresses(1, 1).unwrap(),
            vec![Ipv4Addr::new(10, 0, 0, 1)]
        );

        let net32 = Ipv4::new("10.0.0.7/32").unwrap();
        assert_eq!(net32.addresses(0, 1).unwrap(), vec![Ipv4Addr::new(10, 0, 0, 7)]);
        assert_eq!(net32.addresses(1, 1).unwrap(), Vec::<Ipv4Addr>::new());
    }

    #[test]
    fn test_serde_cidr_string() {
        let ip = Ipv4::new("10.18.126.0/24").unwrap();
        let json = serde_json::to_string(&ip).unwrap();
        assert_eq!(json, "\"10.18.126.0/24\"");

        let back: Ipv4 = serde_json::from_str("\"172.16.0.0/12\"").unwrap();
        assert_eq!(back, Ipv4::new("172.16.0.0/12").unwrap());
        assert!(serde_json::from_str::<Ipv4>("\"172.16.0.0\"").is_err());
    }

    #[test]
    fn test_ip4_cmp() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 >= ip3);
    }
}
