//! Address computation logic.
//!
//! This module contains the two pure computations of the crate:
//! - [`first_host`] - resolve the first usable host of a CIDR subnet
//! - [`get_ipv4_mapped_ipv6_address`] - IPv4-mapped IPv6 derivation

mod first_host;
mod ipv6_map;

// Re-export public functions
pub use first_host::{first_host, CidrRange, SubnetRange};
pub use ipv6_map::get_ipv4_mapped_ipv6_address;
