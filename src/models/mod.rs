//! Domain models for first-host resolution.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] - IPv4 subnet with CIDR notation support
//! - [`HostAddresses`] - resolved first-host pair (IPv4 + mapped IPv6)

mod host;
mod ipv4;

// Re-export public types
pub use host::HostAddresses;
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, num_addresses, Ipv4, MAX_LENGTH};
