//! Result pair for a first-host lookup.

use serde::{Deserialize, Serialize};

/// The first usable host of a subnet, in both address families.
///
/// Both fields are populated on a successful lookup (ipv6 stays `None` only
/// if the mapped form could not be derived). Validation failures never
/// produce a partially filled pair; they surface as errors instead.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct HostAddresses {
    /// Dotted-quad IPv4 form of the first usable host.
    pub ipv4: Option<String>,
    /// IPv4-mapped IPv6 form, expanded (`0:0:0:0:0:ffff:xxxx:xxxx`).
    pub ipv6: Option<String>,
}
