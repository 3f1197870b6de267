//! IPv4-mapped IPv6 address derivation.

/// Fixed expanded prefix of an IPv4-mapped IPv6 address.
const IPV6_MAPPED_PREFIX: &str = "0:0:0:0:0:ffff:";

/// Derive the IPv4-mapped IPv6 address for a dotted-quad IPv4 string.
///
/// Returns `None` unless the input splits into exactly four segments that
/// each parse as an integer in 0..=255. The result is fully expanded, e.g.
/// `192.168.1.1` -> `0:0:0:0:0:ffff:c0a8:0101`.
pub fn get_ipv4_mapped_ipv6_address(ipv4: &str) -> Option<String> {
    let quads: Vec<&str> = ipv4.split('.').collect();
    if quads.len() != 4 {
        return None;
    }
    let mut octets = [0u8; 4];
    for (i, quad) in quads.iter().enumerate() {
        octets[i] = quad.trim().parse().ok()?;
    }

    let mut ipv6_address = String::from(IPV6_MAPPED_PREFIX);
    for (i, octet) in octets.iter().enumerate() {
        let mut hex = format!("{octet:x}");
        // A single hex digit gets a leading zero so every octet contributes
        // an even number of digits to its group.
        if hex.len() % 2 == 1 {
            hex.insert(0, '0');
        }
        ipv6_address.push_str(&hex);
        // Colon between the two 16-bit groups, after the second octet.
        if i == 1 {
            ipv6_address.push(':');
        }
    }
    Some(ipv6_address)
}
