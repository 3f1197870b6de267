//! Terminal output utilities.
//!
//! Provides formatting helpers and colored rendering of a resolved pair.

use crate::models::HostAddresses;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print the resolved first-host pair for a subnet, one row per family.
pub fn print_first_host(cidr: &str, addresses: &HostAddresses) {
    println!("{} {}", "subnet".bold(), cidr.blue());
    println!(
        "  ipv4 {}",
        format_field(addresses.ipv4.as_deref().unwrap_or("-"), 18).green()
    );
    println!(
        "  ipv6 {}",
        format_field(addresses.ipv6.as_deref().unwrap_or("-"), 28).green()
    );
}
