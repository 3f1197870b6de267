//! JSON output rendering.

use crate::models::HostAddresses;
use std::error::Error;

/// Render the resolved pair as pretty-printed JSON.
pub fn render_json(addresses: &HostAddresses) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(addresses)?)
}
