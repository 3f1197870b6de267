//! Output formatting for resolved host addresses.
//!
//! This module handles formatting and outputting the result pair:
//! - [`json`] - JSON output rendering
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::render_json;
pub use terminal::{format_field, print_first_host};
