//! Output formatting for calculator results.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

pub use csv::{csv_row, write_csv, CSV_HEADER};
pub use json::{to_json, RangeSummary};
pub use terminal::{format_field, write_banner, write_blocks, write_error, write_network_info};
