//! CSV output formatting for summarized blocks.

use crate::models::Network;
use std::io::{self, Write};

use super::terminal::format_field;

/// Column names, in row order.
pub const CSV_HEADER: &str =
    r#" "cnt",               "cidr",        "network",           "last", "addresses", "first_usable",  "last_usable""#;

/// Write `blocks` as CSV with a header row.
pub fn write_csv<W: Write>(out: &mut W, blocks: &[Network]) -> io::Result<()> {
    log::info!("#Start write_csv() block count = {}", blocks.len());
    writeln!(out, "{CSV_HEADER}")?;
    for (i, block) in blocks.iter().enumerate() {
        writeln!(out, "{}", csv_row(i + 1, block))?;
    }
    Ok(())
}

/// A single CSV row; absent usable addresses are written as `none`.
pub fn csv_row(j: usize, block: &Network) -> String {
    let usable = |addr: Option<crate::models::Address>| {
        addr.map(|a| a.to_string())
            .unwrap_or_else(|| "none".to_string())
    };
    format!(
        r#"{j},{cidr},{network},{last},{count},{first_usable},{last_usable}"#,
        j = format_field(j, 6),
        cidr = format_field(block, 20),
        network = format_field(block.base(), 16),
        last = format_field(block.broadcast(), 16),
        count = format_field(block.address_count(), 12),
        first_usable = format_field(usable(block.first_usable()), 16),
        last_usable = format_field(usable(block.last_usable()), 16),
    )
}
