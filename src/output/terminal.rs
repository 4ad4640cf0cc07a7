//! Terminal output with colors.
//!
//! Writers take any [`Write`] so the interactive loop and tests can capture output.

use crate::models::Network;
use crate::processing::{NetworkInfo, NOT_APPLICABLE};
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

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

fn or_na<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let lines = [
        "╔═════════════════════════════════════════════════╗",
        "║                 CIDR CALCULATOR                 ║",
        "║                  IPv4 and IPv6                  ║",
        "╚═════════════════════════════════════════════════╝",
    ];
    for line in lines {
        writeln!(out, "{}", line.magenta())?;
    }
    Ok(())
}

/// Print every field of a [`NetworkInfo`] as `key: value` lines.
pub fn write_network_info<W: Write>(out: &mut W, info: &NetworkInfo) -> io::Result<()> {
    writeln!(out, "\n{}", "Network information:".green())?;
    writeln!(out, "{}", "-".repeat(40))?;
    for (key, value) in info.entries() {
        writeln!(out, "{} {value}", format!("{key}:").cyan())?;
    }
    Ok(())
}

/// Print summarized blocks, one per line, or with per-block details.
pub fn write_blocks<W: Write>(out: &mut W, blocks: &[Network], details: bool) -> io::Result<()> {
    writeln!(out, "\n{}", "Optimal CIDR blocks:".green())?;
    writeln!(out, "{}", "-".repeat(40))?;
    if !details {
        for block in blocks {
            writeln!(out, "{block}")?;
        }
        return Ok(());
    }

    for (i, block) in blocks.iter().enumerate() {
        writeln!(out, "\n{}", format!("Block {}:", i + 1).cyan())?;
        writeln!(out, "CIDR: {block}")?;
        writeln!(out, "Network address: {}", block.base())?;
        writeln!(out, "Broadcast address: {}", block.broadcast())?;
        writeln!(out, "Address count: {}", block.address_count())?;
        writeln!(out, "First usable: {}", or_na(block.first_usable()))?;
        writeln!(out, "Last usable: {}", or_na(block.last_usable()))?;
    }
    Ok(())
}

pub fn write_error<W: Write>(out: &mut W, err: &dyn Display) -> io::Result<()> {
    writeln!(out, "\n{}", format!("Error: {err}").red())
}
