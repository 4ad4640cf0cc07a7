//! Interactive menu loop.
//!
//! Reads choices line by line until option 3 or end of input. Calculation
//! errors are printed and the loop carries on.

use crate::output::{write_banner, write_blocks, write_error, write_network_info};
use crate::processing::{analyze_network, summarize_text};
use colored::Colorize;
use std::io::{self, BufRead, Write};

const INVALID_CHOICE: &str = "Invalid choice. Please choose 1, 2 or 3.";

pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    log::info!("#Start interactive::run()");
    write_banner(out)?;

    loop {
        writeln!(out, "\n{}", "Choose an option:".blue())?;
        writeln!(out, "1. Analyze CIDR notation")?;
        writeln!(out, "2. Find optimal CIDR blocks for a range")?;
        writeln!(out, "3. Exit")?;

        let Some(choice) = prompt(input, out, "\nYour choice (1-3): ")? else {
            break;
        };
        match choice.as_str() {
            "1" => {
                let Some(cidr) = prompt(
                    input,
                    out,
                    "\nEnter CIDR notation (e.g. 192.168.1.0/24 or 2001:db8::/32): ",
                )?
                else {
                    break;
                };
                match analyze_network(&cidr) {
                    Ok(info) => write_network_info(out, &info)?,
                    Err(e) => {
                        log::warn!("analyze '{cidr}' failed: {e}");
                        write_error(out, &e)?;
                    }
                }
            }
            "2" => {
                let Some(start) = prompt(input, out, "\nEnter start IP address: ")? else {
                    break;
                };
                let Some(end) = prompt(input, out, "Enter end IP address: ")? else {
                    break;
                };
                match summarize_text(&start, &end) {
                    Ok(blocks) => write_blocks(out, &blocks, true)?,
                    Err(e) => {
                        log::warn!("summarize '{start}' - '{end}' failed: {e}");
                        write_error(out, &e)?;
                    }
                }
            }
            "3" => {
                writeln!(out, "\n{}", "Goodbye!".magenta())?;
                break;
            }
            _ => write_error(out, &INVALID_CHOICE)?,
        }
    }

    log::info!("#End interactive::run()");
    Ok(())
}

/// Print `text` and read one trimmed line, `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
