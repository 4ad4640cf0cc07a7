//! Command line arguments and dispatch.

use crate::interactive;
use crate::models::Address;
use crate::output::{to_json, write_blocks, write_csv, write_network_info, RangeSummary};
use crate::processing::{analyze_network, summarize};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::{BufRead, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "CIDR calculator for IPv4 and IPv6", long_about = None)]
pub struct Cli {
    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show network, broadcast, mask and usable range of a CIDR block
    Analyze {
        /// e.g. 192.168.1.0/24 or 2001:db8::/32
        cidr: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the fewest CIDR blocks covering START..END inclusive
    Summarize {
        start: String,
        end: String,

        /// Print the blocks as JSON
        #[arg(long, conflicts_with = "csv")]
        json: bool,

        /// Print the blocks as CSV
        #[arg(long)]
        csv: bool,

        /// Show network, broadcast and usable range of every block
        #[arg(short, long)]
        details: bool,
    },
    /// Menu driven session
    Interactive,
}

/// Run the parsed command, reading `input` only for the interactive menu.
pub fn execute<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    log::debug!("execute({:?})", cli.command);

    match &cli.command {
        Some(Commands::Analyze { cidr, json }) => {
            let info = analyze_network(cidr)?;
            if *json {
                writeln!(out, "{}", to_json(&info)?)?;
            } else {
                write_network_info(out, &info)?;
            }
        }
        Some(Commands::Summarize {
            start,
            end,
            json,
            csv,
            details,
        }) => {
            let start = Address::parse(start)?;
            let end = Address::parse(end)?;
            let blocks = summarize(start, end)?;
            if *json {
                let summary = RangeSummary {
                    start,
                    end,
                    count: blocks.len(),
                    blocks: &blocks,
                };
                writeln!(out, "{}", to_json(&summary)?)?;
            } else if *csv {
                write_csv(out, &blocks)?;
            } else {
                write_blocks(out, &blocks, *details)?;
            }
        }
        Some(Commands::Interactive) | None => interactive::run(input, out)?,
    }

    Ok(())
}
