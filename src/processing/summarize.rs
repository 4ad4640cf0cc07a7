//! Minimal CIDR cover of an address range.
//!
//! Splits an inclusive range `[start, end]` into the fewest prefix-aligned
//! blocks by always taking the biggest block that both starts on `current`
//! and stays inside the range.

use crate::error::{CalcError, Result};
use crate::models::{Address, Network};

/// Iterator over the CIDR blocks covering a range, in ascending order.
///
/// # Examples
/// ```
/// use cidr_calculator::models::Address;
/// use cidr_calculator::processing::Blocks;
/// let start = Address::parse("10.0.0.1").unwrap();
/// let end = Address::parse("10.0.0.7").unwrap();
/// let blocks: Vec<String> = Blocks::new(start, end).unwrap().map(|b| b.to_string()).collect();
/// assert_eq!(blocks, ["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/30"]);
/// ```
#[derive(Debug, Clone)]
pub struct Blocks {
    next: Option<Address>,
    end: Address,
}

impl Blocks {
    /// Cover the addresses between `start` and `end` inclusive, in either order.
    pub fn new(start: Address, end: Address) -> Result<Blocks> {
        if start.version() != end.version() {
            return Err(CalcError::Mismatch {
                start: start.to_string(),
                start_version: start.version().name(),
                end: end.to_string(),
                end_version: end.version().name(),
            });
        }
        let (start, end) = if start > end {
            log::debug!("Swapping range ends {start} > {end}");
            (end, start)
        } else {
            (start, end)
        };
        Ok(Blocks {
            next: Some(start),
            end,
        })
    }
}

impl Iterator for Blocks {
    type Item = Network;

    fn next(&mut self) -> Option<Network> {
        let current = self.next?;
        let host_bits = biggest_block_bits(current, self.end);
        let last = current.with_low_bits_set(host_bits);

        // Done once the block reaches `end`, which includes the top of the address space.
        self.next = last.increment().filter(|next| *next <= self.end);

        let block = Network::from_aligned(current, (current.bits() - host_bits) as u8);
        log::trace!("block {block} last={last}");
        Some(block)
    }
}

/// Host bits of the biggest block at `current` that does not pass `end`.
///
/// The block is limited by:
/// 1. alignment - `current` must be a network address, so at most its trailing zeros
/// 2. containment - `2^k` addresses starting at `current` must not pass `end`
fn biggest_block_bits(current: Address, end: Address) -> u32 {
    let alignment = current.trailing_zeros();

    let span = end.value() - current.value();
    // Largest k with 2^k <= span + 1; span + 1 only overflows for the whole IPv6 space.
    let containment = match span.checked_add(1) {
        Some(len) => u128::BITS - 1 - len.leading_zeros(),
        None => u128::BITS,
    };

    alignment.min(containment)
}

/// Blocks covering `[start, end]`, swapped first if `start > end`.
pub fn summarize(start: Address, end: Address) -> Result<Vec<Network>> {
    let blocks: Vec<Network> = Blocks::new(start, end)?.collect();
    log::debug!("summarize({start}, {end}) -> {} block(s)", blocks.len());
    Ok(blocks)
}

/// Text entry point: parse both ends and return CIDR strings in ascending order.
///
/// # Examples
/// ```
/// use cidr_calculator::summarize_range;
/// assert_eq!(summarize_range("10.0.0.0", "10.0.0.7").unwrap(), ["10.0.0.0/29"]);
/// ```
pub fn summarize_range(start_text: &str, end_text: &str) -> Result<Vec<String>> {
    Ok(summarize_text(start_text, end_text)?
        .iter()
        .map(|block| block.to_string())
        .collect())
}

/// Parse both ends and return the covering blocks.
pub fn summarize_text(start_text: &str, end_text: &str) -> Result<Vec<Network>> {
    let start = Address::parse(start_text)?;
    let end = Address::parse(end_text)?;
    summarize(start, end)
}
