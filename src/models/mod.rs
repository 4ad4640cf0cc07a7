//! Address and network models.
//!
//! This module contains the core data structures used throughout the calculator:
//! - [`Address`] - IPv4/IPv6 address as a fixed-width integer
//! - [`Network`] - CIDR block with mask, broadcast and usable-range helpers

mod address;
mod network;

// Re-export public types
pub use address::{low_bits, Address, IpVersion};
pub use network::{AddressCount, Network};
