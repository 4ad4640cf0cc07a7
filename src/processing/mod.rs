//! Calculations built on the address models.
//!
//! This module contains the calculator's operations:
//! - [`analyze`] - Network, broadcast, mask and usable range of one CIDR block
//! - [`summarize`] - Minimal list of CIDR blocks covering an address range

mod analyze;
mod summarize;

// Re-export public functions
pub use analyze::{analyze_network, BinaryView, NetworkInfo, NOT_APPLICABLE};
pub use summarize::{summarize, summarize_range, summarize_text, Blocks};
