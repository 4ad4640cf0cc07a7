//! CIDR calculator for IPv4 and IPv6.
//!
//! - [`models`] - addresses and CIDR blocks as fixed-width integers
//! - [`processing`] - single block analysis and minimal range summarization
//! - [`output`], [`interactive`], [`cli`] - the command line shell around them

pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CalcError, FormatError, Result};
pub use processing::{analyze_network, summarize_range, NetworkInfo};
