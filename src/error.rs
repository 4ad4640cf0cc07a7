//! Error types for address parsing and range calculations.

use thiserror::Error;

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Top level error returned by the calculator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Malformed address, prefix or CIDR text.
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Range endpoints belong to different address families.
    #[error("Address family mismatch: {start} is {start_version}, {end} is {end_version}")]
    Mismatch {
        start: String,
        start_version: &'static str,
        end: String,
        end_version: &'static str,
    },
}

/// Everything that can be wrong with address or CIDR text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("empty address")]
    Empty,

    #[error("IPv4 address '{text}' has {found} octets, expected 4")]
    OctetCount { text: String, found: usize },

    #[error("invalid octet value: {0}")]
    InvalidOctet(String),

    #[error("invalid IPv6 group: {0}")]
    InvalidGroup(String),

    #[error("empty group in IPv6 address '{0}'")]
    EmptyGroup(String),

    #[error("'::' may appear only once in '{0}'")]
    MultipleCompression(String),

    #[error("IPv6 address '{text}' expands to {found} groups, expected 8")]
    GroupCount { text: String, found: usize },

    #[error("missing '/' prefix separator in '{0}'")]
    MissingPrefix(String),

    #[error("invalid prefix length: {0}")]
    InvalidPrefix(String),

    #[error("prefix length {prefix} exceeds {max}")]
    PrefixTooLong { prefix: u32, max: u32 },
}
