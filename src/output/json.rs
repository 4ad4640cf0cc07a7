//! JSON output for scripting.

use crate::models::{Address, Network};
use serde::Serialize;

/// A summarized range as written by `summarize --json`.
#[derive(Serialize, Debug)]
pub struct RangeSummary<'a> {
    pub start: Address,
    pub end: Address,
    pub count: usize,
    pub blocks: &'a [Network],
}

/// Pretty-printed JSON for any serializable report.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
