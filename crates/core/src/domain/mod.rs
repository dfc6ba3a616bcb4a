//! Dashboard data model: wire rows as the telemetry backend reports them
//! and the merged overview shapes the presentation layer renders.
//!
//! Overview structs serialize camelCase with a trailing `isMock` flag so
//! the front end never needs to special-case generated data. Wire rows
//! deserialize leniently: optional telemetry fields default rather than
//! failing the whole batch.

pub mod agents;
pub mod architecture;
pub mod events;
pub mod knowledge;
pub mod patterns;
pub mod platform;
pub mod savings;

use serde::{Deserialize, Serialize};

/// One slice of a percentage breakdown (languages, categories,
/// severities). Slices of a well-formed breakdown sum to ~100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownSlice {
    pub label: String,
    pub share_pct: f64,
}

impl BreakdownSlice {
    pub fn new(label: impl Into<String>, share_pct: f64) -> Self {
        Self {
            label: label.into(),
            share_pct,
        }
    }
}
