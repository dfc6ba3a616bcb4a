//! Synthetic fallback datasets.
//!
//! Whenever a fetch fails, the composite sources substitute generated
//! data satisfying the same invariants a well-formed API response would:
//! chronologically ordered series with exact point counts, percentage
//! breakdowns summing to ~100, savings tiers that are monotone by
//! construction, unique v4 identifiers. Downstream code never needs to
//! special-case generated versus real shapes; only the provenance flag
//! differs.
//!
//! Generated values are arbitrary; their relationships are not.

pub mod agents;
pub mod architecture;
pub mod events;
pub mod knowledge;
pub mod patterns;
pub mod platform;
pub mod savings;
pub mod support;
