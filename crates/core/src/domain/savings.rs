use serde::{Deserialize, Serialize};

use crate::series::TimeSeriesPoint;

/// Automation savings metrics reported by the backend.
///
/// Savings amounts and deltas may legitimately be negative: a negative
/// "time saved" is a real regression, not malformed data. Run counts
/// are never negative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSummary {
    pub daily_savings: f64,
    pub weekly_savings: f64,
    pub monthly_savings: f64,
    pub total_savings: f64,
    pub time_saved_hours: f64,
    pub automated_runs: u64,
    pub manual_runs: u64,
    /// Percent change versus the previous window.
    pub savings_delta_pct: f64,
    pub time_saved_delta_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsOverview {
    #[serde(flatten)]
    pub summary: SavingsSummary,
    /// Daily savings amounts, chronological.
    pub history: Vec<TimeSeriesPoint>,
    pub is_mock: bool,
}
