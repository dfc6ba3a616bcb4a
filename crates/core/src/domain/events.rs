use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::BreakdownSlice;
use crate::series::TimeSeriesPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    pub id: Uuid,
    pub event_type: String,
    pub source: String,
    #[serde(default)]
    pub severity: EventSeverity,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSeverity {
    #[default]
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsOverview {
    /// Sum over the volume series.
    pub total_events: u64,
    /// Largest single bucket in the volume series.
    pub peak_volume: f64,
    /// Newest first.
    pub recent: Vec<EventRow>,
    /// Events per bucket, chronological.
    pub volume: Vec<TimeSeriesPoint>,
    /// Severity shares, sum to ~100.
    pub breakdown: Vec<BreakdownSlice>,
    pub is_mock: bool,
}
