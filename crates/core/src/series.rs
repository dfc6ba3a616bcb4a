use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One bucket of a metric time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    pub period: DateTime<Utc>,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(period: DateTime<Utc>, value: f64) -> Self {
        Self { period, value }
    }
}

/// True when periods are non-decreasing (oldest first).
pub fn is_chronological(points: &[TimeSeriesPoint]) -> bool {
    points.windows(2).all(|w| w[0].period <= w[1].period)
}

/// True when periods are non-increasing (newest first).
pub fn is_reverse_chronological(points: &[TimeSeriesPoint]) -> bool {
    points.windows(2).all(|w| w[0].period >= w[1].period)
}
