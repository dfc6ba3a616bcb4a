use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::BreakdownSlice;
use crate::series::TimeSeriesPoint;

/// One detected behavioral pattern; `occurrence_count` is the weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub occurrence_count: u64,
    /// Ambiguous encoding (unit interval or percent).
    #[serde(default)]
    pub confidence: Option<f64>,
    pub last_seen: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternsOverview {
    pub total_patterns: usize,
    pub total_occurrences: u64,
    /// Occurrence-weighted confidence, percent.
    pub avg_confidence: f64,
    pub top_patterns: Vec<PatternRow>,
    /// Shares sum to ~100.
    pub categories: Vec<BreakdownSlice>,
    /// Detections per bucket, chronological.
    pub trend: Vec<TimeSeriesPoint>,
    pub is_mock: bool,
}
