use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::series::TimeSeriesPoint;

/// One telemetry row per monitored agent.
///
/// `activity_count` is the aggregation weight; the ratio-like fields
/// arrive in an ambiguous encoding (unit interval or percent) and are
/// normalized before aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRow {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub status: AgentStatus,
    /// Completed runs in the window.
    #[serde(default)]
    pub activity_count: u64,
    #[serde(default)]
    pub success_rate: Option<f64>,
    #[serde(default)]
    pub avg_confidence: Option<f64>,
    #[serde(default)]
    pub avg_latency_ms: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    #[default]
    Idle,
    Error,
}

/// A recent agent failure, newest first in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentErrorRow {
    pub id: Uuid,
    pub agent_name: String,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

/// Merged agents view for the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentsOverview {
    pub total_agents: usize,
    pub active_agents: usize,
    pub total_runs: u64,
    /// Volume-weighted success rate, percent.
    pub success_rate: f64,
    /// `max(0, 100 - success_rate)`.
    pub fallback_rate: f64,
    /// Volume-weighted confidence, percent.
    pub avg_confidence: f64,
    /// Volume-weighted latency, milliseconds.
    pub avg_latency_ms: f64,
    /// Daily run counts, chronological.
    pub activity: Vec<TimeSeriesPoint>,
    /// Newest first.
    pub recent_errors: Vec<AgentErrorRow>,
    pub is_mock: bool,
}
