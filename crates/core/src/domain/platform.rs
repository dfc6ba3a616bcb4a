use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-service health row; `request_count` is the aggregation weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRow {
    pub name: String,
    #[serde(default)]
    pub status: ServiceStatus,
    #[serde(default)]
    pub request_count: u64,
    /// Ambiguous encoding (unit interval or percent).
    #[serde(default)]
    pub uptime_pct: Option<f64>,
    #[serde(default)]
    pub avg_latency_ms: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    #[default]
    Healthy,
    Degraded,
    Down,
}

/// Cluster resource utilization, all percent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsage {
    pub cpu_pct: f64,
    pub memory_pct: f64,
    pub disk_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRow {
    pub id: Uuid,
    pub service: String,
    pub severity: IncidentSeverity,
    pub message: String,
    pub opened_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentSeverity {
    Minor,
    Major,
    Critical,
}

/// Merged platform health view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformOverview {
    pub total_services: usize,
    pub healthy_services: usize,
    pub total_requests: u64,
    /// Request-volume-weighted uptime, percent.
    pub uptime_pct: f64,
    /// `max(0, 100 - uptime_pct)`.
    pub error_rate: f64,
    /// Request-volume-weighted latency, milliseconds.
    pub avg_latency_ms: f64,
    pub resources: ResourceUsage,
    /// An empty list is a real "no incidents", not missing data.
    pub open_incidents: Vec<IncidentRow>,
    pub is_mock: bool,
}
