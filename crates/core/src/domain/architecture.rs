use serde::{Deserialize, Serialize};

use crate::domain::BreakdownSlice;

/// One architectural component; `dependent_count` is the weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRow {
    pub name: String,
    #[serde(default)]
    pub health: ComponentHealth,
    /// Components that depend on this one.
    #[serde(default)]
    pub dependent_count: u64,
    /// Ambiguous encoding (unit interval or percent).
    #[serde(default)]
    pub coverage_pct: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentHealth {
    #[default]
    Healthy,
    Warning,
    Critical,
}

/// A high-churn file flagged for review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotRow {
    pub path: String,
    pub churn_count: u64,
    pub complexity: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureOverview {
    pub total_components: usize,
    pub healthy_components: usize,
    /// Dependent-weighted test coverage, percent.
    pub coverage_pct: f64,
    /// Language shares, sum to ~100.
    pub languages: Vec<BreakdownSlice>,
    pub hotspots: Vec<HotspotRow>,
    pub is_mock: bool,
}
