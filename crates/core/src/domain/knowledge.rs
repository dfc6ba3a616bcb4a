use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Knowledge graph size statistics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub node_count: u64,
    pub edge_count: u64,
    pub density: f64,
}

/// A high-centrality graph entity; `connection_count` is the weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRow {
    pub id: Uuid,
    pub key: String,
    pub entity_type: String,
    #[serde(default)]
    pub connection_count: u64,
    /// Ambiguous encoding (unit interval or percent).
    #[serde(default)]
    pub centrality: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityRow {
    pub community_id: u64,
    pub label: String,
    pub member_count: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeOverview {
    pub node_count: u64,
    pub edge_count: u64,
    pub density: f64,
    /// Connection-weighted centrality, percent.
    pub avg_centrality: f64,
    pub top_entities: Vec<EntityRow>,
    pub communities: Vec<CommunityRow>,
    pub is_mock: bool,
}
