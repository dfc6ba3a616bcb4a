use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use pulse_core::domain::knowledge::{CommunityRow, EntityRow, GraphStats};

const ENTITY_TYPES: &[&str] = &["service", "agent", "dataset", "person", "ticket"];

const ENTITY_KEYS: &[&str] = &[
    "payments-api",
    "triage-bot",
    "billing-events",
    "oncall-rotation",
    "INC-4411",
    "checkout-flow",
    "usage-ledger",
    "deploy-pipeline",
    "customer-graph",
    "audit-log",
];

const COMMUNITY_LABELS: &[&str] = &[
    "billing & payments",
    "deployment tooling",
    "support workflows",
    "data ingestion",
    "observability",
];

pub fn stats() -> GraphStats {
    let mut rng = rand::thread_rng();
    let node_count = rng.gen_range(2_000..60_000);
    // Sparse graph: a few edges per node.
    let edge_count = node_count * rng.gen_range(2..6);
    let density = edge_count as f64 / (node_count as f64 * (node_count as f64 - 1.0));
    GraphStats {
        node_count,
        edge_count,
        density,
    }
}

/// Highest-connectivity entities, descending by connection count.
pub fn top_entities(limit: usize) -> Vec<EntityRow> {
    let mut rng = rand::thread_rng();
    let mut rows: Vec<EntityRow> = ENTITY_KEYS
        .iter()
        .take(limit)
        .map(|key| EntityRow {
            id: Uuid::new_v4(),
            key: (*key).to_string(),
            entity_type: (*ENTITY_TYPES.choose(&mut rng).unwrap_or(&ENTITY_TYPES[0])).to_string(),
            connection_count: rng.gen_range(5..900),
            centrality: Some(rng.gen_range(10.0..95.0)),
        })
        .collect();
    rows.sort_by(|a, b| b.connection_count.cmp(&a.connection_count));
    rows
}

pub fn communities() -> Vec<CommunityRow> {
    let mut rng = rand::thread_rng();
    COMMUNITY_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| CommunityRow {
            community_id: i as u64,
            label: (*label).to_string(),
            member_count: rng.gen_range(20..2_500),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_are_internally_consistent() {
        for _ in 0..50 {
            let s = stats();
            assert!(s.edge_count >= s.node_count);
            assert!(s.density > 0.0 && s.density < 1.0);
        }
    }

    #[test]
    fn top_entities_sorted_by_connections() {
        let rows = top_entities(10);
        assert_eq!(rows.len(), 10);
        assert!(rows.windows(2).all(|w| w[0].connection_count >= w[1].connection_count));
    }

    #[test]
    fn communities_have_unique_ids() {
        let rows = communities();
        let mut ids: Vec<u64> = rows.iter().map(|c| c.community_id).collect();
        ids.dedup();
        assert_eq!(ids.len(), rows.len());
    }
}
