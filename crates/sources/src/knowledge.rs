//! Knowledge graph composite source.
//!
//! Constituents: graph size statistics, the top entities by connection
//! count (centrality weighted by connections), and detected communities.

use pulse_core::domain::knowledge::{CommunityRow, EntityRow, GraphStats, KnowledgeOverview};
use pulse_core::{Config, DataMode, DegradeReason, Provenance, TimeRange};
use pulse_synthetic::knowledge as synthetic;
use pulse_telemetry::aggregate::weighted_mean;
use pulse_telemetry::normalize::{clamp_unit, detect_encoding, to_percent};
use pulse_telemetry::ApiClient;

use crate::resolve::resolve;

const ENTITY_LIMIT: usize = 10;

pub struct KnowledgeSource {
    client: ApiClient,
    mode: DataMode,
}

impl KnowledgeSource {
    pub fn new(config: &Config) -> Self {
        Self::with_mode(ApiClient::new(&config.api), config.data_mode)
    }

    pub fn with_mode(client: ApiClient, mode: DataMode) -> Self {
        Self { client, mode }
    }

    pub async fn fetch_all(&self, range: TimeRange) -> KnowledgeOverview {
        if self.mode.is_forced_synthetic() {
            return assemble(
                synthetic::stats(),
                synthetic::top_entities(ENTITY_LIMIT),
                synthetic::communities(),
                Provenance::Degraded(DegradeReason::Forced),
            );
        }

        let window = range.window().to_string();
        let stats_query = [("timeWindow", window.clone())];
        let entities_query = [("limit", ENTITY_LIMIT.to_string())];
        let (stats, entities, communities) = tokio::join!(
            self.client
                .get_json::<GraphStats>("/api/graph/stats", &stats_query),
            self.client.get_json::<Vec<EntityRow>>(
                "/api/graph/entities/top",
                &entities_query,
            ),
            self.client
                .get_json::<Vec<CommunityRow>>("/api/graph/communities", &[]),
        );

        let (stats, p_stats) = resolve(
            "knowledge.stats",
            stats,
            GraphStats::default,
            synthetic::stats,
        );
        let (entities, p_entities) = resolve("knowledge.entities", entities, Vec::new, || {
            synthetic::top_entities(ENTITY_LIMIT)
        });
        let (communities, p_communities) = resolve(
            "knowledge.communities",
            communities,
            Vec::new,
            synthetic::communities,
        );

        assemble(
            stats,
            entities,
            communities,
            p_stats.merge(p_entities).merge(p_communities),
        )
    }
}

fn assemble(
    stats: GraphStats,
    top_entities: Vec<EntityRow>,
    communities: Vec<CommunityRow>,
    provenance: Provenance,
) -> KnowledgeOverview {
    let encoding = detect_encoding(top_entities.iter().map(|e| e.centrality));

    let avg_centrality = weighted_mean(top_entities.iter().filter_map(|e| {
        e.centrality
            .map(|v| (e.connection_count as f64, to_percent(v, encoding)))
    }));

    KnowledgeOverview {
        node_count: stats.node_count,
        edge_count: stats.edge_count,
        density: clamp_unit(stats.density),
        avg_centrality,
        top_entities,
        communities,
        is_mock: provenance.is_mock(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn entity(connections: u64, centrality: Option<f64>) -> EntityRow {
        EntityRow {
            id: Uuid::new_v4(),
            key: "payments-api".to_string(),
            entity_type: "service".to_string(),
            connection_count: connections,
            centrality,
        }
    }

    #[test]
    fn centrality_weighted_by_connections() {
        let entities = vec![entity(900, Some(80.0)), entity(100, Some(20.0))];
        let overview = assemble(
            GraphStats::default(),
            entities,
            Vec::new(),
            Provenance::Live,
        );
        // (900*80 + 100*20) / 1000 = 74
        assert!((overview.avg_centrality - 74.0).abs() < 1e-9);
    }

    #[test]
    fn density_clamps_to_unit_interval() {
        let stats = GraphStats {
            node_count: 10,
            edge_count: 200,
            density: 1.8,
        };
        let overview = assemble(stats, Vec::new(), Vec::new(), Provenance::Live);
        assert_eq!(overview.density, 1.0);
    }

    #[test]
    fn empty_graph_is_zeroed_and_live() {
        let overview = assemble(
            GraphStats::default(),
            Vec::new(),
            Vec::new(),
            Provenance::Live,
        );
        assert_eq!(overview.node_count, 0);
        assert_eq!(overview.avg_centrality, 0.0);
        assert!(!overview.is_mock);
    }
}
