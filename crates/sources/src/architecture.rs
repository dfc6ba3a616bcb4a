//! Architecture composite source.
//!
//! Constituents: component health rows (coverage weighted by dependent
//! count), the language breakdown, and churn hotspots.

use pulse_core::domain::architecture::{
    ArchitectureOverview, ComponentHealth, ComponentRow, HotspotRow,
};
use pulse_core::domain::BreakdownSlice;
use pulse_core::{Config, DataMode, DegradeReason, Provenance, TimeRange};
use pulse_synthetic::architecture as synthetic;
use pulse_telemetry::aggregate::weighted_mean;
use pulse_telemetry::normalize::{detect_encoding, to_percent};
use pulse_telemetry::ApiClient;

use crate::resolve::resolve;

const HOTSPOT_LIMIT: usize = 6;

pub struct ArchitectureSource {
    client: ApiClient,
    mode: DataMode,
}

impl ArchitectureSource {
    pub fn new(config: &Config) -> Self {
        Self::with_mode(ApiClient::new(&config.api), config.data_mode)
    }

    pub fn with_mode(client: ApiClient, mode: DataMode) -> Self {
        Self { client, mode }
    }

    pub async fn fetch_all(&self, range: TimeRange) -> ArchitectureOverview {
        if self.mode.is_forced_synthetic() {
            return assemble(
                synthetic::components(),
                synthetic::languages(),
                synthetic::hotspots(HOTSPOT_LIMIT),
                Provenance::Degraded(DegradeReason::Forced),
            );
        }

        let window = range.window().to_string();
        let hotspots_query = [
            ("timeWindow", window.clone()),
            ("limit", HOTSPOT_LIMIT.to_string()),
        ];
        let (components, languages, hotspots) = tokio::join!(
            self.client
                .get_json::<Vec<ComponentRow>>("/api/architecture/components", &[]),
            self.client
                .get_json::<Vec<BreakdownSlice>>("/api/architecture/languages", &[]),
            self.client.get_json::<Vec<HotspotRow>>(
                "/api/architecture/hotspots",
                &hotspots_query,
            ),
        );

        let (components, p_components) = resolve(
            "architecture.components",
            components,
            Vec::new,
            synthetic::components,
        );
        let (languages, p_languages) = resolve(
            "architecture.languages",
            languages,
            Vec::new,
            synthetic::languages,
        );
        let (hotspots, p_hotspots) = resolve("architecture.hotspots", hotspots, Vec::new, || {
            synthetic::hotspots(HOTSPOT_LIMIT)
        });

        assemble(
            components,
            languages,
            hotspots,
            p_components.merge(p_languages).merge(p_hotspots),
        )
    }
}

fn assemble(
    components: Vec<ComponentRow>,
    languages: Vec<BreakdownSlice>,
    hotspots: Vec<HotspotRow>,
    provenance: Provenance,
) -> ArchitectureOverview {
    let encoding = detect_encoding(components.iter().map(|c| c.coverage_pct));

    let coverage_pct = weighted_mean(components.iter().filter_map(|c| {
        c.coverage_pct
            .map(|v| (c.dependent_count as f64, to_percent(v, encoding)))
    }));

    ArchitectureOverview {
        total_components: components.len(),
        healthy_components: components
            .iter()
            .filter(|c| c.health == ComponentHealth::Healthy)
            .count(),
        coverage_pct,
        languages,
        hotspots,
        is_mock: provenance.is_mock(),
    }
}
