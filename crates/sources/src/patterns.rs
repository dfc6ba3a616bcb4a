//! Detected-pattern composite source.
//!
//! Constituents: the detected pattern list (confidence weighted by
//! occurrence count), the category breakdown, and the detection trend
//! series (chronological).

use pulse_core::domain::patterns::{PatternRow, PatternsOverview};
use pulse_core::domain::BreakdownSlice;
use pulse_core::{Config, DataMode, DegradeReason, Provenance, TimeRange, TimeSeriesPoint};
use pulse_synthetic::patterns as synthetic;
use pulse_telemetry::aggregate::weighted_mean;
use pulse_telemetry::normalize::{detect_encoding, to_percent};
use pulse_telemetry::ApiClient;

use crate::resolve::resolve;

const PATTERN_LIMIT: usize = 8;

pub struct PatternSource {
    client: ApiClient,
    mode: DataMode,
}

impl PatternSource {
    pub fn new(config: &Config) -> Self {
        Self::with_mode(ApiClient::new(&config.api), config.data_mode)
    }

    pub fn with_mode(client: ApiClient, mode: DataMode) -> Self {
        Self { client, mode }
    }

    pub async fn fetch_all(&self, range: TimeRange) -> PatternsOverview {
        if self.mode.is_forced_synthetic() {
            return assemble(
                synthetic::detected(PATTERN_LIMIT),
                synthetic::categories(),
                synthetic::trend(range),
                Provenance::Degraded(DegradeReason::Forced),
            );
        }

        let window = range.window().to_string();
        let detected_query = [
            ("timeWindow", window.clone()),
            ("limit", PATTERN_LIMIT.to_string()),
        ];
        let trend_query = [("timeRange", window.clone())];
        let (detected, categories, trend) = tokio::join!(
            self.client.get_json::<Vec<PatternRow>>(
                "/api/patterns",
                &detected_query,
            ),
            self.client
                .get_json::<Vec<BreakdownSlice>>("/api/patterns/categories", &[]),
            self.client.get_json::<Vec<TimeSeriesPoint>>(
                "/api/patterns/trend",
                &trend_query,
            ),
        );

        let (detected, p_detected) = resolve("patterns.detected", detected, Vec::new, || {
            synthetic::detected(PATTERN_LIMIT)
        });
        let (categories, p_categories) = resolve(
            "patterns.categories",
            categories,
            Vec::new,
            synthetic::categories,
        );
        let (trend, p_trend) = resolve("patterns.trend", trend, Vec::new, || {
            synthetic::trend(range)
        });

        assemble(
            detected,
            categories,
            trend,
            p_detected.merge(p_categories).merge(p_trend),
        )
    }
}

fn assemble(
    top_patterns: Vec<PatternRow>,
    categories: Vec<BreakdownSlice>,
    trend: Vec<TimeSeriesPoint>,
    provenance: Provenance,
) -> PatternsOverview {
    let encoding = detect_encoding(top_patterns.iter().map(|p| p.confidence));

    let avg_confidence = weighted_mean(top_patterns.iter().filter_map(|p| {
        p.confidence
            .map(|v| (p.occurrence_count as f64, to_percent(v, encoding)))
    }));

    PatternsOverview {
        total_patterns: top_patterns.len(),
        total_occurrences: top_patterns.iter().map(|p| p.occurrence_count).sum(),
        avg_confidence,
        top_patterns,
        categories,
        trend,
        is_mock: provenance.is_mock(),
    }
}
