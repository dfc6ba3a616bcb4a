//! Agent fleet composite source.
//!
//! Constituents: the agent roster (weighted statistics), the daily run
//! activity series (chronological), and recent failures (newest first).

use pulse_core::domain::agents::{AgentErrorRow, AgentRow, AgentStatus, AgentsOverview};
use pulse_core::{Config, DataMode, DegradeReason, Provenance, TimeRange, TimeSeriesPoint};
use pulse_synthetic::agents as synthetic;
use pulse_telemetry::aggregate::{fallback_rate, weighted_mean};
use pulse_telemetry::normalize::{detect_encoding, to_percent};
use pulse_telemetry::ApiClient;

use crate::resolve::resolve;

const RECENT_ERROR_LIMIT: usize = 10;

pub struct AgentSource {
    client: ApiClient,
    mode: DataMode,
}

impl AgentSource {
    pub fn new(config: &Config) -> Self {
        Self::with_mode(ApiClient::new(&config.api), config.data_mode)
    }

    pub fn with_mode(client: ApiClient, mode: DataMode) -> Self {
        Self { client, mode }
    }

    /// Fetch and merge every constituent. Infallible: failures degrade
    /// into generated data and set `isMock`.
    pub async fn fetch_all(&self, range: TimeRange) -> AgentsOverview {
        if self.mode.is_forced_synthetic() {
            return assemble(
                synthetic::roster(),
                synthetic::activity(range),
                synthetic::recent_errors(RECENT_ERROR_LIMIT),
                Provenance::Degraded(DegradeReason::Forced),
            );
        }

        let window = range.window().to_string();
        let roster_query = [("timeWindow", window.clone())];
        let activity_query = [("timeRange", window.clone())];
        let errors_query = [("limit", RECENT_ERROR_LIMIT.to_string())];
        let (roster, activity, errors) = tokio::join!(
            self.client
                .get_json::<Vec<AgentRow>>("/api/agents", &roster_query),
            self.client.get_json::<Vec<TimeSeriesPoint>>(
                "/api/agents/activity",
                &activity_query,
            ),
            self.client.get_json::<Vec<AgentErrorRow>>(
                "/api/agents/errors/recent",
                &errors_query,
            ),
        );

        let (roster, p_roster) = resolve("agents.roster", roster, Vec::new, synthetic::roster);
        let (activity, p_activity) = resolve("agents.activity", activity, Vec::new, || {
            synthetic::activity(range)
        });
        let (errors, p_errors) = resolve("agents.errors", errors, Vec::new, || {
            synthetic::recent_errors(RECENT_ERROR_LIMIT)
        });

        assemble(
            roster,
            activity,
            errors,
            p_roster.merge(p_activity).merge(p_errors),
        )
    }
}

fn assemble(
    roster: Vec<AgentRow>,
    activity: Vec<TimeSeriesPoint>,
    recent_errors: Vec<AgentErrorRow>,
    provenance: Provenance,
) -> AgentsOverview {
    let success_encoding = detect_encoding(roster.iter().map(|r| r.success_rate));
    let confidence_encoding = detect_encoding(roster.iter().map(|r| r.avg_confidence));

    let success_rate = weighted_mean(roster.iter().filter_map(|r| {
        r.success_rate
            .map(|v| (r.activity_count as f64, to_percent(v, success_encoding)))
    }));
    let avg_confidence = weighted_mean(roster.iter().filter_map(|r| {
        r.avg_confidence
            .map(|v| (r.activity_count as f64, to_percent(v, confidence_encoding)))
    }));
    let avg_latency_ms = weighted_mean(roster.iter().filter_map(|r| {
        r.avg_latency_ms
            .map(|v| (r.activity_count as f64, v.max(0.0)))
    }));

    AgentsOverview {
        total_agents: roster.len(),
        active_agents: roster
            .iter()
            .filter(|r| r.status == AgentStatus::Active)
            .count(),
        total_runs: roster.iter().map(|r| r.activity_count).sum(),
        success_rate,
        fallback_rate: fallback_rate(success_rate),
        avg_confidence,
        avg_latency_ms,
        activity,
        recent_errors,
        is_mock: provenance.is_mock(),
    }
}
