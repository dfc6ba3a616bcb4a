use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use pulse_core::domain::agents::{AgentErrorRow, AgentRow, AgentStatus};
use pulse_core::{TimeRange, TimeSeriesPoint};

use crate::support;

const AGENT_NAMES: &[&str] = &[
    "triage-bot",
    "doc-indexer",
    "pr-reviewer",
    "release-scribe",
    "billing-reconciler",
    "log-summarizer",
    "oncall-router",
    "schema-migrator",
    "ticket-deduper",
    "deploy-sentinel",
];

const ERROR_MESSAGES: &[&str] = &[
    "tool call exceeded budget",
    "context window overflow",
    "upstream model timeout",
    "schema drift in tool output",
    "rate limited by provider",
];

/// Generated agent roster; success rates in percent encoding.
pub fn roster() -> Vec<AgentRow> {
    let mut rng = rand::thread_rng();
    AGENT_NAMES
        .iter()
        .map(|name| {
            let activity_count = rng.gen_range(50..2500);
            let status = match rng.gen_range(0..10) {
                0 => AgentStatus::Error,
                1 | 2 => AgentStatus::Idle,
                _ => AgentStatus::Active,
            };
            AgentRow {
                id: Uuid::new_v4(),
                name: (*name).to_string(),
                status,
                activity_count,
                success_rate: Some(rng.gen_range(82.0..99.5)),
                avg_confidence: Some(rng.gen_range(70.0..98.0)),
                avg_latency_ms: Some(rng.gen_range(250.0..4000.0)),
            }
        })
        .collect()
}

/// Daily (or finer) run counts, chronological, one point per bucket.
pub fn activity(range: TimeRange) -> Vec<TimeSeriesPoint> {
    let mut rng = rand::thread_rng();
    support::series(&mut rng, range.points(), range.step_secs(), 420.0, 180.0)
}

/// Recent failures, newest first.
pub fn recent_errors(limit: usize) -> Vec<AgentErrorRow> {
    let mut rng = rand::thread_rng();
    let stamps = support::recent_timestamps(&mut rng, limit);
    stamps
        .into_iter()
        .map(|occurred_at| AgentErrorRow {
            id: Uuid::new_v4(),
            agent_name: (*AGENT_NAMES.choose(&mut rng).unwrap_or(&"triage-bot")).to_string(),
            message: (*ERROR_MESSAGES.choose(&mut rng).unwrap_or(&ERROR_MESSAGES[0])).to_string(),
            occurred_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::series::is_chronological;

    #[test]
    fn roster_is_well_formed() {
        let rows = roster();
        assert!(!rows.is_empty());
        for row in &rows {
            assert!(row.success_rate.unwrap() <= 100.0);
            assert!(row.avg_latency_ms.unwrap() >= 0.0);
        }
    }

    #[test]
    fn activity_matches_requested_window() {
        for range in [TimeRange::Day, TimeRange::Week, TimeRange::Month] {
            let points = activity(range);
            assert_eq!(points.len(), range.points());
            assert!(is_chronological(&points));
        }
    }

    #[test]
    fn errors_are_newest_first() {
        let errors = recent_errors(10);
        assert_eq!(errors.len(), 10);
        assert!(errors.windows(2).all(|w| w[0].occurred_at >= w[1].occurred_at));
    }
}
