use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use pulse_core::domain::events::{EventRow, EventSeverity};
use pulse_core::domain::BreakdownSlice;
use pulse_core::{TimeRange, TimeSeriesPoint};

use crate::support;

const EVENT_TYPES: &[&str] = &[
    "RunStarted",
    "RunCompleted",
    "RunFailed",
    "ToolInvoked",
    "EscalationRaised",
    "ConfigChanged",
];

const SOURCES: &[&str] = &["scheduler", "executor", "gateway", "console"];

/// Recent events, newest first.
pub fn recent(limit: usize) -> Vec<EventRow> {
    let mut rng = rand::thread_rng();
    let stamps = support::recent_timestamps(&mut rng, limit);
    stamps
        .into_iter()
        .map(|timestamp| {
            let event_type = *EVENT_TYPES.choose(&mut rng).unwrap_or(&EVENT_TYPES[0]);
            let severity = if event_type == "RunFailed" {
                EventSeverity::Error
            } else if event_type == "EscalationRaised" {
                EventSeverity::Warning
            } else {
                EventSeverity::Info
            };
            EventRow {
                id: Uuid::new_v4(),
                event_type: event_type.to_string(),
                source: (*SOURCES.choose(&mut rng).unwrap_or(&SOURCES[0])).to_string(),
                severity,
                timestamp,
            }
        })
        .collect()
}

/// Events per bucket, chronological.
pub fn volume(range: TimeRange) -> Vec<TimeSeriesPoint> {
    let mut rng = rand::thread_rng();
    support::series(&mut rng, range.points(), range.step_secs(), 350.0, 200.0)
        .into_iter()
        .map(|p| TimeSeriesPoint::new(p.period, p.value.round()))
        .collect()
}

/// Severity shares summing to ~100.
pub fn breakdown() -> Vec<BreakdownSlice> {
    let mut rng = rand::thread_rng();
    support::percentage_split(&mut rng, &["info", "warning", "error"])
}
