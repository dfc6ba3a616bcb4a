//! Event stream composite source.
//!
//! Constituents: recent events (newest first), the volume series
//! (chronological), and the severity breakdown.

use pulse_core::domain::events::{EventRow, EventsOverview};
use pulse_core::domain::BreakdownSlice;
use pulse_core::{Config, DataMode, DegradeReason, Provenance, TimeRange, TimeSeriesPoint};
use pulse_synthetic::events as synthetic;
use pulse_telemetry::ApiClient;

use crate::resolve::resolve;

const RECENT_LIMIT: usize = 25;

pub struct EventSource {
    client: ApiClient,
    mode: DataMode,
}

impl EventSource {
    pub fn new(config: &Config) -> Self {
        Self::with_mode(ApiClient::new(&config.api), config.data_mode)
    }

    pub fn with_mode(client: ApiClient, mode: DataMode) -> Self {
        Self { client, mode }
    }

    pub async fn fetch_all(&self, range: TimeRange) -> EventsOverview {
        if self.mode.is_forced_synthetic() {
            return assemble(
                synthetic::recent(RECENT_LIMIT),
                synthetic::volume(range),
                synthetic::breakdown(),
                Provenance::Degraded(DegradeReason::Forced),
            );
        }

        let window = range.window().to_string();
        let recent_query = [("limit", RECENT_LIMIT.to_string())];
        let volume_query = [("timeRange", window.clone())];
        let (recent, volume, breakdown) = tokio::join!(
            self.client.get_json::<Vec<EventRow>>(
                "/api/events/recent",
                &recent_query,
            ),
            self.client.get_json::<Vec<TimeSeriesPoint>>(
                "/api/events/volume",
                &volume_query,
            ),
            self.client
                .get_json::<Vec<BreakdownSlice>>("/api/events/breakdown", &[]),
        );

        let (recent, p_recent) = resolve("events.recent", recent, Vec::new, || {
            synthetic::recent(RECENT_LIMIT)
        });
        let (volume, p_volume) = resolve("events.volume", volume, Vec::new, || {
            synthetic::volume(range)
        });
        let (breakdown, p_breakdown) = resolve(
            "events.breakdown",
            breakdown,
            Vec::new,
            synthetic::breakdown,
        );

        assemble(
            recent,
            volume,
            breakdown,
            p_recent.merge(p_volume).merge(p_breakdown),
        )
    }
}

fn assemble(
    recent: Vec<EventRow>,
    volume: Vec<TimeSeriesPoint>,
    breakdown: Vec<BreakdownSlice>,
    provenance: Provenance,
) -> EventsOverview {
    let total_events = volume.iter().map(|p| p.value.max(0.0)).sum::<f64>() as u64;
    let peak_volume = volume.iter().map(|p| p.value).fold(0.0, f64::max);

    EventsOverview {
        total_events,
        peak_volume,
        recent,
        volume,
        breakdown,
        is_mock: provenance.is_mock(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn point(hour: u32, value: f64) -> TimeSeriesPoint {
        TimeSeriesPoint::new(Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap(), value)
    }

    #[test]
    fn totals_derive_from_volume() {
        let volume = vec![point(1, 100.0), point(2, 250.0), point(3, 50.0)];
        let overview = assemble(Vec::new(), volume, Vec::new(), Provenance::Live);
        assert_eq!(overview.total_events, 400);
        assert_eq!(overview.peak_volume, 250.0);
    }

    #[test]
    fn empty_stream_is_live_and_zeroed() {
        let overview = assemble(Vec::new(), Vec::new(), Vec::new(), Provenance::Live);
        assert_eq!(overview.total_events, 0);
        assert_eq!(overview.peak_volume, 0.0);
        assert!(!overview.is_mock);
    }

    #[test]
    fn negative_buckets_do_not_poison_total() {
        let volume = vec![point(1, -10.0), point(2, 30.0)];
        let overview = assemble(Vec::new(), volume, Vec::new(), Provenance::Live);
        assert_eq!(overview.total_events, 30);
    }
}
