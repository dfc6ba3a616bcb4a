//! Automation savings composite source.
//!
//! Constituents: the validated savings summary and the daily savings
//! history series (chronological). The summary is the one structured
//! payload that goes through declarative validation: run counts must
//! be non-negative, while savings and deltas may be negative because a
//! regression is real data.

use serde_json::Value;
use tracing::warn;

use pulse_core::domain::savings::{SavingsOverview, SavingsSummary};
use pulse_core::{Config, DataMode, DegradeReason, Provenance, TimeRange, TimeSeriesPoint};
use pulse_synthetic::savings as synthetic;
use pulse_telemetry::validate::decode_validated;
use pulse_telemetry::{ApiClient, FetchResult, FieldSpec};

use crate::resolve::{degrade_reason, resolve};

const SUMMARY_FIELDS: &[FieldSpec] = &[
    FieldSpec::delta("dailySavings"),
    FieldSpec::delta("weeklySavings"),
    FieldSpec::delta("monthlySavings"),
    FieldSpec::delta("totalSavings"),
    FieldSpec::delta("timeSavedHours"),
    FieldSpec::count("automatedRuns"),
    FieldSpec::count("manualRuns"),
    FieldSpec::delta("savingsDeltaPct"),
    FieldSpec::delta("timeSavedDeltaPct"),
];

pub struct SavingsSource {
    client: ApiClient,
    mode: DataMode,
}

impl SavingsSource {
    pub fn new(config: &Config) -> Self {
        Self::with_mode(ApiClient::new(&config.api), config.data_mode)
    }

    pub fn with_mode(client: ApiClient, mode: DataMode) -> Self {
        Self { client, mode }
    }

    pub async fn fetch_all(&self, range: TimeRange) -> SavingsOverview {
        if self.mode.is_forced_synthetic() {
            return SavingsOverview {
                summary: synthetic::summary(),
                history: synthetic::history(range),
                is_mock: true,
            };
        }

        let window = range.window().to_string();
        let summary_query = [("timeRange", window.clone())];
        let history_query = [("timeRange", window.clone())];
        let (summary, history) = tokio::join!(
            self.client
                .get_json::<Value>("/api/savings/summary", &summary_query),
            self.client.get_json::<Vec<TimeSeriesPoint>>(
                "/api/savings/history",
                &history_query,
            ),
        );

        let (summary, p_summary) = resolve_summary(summary);
        let (history, p_history) = resolve("savings.history", history, Vec::new, || {
            synthetic::history(range)
        });

        SavingsOverview {
            summary,
            history,
            is_mock: p_summary.merge(p_history).is_mock(),
        }
    }
}

/// The summary passes field validation between fetch and decode, so a
/// well-formed-but-wrong payload degrades with a distinct reason from
/// a transport failure.
fn resolve_summary(outcome: FetchResult<Value>) -> (SavingsSummary, Provenance) {
    match outcome {
        FetchResult::Real(value) => match decode_validated::<SavingsSummary>(value, SUMMARY_FIELDS)
        {
            Ok(summary) => (summary, Provenance::Live),
            Err(err) => {
                warn!(source = "savings.summary", error = %err, "summary failed validation; serving synthetic data");
                (
                    synthetic::summary(),
                    Provenance::Degraded(DegradeReason::Validation),
                )
            }
        },
        // A null summary is the backend saying "nothing measured yet".
        FetchResult::Empty => (SavingsSummary::default(), Provenance::Live),
        FetchResult::Failed(err) => {
            let reason = degrade_reason(&err);
            warn!(source = "savings.summary", error = %err, "fetch degraded; serving synthetic data");
            (synthetic::summary(), Provenance::Degraded(reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_summary() -> Value {
        json!({
            "dailySavings": 1200.0,
            "weeklySavings": 7800.0,
            "monthlySavings": 33_000.0,
            "totalSavings": 190_000.0,
            "timeSavedHours": 3400.0,
            "automatedRuns": 5200,
            "manualRuns": 240,
            "savingsDeltaPct": 12.5,
            "timeSavedDeltaPct": 8.1,
        })
    }

    #[test]
    fn valid_summary_is_live() {
        let (summary, provenance) = resolve_summary(FetchResult::Real(valid_summary()));
        assert_eq!(summary.automated_runs, 5200);
        assert!(!provenance.is_mock());
    }

    #[test]
    fn negative_deltas_are_real_data() {
        let mut payload = valid_summary();
        payload["totalSavings"] = json!(-5000.0);
        payload["timeSavedHours"] = json!(-20.0);
        payload["savingsDeltaPct"] = json!(-42.0);

        let (summary, provenance) = resolve_summary(FetchResult::Real(payload));
        assert!(!provenance.is_mock());
        assert_eq!(summary.total_savings, -5000.0);
        assert_eq!(summary.time_saved_hours, -20.0);
    }

    #[test]
    fn negative_run_count_degrades_with_validation_reason() {
        let mut payload = valid_summary();
        payload["automatedRuns"] = json!(-3);

        let (_, provenance) = resolve_summary(FetchResult::Real(payload));
        assert_eq!(provenance, Provenance::Degraded(DegradeReason::Validation));
    }

    #[test]
    fn non_object_payload_degrades() {
        let (_, provenance) = resolve_summary(FetchResult::Real(json!([1, 2, 3])));
        assert_eq!(provenance, Provenance::Degraded(DegradeReason::Validation));
    }

    #[test]
    fn null_summary_is_zeroed_but_live() {
        let (summary, provenance) = resolve_summary(FetchResult::Empty);
        assert!(!provenance.is_mock());
        assert_eq!(summary.total_savings, 0.0);
        assert_eq!(summary.automated_runs, 0);
    }
}
