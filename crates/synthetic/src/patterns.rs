use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use pulse_core::domain::patterns::PatternRow;
use pulse_core::domain::BreakdownSlice;
use pulse_core::{TimeRange, TimeSeriesPoint};

use crate::support;

const CATEGORIES: &[&str] = &["retry-loop", "escalation", "tool-chain", "handoff", "drift"];

const PATTERN_NAMES: &[&str] = &[
    "retry storm after tool failure",
    "silent context truncation",
    "escalation to human review",
    "redundant search chain",
    "stale knowledge reuse",
    "looping clarification requests",
    "over-broad file reads",
    "premature task completion",
];

/// Detected patterns sorted by occurrence count descending.
pub fn detected(limit: usize) -> Vec<PatternRow> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    let mut rows: Vec<PatternRow> = PATTERN_NAMES
        .iter()
        .take(limit)
        .map(|name| PatternRow {
            id: Uuid::new_v4(),
            name: (*name).to_string(),
            category: (*CATEGORIES.choose(&mut rng).unwrap_or(&CATEGORIES[0])).to_string(),
            occurrence_count: rng.gen_range(3..400),
            confidence: Some(rng.gen_range(55.0..99.0)),
            last_seen: now - Duration::minutes(rng.gen_range(1..720)),
        })
        .collect();
    rows.sort_by(|a, b| b.occurrence_count.cmp(&a.occurrence_count));
    rows
}

/// Category shares summing to ~100.
pub fn categories() -> Vec<BreakdownSlice> {
    let mut rng = rand::thread_rng();
    support::percentage_split(&mut rng, CATEGORIES)
}

/// Detections per bucket, chronological.
pub fn trend(range: TimeRange) -> Vec<TimeSeriesPoint> {
    let mut rng = rand::thread_rng();
    support::series(&mut rng, range.points(), range.step_secs(), 24.0, 14.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::series::is_chronological;

    #[test]
    fn detected_sorted_by_occurrences() {
        let rows = detected(8);
        assert!(rows.windows(2).all(|w| w[0].occurrence_count >= w[1].occurrence_count));
    }

    #[test]
    fn category_shares_sum_to_one_hundred() {
        for _ in 0..100 {
            let sum: f64 = categories().iter().map(|s| s.share_pct).sum();
            assert!((sum - 100.0).abs() <= 0.5, "sum was {sum}");
        }
    }

    #[test]
    fn trend_is_chronological() {
        let points = trend(TimeRange::Week);
        assert_eq!(points.len(), 7);
        assert!(is_chronological(&points));
    }
}
