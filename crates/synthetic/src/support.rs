//! Shared generator building blocks.

use chrono::{Duration, Utc};
use rand::Rng;

use pulse_core::domain::BreakdownSlice;
use pulse_core::TimeSeriesPoint;

/// Split 100% across `labels`, one decimal place per slice.
///
/// Raw random weights are scaled to percent and the final slice absorbs
/// the rounding drift, so the slices always sum to 100 within rounding.
pub fn percentage_split(rng: &mut impl Rng, labels: &[&str]) -> Vec<BreakdownSlice> {
    if labels.is_empty() {
        return Vec::new();
    }

    let weights: Vec<f64> = labels.iter().map(|_| rng.gen_range(1.0..10.0)).collect();
    let total: f64 = weights.iter().sum();
    let mut shares: Vec<f64> = weights.iter().map(|w| round1(w / total * 100.0)).collect();

    let drift = 100.0 - shares.iter().sum::<f64>();
    if let Some(last) = shares.last_mut() {
        *last = round1(*last + drift);
    }

    labels
        .iter()
        .zip(shares)
        .map(|(label, share)| BreakdownSlice::new(*label, share))
        .collect()
}

/// Chronological series of exactly `points` buckets ending now, values
/// jittered around `base` and floored at zero.
pub fn series(
    rng: &mut impl Rng,
    points: usize,
    step_secs: i64,
    base: f64,
    spread: f64,
) -> Vec<TimeSeriesPoint> {
    let now = Utc::now();
    (0..points)
        .map(|i| {
            let back = step_secs * (points - 1 - i) as i64;
            let value = (base + rng.gen_range(-spread..=spread)).max(0.0);
            TimeSeriesPoint::new(now - Duration::seconds(back), value)
        })
        .collect()
}

/// Descending timestamps for "recent items" lists: now minus a growing
/// random backoff per row.
pub fn recent_timestamps(rng: &mut impl Rng, count: usize) -> Vec<chrono::DateTime<Utc>> {
    let mut cursor = Utc::now();
    (0..count)
        .map(|_| {
            cursor = cursor - Duration::seconds(rng.gen_range(30..1800));
            cursor
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
