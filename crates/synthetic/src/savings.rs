use rand::Rng;

use pulse_core::domain::savings::SavingsSummary;
use pulse_core::{TimeRange, TimeSeriesPoint};

use crate::support;

/// Generated savings summary.
///
/// Each tier is derived from the previous with a multiplier floor, so
/// `daily <= weekly <= monthly <= total` holds by construction rather
/// than by chance.
pub fn summary() -> SavingsSummary {
    let mut rng = rand::thread_rng();

    let daily = rng.gen_range(400.0..3000.0);
    let weekly = daily * rng.gen_range(5.0..7.0);
    let monthly = weekly * rng.gen_range(4.0..4.4);
    let total = monthly * rng.gen_range(3.0..12.0);

    let automated_runs = rng.gen_range(800..12_000);
    let manual_runs = rng.gen_range(50..automated_runs / 4);

    SavingsSummary {
        daily_savings: round2(daily),
        weekly_savings: round2(weekly),
        monthly_savings: round2(monthly),
        total_savings: round2(total),
        time_saved_hours: round2(total / rng.gen_range(40.0..60.0)),
        automated_runs,
        manual_runs,
        savings_delta_pct: round2(rng.gen_range(-15.0..35.0)),
        time_saved_delta_pct: round2(rng.gen_range(-15.0..35.0)),
    }
}

/// Daily savings amounts, chronological.
pub fn history(range: TimeRange) -> Vec<TimeSeriesPoint> {
    let mut rng = rand::thread_rng();
    let base = rng.gen_range(800.0..2200.0);
    support::series(&mut rng, range.points(), range.step_secs(), base, base * 0.4)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::series::is_chronological;

    #[test]
    fn tiers_are_monotone_on_every_generation() {
        for _ in 0..200 {
            let s = summary();
            assert!(s.daily_savings <= s.weekly_savings);
            assert!(s.weekly_savings <= s.monthly_savings);
            assert!(s.monthly_savings <= s.total_savings);
        }
    }

    #[test]
    fn run_counts_are_sane() {
        let s = summary();
        assert!(s.manual_runs < s.automated_runs);
        assert!(s.time_saved_hours > 0.0);
    }

    #[test]
    fn history_is_chronological_with_exact_length() {
        let points = history(TimeRange::Month);
        assert_eq!(points.len(), 30);
        assert!(is_chronological(&points));
    }
}
