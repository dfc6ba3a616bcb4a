//! Volume-weighted aggregate statistics.
//!
//! An entity handling 10x the traffic of another must influence the
//! aggregate 10x as much, so every rate and latency statistic is
//! weighted by activity volume rather than averaged naively.

/// Weighted mean of `(weight, value)` samples.
///
/// Returns `0.0` when the total weight is zero (empty batch, or every
/// entity idle), never NaN and never a division error.
pub fn weighted_mean<I>(samples: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for (weight, value) in samples {
        weighted_sum += weight * value;
        total_weight += weight;
    }
    if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    }
}

/// Complement of a success rate in percent, floored at zero so floating
/// point drift never reports a negative rate.
pub fn fallback_rate(success_pct: f64) -> f64 {
    (100.0 - success_pct).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_by_volume_not_naive_mean() {
        // (1000 * 95 + 500 * 88) / 1500 = 92.67, not the simple mean 91.5.
        let samples = [(1000.0, 95.0), (500.0, 88.0)];
        let rate = weighted_mean(samples);
        assert!((rate - 92.67).abs() < 0.1, "got {rate}");
        assert!((rate - 91.5).abs() > 0.5);
    }

    #[test]
    fn heavier_entity_dominates() {
        let samples = [(10_000.0, 10.0), (1.0, 90.0)];
        assert!(weighted_mean(samples) < 11.0);
    }

    #[test]
    fn zero_total_weight_yields_zero() {
        assert_eq!(weighted_mean(std::iter::empty()), 0.0);
        assert_eq!(weighted_mean([(0.0, 95.0), (0.0, 88.0)]), 0.0);
    }

    #[test]
    fn single_sample_passes_through() {
        assert_eq!(weighted_mean([(42.0, 73.5)]), 73.5);
    }

    #[test]
    fn fallback_rate_complements_success() {
        assert_eq!(fallback_rate(92.0), 8.0);
        assert_eq!(fallback_rate(0.0), 100.0);
    }

    #[test]
    fn fallback_rate_never_negative() {
        assert_eq!(fallback_rate(100.0), 0.0);
        // Drift slightly past 100 must floor at zero.
        assert_eq!(fallback_rate(100.0000001), 0.0);
    }
}
