//! The single place the degrade policy lives.

use tracing::{debug, warn};

use pulse_core::{DegradeReason, Provenance};
use pulse_telemetry::{FetchError, FetchResult};

pub(crate) fn degrade_reason(err: &FetchError) -> DegradeReason {
    match err {
        FetchError::Transport(_) => DegradeReason::Transport,
        FetchError::Status(_) => DegradeReason::HttpStatus,
        FetchError::Decode(_) => DegradeReason::Decode,
    }
}

/// Resolve one constituent fetch outcome.
///
/// Real data passes through; an empty-but-real response resolves via
/// `on_empty` and stays `Live` (zero rows is an answer, not an outage);
/// a failure substitutes `synthetic` data and degrades provenance.
pub(crate) fn resolve<T>(
    source: &'static str,
    outcome: FetchResult<T>,
    on_empty: impl FnOnce() -> T,
    synthetic: impl FnOnce() -> T,
) -> (T, Provenance) {
    match outcome {
        FetchResult::Real(data) => (data, Provenance::Live),
        FetchResult::Empty => {
            debug!(source, "backend reported no data; serving empty result");
            (on_empty(), Provenance::Live)
        }
        FetchResult::Failed(err) => {
            let reason = degrade_reason(&err);
            warn!(source, error = %err, "fetch degraded; serving synthetic data");
            (synthetic(), Provenance::Degraded(reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_data_is_live() {
        let (data, provenance) = resolve(
            "test",
            FetchResult::Real(vec![1, 2, 3]),
            Vec::new,
            || vec![9],
        );
        assert_eq!(data, vec![1, 2, 3]);
        assert!(!provenance.is_mock());
    }

    #[test]
    fn empty_is_live_with_empty_value() {
        let (data, provenance): (Vec<i32>, _) =
            resolve("test", FetchResult::Empty, Vec::new, || vec![9]);
        assert!(data.is_empty());
        assert!(!provenance.is_mock());
    }

    #[test]
    fn failure_substitutes_synthetic_and_degrades() {
        let (data, provenance) = resolve(
            "test",
            FetchResult::Failed(FetchError::Status(500)),
            Vec::new,
            || vec![9],
        );
        assert_eq!(data, vec![9]);
        assert_eq!(provenance, Provenance::Degraded(DegradeReason::HttpStatus));
    }

    #[test]
    fn reasons_map_by_failure_class() {
        assert_eq!(
            degrade_reason(&FetchError::Status(503)),
            DegradeReason::HttpStatus
        );
        assert_eq!(
            degrade_reason(&FetchError::Decode("bad".into())),
            DegradeReason::Decode
        );
    }
}
