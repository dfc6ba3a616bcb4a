//! Data provenance for composite fetch results.
//!
//! Every composite source reports whether its result came from live
//! telemetry or from generated fallback data. A single degraded
//! constituent degrades the whole composite: a half-real view must not
//! present itself as trustworthy.

use serde::Serialize;

/// Why a fetch was served from generated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DegradeReason {
    /// Connection refused, DNS failure, or deadline exceeded.
    Transport,
    /// Backend answered with a non-2xx status.
    HttpStatus,
    /// 2xx response whose body failed to parse or decode.
    Decode,
    /// Well-formed response with an invalid shape or out-of-range values.
    Validation,
    /// Caller requested synthetic data (`DataMode::Synthetic`).
    Forced,
}

/// Provenance of one resolved dataset.
///
/// `Live` covers both populated and empty-but-real responses; an API
/// that answers "no rows" is reachable and truthful, which is a
/// different situation from telemetry being unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Provenance {
    Live,
    Degraded(DegradeReason),
}

impl Provenance {
    /// Boolean view consumed by the presentation layer.
    pub fn is_mock(self) -> bool {
        matches!(self, Provenance::Degraded(_))
    }

    /// OR-reduce two provenances. `Live` is the identity; the first
    /// degrade reason is kept when both sides are degraded.
    pub fn merge(self, other: Provenance) -> Provenance {
        match self {
            Provenance::Live => other,
            degraded => degraded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_is_not_mock() {
        assert!(!Provenance::Live.is_mock());
    }

    #[test]
    fn degraded_is_mock() {
        assert!(Provenance::Degraded(DegradeReason::Transport).is_mock());
        assert!(Provenance::Degraded(DegradeReason::Forced).is_mock());
    }

    #[test]
    fn merge_is_or_reduction() {
        let live = Provenance::Live;
        let transport = Provenance::Degraded(DegradeReason::Transport);
        let decode = Provenance::Degraded(DegradeReason::Decode);

        assert_eq!(live.merge(live), live);
        assert_eq!(live.merge(transport), transport);
        assert_eq!(transport.merge(live), transport);
        // First reason wins.
        assert_eq!(transport.merge(decode), transport);
    }

    #[test]
    fn one_degraded_constituent_degrades_the_fold() {
        let outcomes = [
            Provenance::Live,
            Provenance::Degraded(DegradeReason::HttpStatus),
            Provenance::Live,
        ];
        let merged = outcomes
            .into_iter()
            .fold(Provenance::Live, Provenance::merge);
        assert!(merged.is_mock());
    }
}
