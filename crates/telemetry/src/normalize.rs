//! Ratio encoding detection and clamping.
//!
//! Upstream services inconsistently emit the same semantic quantity as
//! `0.95` or `95` depending on endpoint and version. Detection samples
//! the first non-null value of a batch and applies one conversion to the
//! whole batch, keeping it internally consistent even when the sample is
//! wrong for an individual record. This is an accepted heuristic; batches
//! with genuinely mixed encodings are out of scope.

/// How a batch of ratio-like values is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioEncoding {
    /// Values in `[0, 1]`, multiplied by 100 on conversion.
    UnitInterval,
    /// Values already in `[0, 100]`, passed through.
    Percent,
}

/// Detect the encoding of a batch from its first non-null sample.
///
/// An empty batch detects as `Percent`, making conversion a no-op.
pub fn detect_encoding<I>(samples: I) -> RatioEncoding
where
    I: IntoIterator<Item = Option<f64>>,
{
    match samples.into_iter().flatten().next() {
        Some(sample) if sample <= 1.0 => RatioEncoding::UnitInterval,
        _ => RatioEncoding::Percent,
    }
}

/// Convert one value to percent under the batch encoding, then clamp
/// to `[0, 100]` to defend against malformed upstream data.
pub fn to_percent(value: f64, encoding: RatioEncoding) -> f64 {
    let pct = match encoding {
        RatioEncoding::UnitInterval => value * 100.0,
        RatioEncoding::Percent => value,
    };
    clamp_percent(pct)
}

pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
