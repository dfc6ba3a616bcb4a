use serde::{Deserialize, Serialize};

/// Dashboard time window, passed to the backend as a query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Hour,
    Day,
    Week,
    Month,
}

impl TimeRange {
    /// Query-string value understood by the telemetry backend.
    pub fn window(self) -> &'static str {
        match self {
            TimeRange::Hour => "1h",
            TimeRange::Day => "24h",
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
        }
    }

    /// Number of whole days the window spans (minimum 1).
    pub fn days(self) -> u32 {
        match self {
            TimeRange::Hour | TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
        }
    }

    /// Bucket count for a series spanning this window: 5-minute buckets
    /// for an hour, hourly for a day, daily beyond that.
    pub fn points(self) -> usize {
        match self {
            TimeRange::Hour => 12,
            TimeRange::Day => 24,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
        }
    }

    /// Seconds between consecutive buckets of `points()`.
    pub fn step_secs(self) -> i64 {
        match self {
            TimeRange::Hour => 300,
            TimeRange::Day => 3600,
            TimeRange::Week | TimeRange::Month => 86_400,
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1h" | "hour" => Ok(TimeRange::Hour),
            "24h" | "day" => Ok(TimeRange::Day),
            "7d" | "week" => Ok(TimeRange::Week),
            "30d" | "month" => Ok(TimeRange::Month),
            other => Err(format!("unknown time range: {other} (expected 1h|24h|7d|30d)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_values() {
        assert_eq!(TimeRange::Hour.window(), "1h");
        assert_eq!(TimeRange::Month.window(), "30d");
    }

    #[test]
    fn parses_both_spellings() {
        assert_eq!("7d".parse::<TimeRange>().unwrap(), TimeRange::Week);
        assert_eq!("week".parse::<TimeRange>().unwrap(), TimeRange::Week);
        assert!("fortnight".parse::<TimeRange>().is_err());
    }

    #[test]
    fn buckets_cover_window() {
        assert_eq!(TimeRange::Hour.step_secs() * TimeRange::Hour.points() as i64, 3_600);
        assert_eq!(TimeRange::Day.step_secs() * TimeRange::Day.points() as i64, 86_400);
        assert_eq!(TimeRange::Week.step_secs() * TimeRange::Week.points() as i64, 7 * 86_400);
        assert_eq!(TimeRange::Month.step_secs() * TimeRange::Month.points() as i64, 30 * 86_400);
    }
}
