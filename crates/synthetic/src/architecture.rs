use rand::Rng;

use pulse_core::domain::architecture::{ComponentHealth, ComponentRow, HotspotRow};
use pulse_core::domain::BreakdownSlice;

use crate::support;

const COMPONENTS: &[&str] = &[
    "gateway",
    "run-orchestrator",
    "tool-sandbox",
    "event-bus",
    "metrics-store",
    "web-console",
    "graph-service",
];

const LANGUAGES: &[&str] = &["Rust", "TypeScript", "Python", "Go", "SQL"];

const HOTSPOT_PATHS: &[&str] = &[
    "orchestrator/src/scheduler.rs",
    "gateway/src/routes/runs.rs",
    "console/src/views/Dashboard.tsx",
    "sandbox/src/limits.rs",
    "bus/src/replay.rs",
    "metrics/src/rollup.rs",
];

pub fn components() -> Vec<ComponentRow> {
    let mut rng = rand::thread_rng();
    COMPONENTS
        .iter()
        .map(|name| {
            let health = match rng.gen_range(0..12) {
                0 => ComponentHealth::Critical,
                1 | 2 => ComponentHealth::Warning,
                _ => ComponentHealth::Healthy,
            };
            ComponentRow {
                name: (*name).to_string(),
                health,
                dependent_count: rng.gen_range(0..25),
                coverage_pct: Some(rng.gen_range(35.0..97.0)),
            }
        })
        .collect()
}

/// Language shares summing to ~100.
pub fn languages() -> Vec<BreakdownSlice> {
    let mut rng = rand::thread_rng();
    support::percentage_split(&mut rng, LANGUAGES)
}

/// High-churn files, descending by churn.
pub fn hotspots(limit: usize) -> Vec<HotspotRow> {
    let mut rng = rand::thread_rng();
    let mut rows: Vec<HotspotRow> = HOTSPOT_PATHS
        .iter()
        .take(limit)
        .map(|path| HotspotRow {
            path: (*path).to_string(),
            churn_count: rng.gen_range(4..120),
            complexity: rng.gen_range(1.0..40.0),
        })
        .collect();
    rows.sort_by(|a, b| b.churn_count.cmp(&a.churn_count));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_have_bounded_coverage() {
        for row in components() {
            let coverage = row.coverage_pct.unwrap();
            assert!((0.0..=100.0).contains(&coverage));
        }
    }

    #[test]
    fn language_shares_sum_to_one_hundred() {
        for _ in 0..100 {
            let sum: f64 = languages().iter().map(|s| s.share_pct).sum();
            assert!((sum - 100.0).abs() <= 0.5, "sum was {sum}");
        }
    }

    #[test]
    fn hotspots_sorted_by_churn() {
        let rows = hotspots(6);
        assert!(rows.windows(2).all(|w| w[0].churn_count >= w[1].churn_count));
    }
}
