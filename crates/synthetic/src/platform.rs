use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use pulse_core::domain::platform::{
    IncidentRow, IncidentSeverity, ResourceUsage, ServiceRow, ServiceStatus,
};

use crate::support;

const SERVICE_NAMES: &[&str] = &[
    "api-gateway",
    "auth",
    "ingest",
    "scheduler",
    "graph-index",
    "notifier",
    "artifact-store",
    "billing",
];

pub fn services() -> Vec<ServiceRow> {
    let mut rng = rand::thread_rng();
    SERVICE_NAMES
        .iter()
        .map(|name| {
            let status = match rng.gen_range(0..20) {
                0 => ServiceStatus::Down,
                1 | 2 => ServiceStatus::Degraded,
                _ => ServiceStatus::Healthy,
            };
            let uptime = match status {
                ServiceStatus::Healthy => rng.gen_range(99.0..100.0),
                ServiceStatus::Degraded => rng.gen_range(90.0..99.0),
                ServiceStatus::Down => rng.gen_range(0.0..60.0),
            };
            ServiceRow {
                name: (*name).to_string(),
                status,
                request_count: rng.gen_range(1_000..500_000),
                uptime_pct: Some(uptime),
                avg_latency_ms: Some(rng.gen_range(5.0..450.0)),
            }
        })
        .collect()
}

pub fn resources() -> ResourceUsage {
    let mut rng = rand::thread_rng();
    ResourceUsage {
        cpu_pct: rng.gen_range(15.0..85.0),
        memory_pct: rng.gen_range(30.0..90.0),
        disk_pct: rng.gen_range(20.0..75.0),
    }
}

/// Zero to three open incidents, newest first.
pub fn incidents() -> Vec<IncidentRow> {
    let mut rng = rand::thread_rng();
    let count = rng.gen_range(0..=3);
    let stamps = support::recent_timestamps(&mut rng, count);
    stamps
        .into_iter()
        .map(|opened_at| IncidentRow {
            id: Uuid::new_v4(),
            service: (*SERVICE_NAMES.choose(&mut rng).unwrap_or(&SERVICE_NAMES[0])).to_string(),
            severity: *[
                IncidentSeverity::Minor,
                IncidentSeverity::Major,
                IncidentSeverity::Critical,
            ]
            .choose(&mut rng)
            .unwrap_or(&IncidentSeverity::Minor),
            message: "elevated error rate".to_string(),
            opened_at,
        })
        .collect()
}
