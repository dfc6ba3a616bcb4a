//! Platform health composite source.
//!
//! Constituents: per-service health rows (uptime and latency weighted by
//! request volume), cluster resource utilization, and open incidents.
//! An empty incident list is a real "no incidents", never a failure.

use pulse_core::domain::platform::{
    IncidentRow, PlatformOverview, ResourceUsage, ServiceRow, ServiceStatus,
};
use pulse_core::{Config, DataMode, DegradeReason, Provenance, TimeRange};
use pulse_synthetic::platform as synthetic;
use pulse_telemetry::aggregate::{fallback_rate, weighted_mean};
use pulse_telemetry::normalize::{clamp_percent, detect_encoding, to_percent};
use pulse_telemetry::ApiClient;

use crate::resolve::resolve;

pub struct PlatformSource {
    client: ApiClient,
    mode: DataMode,
}

impl PlatformSource {
    pub fn new(config: &Config) -> Self {
        Self::with_mode(ApiClient::new(&config.api), config.data_mode)
    }

    pub fn with_mode(client: ApiClient, mode: DataMode) -> Self {
        Self { client, mode }
    }

    pub async fn fetch_all(&self, range: TimeRange) -> PlatformOverview {
        if self.mode.is_forced_synthetic() {
            return assemble(
                synthetic::services(),
                synthetic::resources(),
                synthetic::incidents(),
                Provenance::Degraded(DegradeReason::Forced),
            );
        }

        let window = range.window().to_string();
        let services_query = [("timeWindow", window.clone())];
        let incidents_query = [("timeWindow", window.clone())];
        let (services, resources, incidents) = tokio::join!(
            self.client.get_json::<Vec<ServiceRow>>(
                "/api/platform/services",
                &services_query,
            ),
            self.client
                .get_json::<ResourceUsage>("/api/platform/resources", &[]),
            self.client.get_json::<Vec<IncidentRow>>(
                "/api/platform/incidents",
                &incidents_query,
            ),
        );

        let (services, p_services) =
            resolve("platform.services", services, Vec::new, synthetic::services);
        let (resources, p_resources) = resolve(
            "platform.resources",
            resources,
            ResourceUsage::default,
            synthetic::resources,
        );
        let (incidents, p_incidents) = resolve(
            "platform.incidents",
            incidents,
            Vec::new,
            synthetic::incidents,
        );

        assemble(
            services,
            resources,
            incidents,
            p_services.merge(p_resources).merge(p_incidents),
        )
    }
}

fn assemble(
    services: Vec<ServiceRow>,
    resources: ResourceUsage,
    open_incidents: Vec<IncidentRow>,
    provenance: Provenance,
) -> PlatformOverview {
    let uptime_encoding = detect_encoding(services.iter().map(|s| s.uptime_pct));

    let uptime_pct = weighted_mean(services.iter().filter_map(|s| {
        s.uptime_pct
            .map(|v| (s.request_count as f64, to_percent(v, uptime_encoding)))
    }));
    let avg_latency_ms = weighted_mean(services.iter().filter_map(|s| {
        s.avg_latency_ms
            .map(|v| (s.request_count as f64, v.max(0.0)))
    }));

    let resources = ResourceUsage {
        cpu_pct: clamp_percent(resources.cpu_pct),
        memory_pct: clamp_percent(resources.memory_pct),
        disk_pct: clamp_percent(resources.disk_pct),
    };

    PlatformOverview {
        total_services: services.len(),
        healthy_services: services
            .iter()
            .filter(|s| s.status == ServiceStatus::Healthy)
            .count(),
        total_requests: services.iter().map(|s| s.request_count).sum(),
        uptime_pct,
        error_rate: fallback_rate(uptime_pct),
        avg_latency_ms,
        resources,
        open_incidents,
        is_mock: provenance.is_mock(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(requests: u64, uptime: Option<f64>, latency: Option<f64>) -> ServiceRow {
        ServiceRow {
            name: "svc".to_string(),
            status: ServiceStatus::Healthy,
            request_count: requests,
            uptime_pct: uptime,
            avg_latency_ms: latency,
        }
    }

    #[test]
    fn uptime_weighted_by_request_volume() {
        let services = vec![
            service(90_000, Some(99.9), Some(20.0)),
            service(10_000, Some(90.0), Some(400.0)),
        ];
        let overview = assemble(
            services,
            ResourceUsage::default(),
            Vec::new(),
            Provenance::Live,
        );
        // (90000*99.9 + 10000*90) / 100000 = 98.91
        assert!((overview.uptime_pct - 98.91).abs() < 0.01);
        assert!((overview.error_rate - 1.09).abs() < 0.01);
        // (90000*20 + 10000*400) / 100000 = 58
        assert!((overview.avg_latency_ms - 58.0).abs() < 0.01);
    }

    #[test]
    fn unit_interval_uptime_converts() {
        let services = vec![service(100, Some(0.999), None), service(100, Some(0.95), None)];
        let overview = assemble(
            services,
            ResourceUsage::default(),
            Vec::new(),
            Provenance::Live,
        );
        assert!((overview.uptime_pct - 97.45).abs() < 0.01);
    }

    #[test]
    fn resource_percentages_clamp() {
        let resources = ResourceUsage {
            cpu_pct: 140.0,
            memory_pct: -5.0,
            disk_pct: 55.0,
        };
        let overview = assemble(Vec::new(), resources, Vec::new(), Provenance::Live);
        assert_eq!(overview.resources.cpu_pct, 100.0);
        assert_eq!(overview.resources.memory_pct, 0.0);
        assert_eq!(overview.resources.disk_pct, 55.0);
    }

    #[test]
    fn idle_platform_aggregates_to_zero() {
        let services = vec![service(0, Some(99.0), Some(10.0))];
        let overview = assemble(
            services,
            ResourceUsage::default(),
            Vec::new(),
            Provenance::Live,
        );
        assert_eq!(overview.uptime_pct, 0.0);
        assert!(overview.uptime_pct.is_finite());
    }
}
