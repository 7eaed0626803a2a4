//! Shows how network-metric URLs are normalized: allowlisted shapes report
//! the pattern itself, everything else falls back to generic redaction.

use std::sync::Arc;

use async_trait::async_trait;
use monitorkit_rs_sdk::monitor::{
    Monitor, MonitorSettings, MonitorEvent, PerformanceMetric,
};
use monitorkit_rs_sdk::provider::MonitorProvider;

struct UrlEcho;

#[async_trait]
impl MonitorProvider for UrlEcho {
    fn key(&self) -> &str {
        "url-echo"
    }

    async fn track_event(&self, _event: &MonitorEvent) {}

    async fn track_metric(&self, metric: &PerformanceMetric) {
        if let PerformanceMetric::Network { url, .. } = metric {
            println!("reported as: {url}");
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let monitor = Monitor::initialize(MonitorSettings {
        url_patterns: vec!["api/users/*/profile".to_owned(), "auth/**".to_owned()],
        use_native_tracing: false,
    });
    monitor.add_provider(Arc::new(UrlEcho));

    for url in [
        "api/users/123/profile",
        "auth/oauth/token/refresh",
        "api/orders/98765/details",
        "api/files/123e4567-e89b-12d3-a456-426614174000/download",
        "api/config/settings",
    ] {
        monitor
            .track_metric(
                PerformanceMetric::Network {
                    url: url.to_owned(),
                    http_method: "GET".to_owned(),
                    status_code: 200,
                    duration_ms: 42,
                },
                None,
            )
            .await;
    }
}
