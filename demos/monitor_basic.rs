//! Minimal walkthrough: register a console provider, then report an event,
//! a metric, and a locally timed trace.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use monitorkit_rs_sdk::monitor::{
    Monitor, MonitorSettings, MonitorEvent, PerformanceMetric, Properties, PropertyValue,
    ResourceType,
};
use monitorkit_rs_sdk::provider::MonitorProvider;

struct ConsoleProvider;

#[async_trait]
impl MonitorProvider for ConsoleProvider {
    fn key(&self) -> &str {
        "console"
    }

    async fn track_event(&self, event: &MonitorEvent) {
        println!("event: {} {:?}", event.name, event.properties);
    }

    async fn track_metric(&self, metric: &PerformanceMetric) {
        println!("metric: {metric:?}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let monitor = Monitor::initialize(MonitorSettings::default());
    monitor.add_provider(Arc::new(ConsoleProvider));

    let mut properties = Properties::new();
    properties.insert("screen".to_owned(), PropertyValue::from("home"));
    monitor.track_event("app_open", properties, None).await?;

    monitor
        .track_metric(
            PerformanceMetric::Resource {
                resource_type: ResourceType::Memory,
                value: 184.2,
                unit: "MB".to_owned(),
            },
            None,
        )
        .await;

    monitor.start_trace("image_processing", None).await;
    tokio::time::sleep(Duration::from_millis(25)).await;
    let mut outcome = Properties::new();
    outcome.insert("result".to_owned(), PropertyValue::from("ok"));
    monitor.stop_trace("image_processing", Some(outcome)).await;

    Ok(())
}
