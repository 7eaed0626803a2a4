//! Native-tracing mode: trace lifecycle calls are forwarded verbatim to a
//! provider with its own trace primitives instead of being timed locally.

use std::sync::Arc;

use async_trait::async_trait;
use monitorkit_rs_sdk::monitor::{
    Monitor, MonitorSettings, MonitorEvent, PerformanceMetric, Properties,
};
use monitorkit_rs_sdk::provider::{MonitorProvider, TraceSink};

struct NativeTracer;

#[async_trait]
impl MonitorProvider for NativeTracer {
    fn key(&self) -> &str {
        "native-tracer"
    }

    async fn track_event(&self, _event: &MonitorEvent) {}

    async fn track_metric(&self, _metric: &PerformanceMetric) {}

    fn traces(&self) -> Option<&dyn TraceSink> {
        Some(self)
    }
}

#[async_trait]
impl TraceSink for NativeTracer {
    async fn start_trace(&self, trace_key: &str, properties: Option<&Properties>) {
        println!("native start: {trace_key} {properties:?}");
    }

    async fn stop_trace(&self, trace_key: &str, properties: Option<&Properties>) {
        println!("native stop: {trace_key} {properties:?}");
    }

    async fn cancel_trace(&self, trace_key: &str) {
        println!("native cancel: {trace_key}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let monitor = Monitor::initialize(MonitorSettings {
        url_patterns: Vec::new(),
        use_native_tracing: true,
    });
    monitor.add_provider(Arc::new(NativeTracer));

    monitor.start_trace("checkout", None).await;
    monitor.stop_trace("checkout", None).await;

    monitor.start_trace("aborted_upload", None).await;
    monitor.cancel_trace("aborted_upload").await;
}
