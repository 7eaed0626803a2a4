//! Capability traits implemented by host applications to bridge the SDK to
//! third-party monitoring backends (e.g. Firebase, Sentry, Datadog).

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::monitor::model::{MonitorEvent, PerformanceMetric, Properties};

/// Required capability set every monitoring backend implements.
///
/// Optional capabilities (attributes, native traces) are discovered through
/// the `attributes()`/`traces()` accessors rather than no-op default method
/// bodies; a provider that supports one returns `Some(self)`.
#[async_trait]
pub trait MonitorProvider: Send + Sync {
    /// Unique identifier for the provider, used for targeted dispatch and
    /// removal.
    fn key(&self) -> &str;

    /// Sends a custom event to the monitoring service.
    async fn track_event(&self, event: &MonitorEvent);

    /// Sends a performance metric to the monitoring service.
    async fn track_metric(&self, metric: &PerformanceMetric);

    /// Attribute capability, when the backend supports global attributes.
    fn attributes(&self) -> Option<&dyn AttributeSink> {
        None
    }

    /// Native trace capability, when the backend has its own trace
    /// primitives.
    fn traces(&self) -> Option<&dyn TraceSink> {
        None
    }
}

/// Optional capability: global key/value attributes attached to everything
/// the backend reports.
pub trait AttributeSink: Send + Sync {
    fn set_attribute(&self, key: &str, value: &str);

    fn set_attributes(&self, attributes: &BTreeMap<String, String>) {
        for (key, value) in attributes {
            self.set_attribute(key, value);
        }
    }

    fn remove_attribute(&self, key: &str);

    fn remove_attributes(&self, keys: &[String]) {
        for key in keys {
            self.remove_attribute(key);
        }
    }
}

/// Optional capability: backend-native trace lifecycle. Used only when the
/// monitor runs in native-tracing mode.
#[async_trait]
pub trait TraceSink: Send + Sync {
    async fn start_trace(&self, trace_key: &str, properties: Option<&Properties>);

    async fn stop_trace(&self, trace_key: &str, properties: Option<&Properties>);

    async fn cancel_trace(&self, trace_key: &str);
}
