//! Provider fan-out registry.
//!
//! Holds the registered [`MonitorProvider`]s and broadcasts events, metrics,
//! attributes, and trace signals to all of them, or to the one matching a
//! caller-supplied key. Optimized for high-frequency reads and rare writes:
//! the provider list is an immutable snapshot swapped wholesale on every
//! mutation, so dispatch never holds a lock while providers run.


use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::monitor::model::{MonitorEvent, PerformanceMetric, Properties};
use crate::provider::MonitorProvider;

type ProviderList = Arc<[Arc<dyn MonitorProvider>]>;

#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<ProviderList>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(Arc::from(Vec::new())),
        }
    }

    pub fn add_provider(&self, provider: Arc<dyn MonitorProvider>) {
        let mut guard = self.providers.write().unwrap();
        let mut next: Vec<Arc<dyn MonitorProvider>> = guard.iter().cloned().collect();
        next.push(provider);
        *guard = Arc::from(next);
    }

    pub fn remove_provider(&self, provider_key: &str) {
        let mut guard = self.providers.write().unwrap();
        let next: Vec<Arc<dyn MonitorProvider>> = guard
            .iter()
            .filter(|provider| provider.key() != provider_key)
            .cloned()
            .collect();
        *guard = Arc::from(next);
    }

    pub fn provider_count(&self) -> usize {
        self.snapshot().len()
    }

    pub async fn dispatch_event(&self, event: &MonitorEvent, target: Option<&str>) {
        for provider in self.select(target) {
            provider.track_event(event).await;
        }
    }

    pub async fn dispatch_metric(&self, metric: &PerformanceMetric, target: Option<&str>) {
        for provider in self.select(target) {
            provider.track_metric(metric).await;
        }
    }

    pub fn set_attribute(&self, key: &str, value: &str, target: Option<&str>) {
        for provider in self.select(target) {
            if let Some(sink) = provider.attributes() {
                sink.set_attribute(key, value);
            }
        }
    }

    pub fn set_attributes(&self, attributes: &BTreeMap<String, String>, target: Option<&str>) {
        for provider in self.select(target) {
            if let Some(sink) = provider.attributes() {
                sink.set_attributes(attributes);
            }
        }
    }

    pub fn remove_attribute(&self, key: &str, target: Option<&str>) {
        for provider in self.select(target) {
            if let Some(sink) = provider.attributes() {
                sink.remove_attribute(key);
            }
        }
    }

    pub fn remove_attributes(&self, keys: &[String], target: Option<&str>) {
        for provider in self.select(target) {
            if let Some(sink) = provider.attributes() {
                sink.remove_attributes(keys);
            }
        }
    }

    pub async fn dispatch_trace_start(
        &self,
        trace_key: &str,
        properties: Option<&Properties>,
        target: Option<&str>,
    ) {
        for provider in self.select(target) {
            if let Some(sink) = provider.traces() {
                sink.start_trace(trace_key, properties).await;
            }
        }
    }

    pub async fn dispatch_trace_stop(
        &self,
        trace_key: &str,
        properties: Option<&Properties>,
        target: Option<&str>,
    ) {
        for provider in self.select(target) {
            if let Some(sink) = provider.traces() {
                sink.stop_trace(trace_key, properties).await;
            }
        }
    }

    pub async fn dispatch_trace_cancel(&self, trace_key: &str, target: Option<&str>) {
        for provider in self.select(target) {
            if let Some(sink) = provider.traces() {
                sink.cancel_trace(trace_key).await;
            }
        }
    }

    fn snapshot(&self) -> ProviderList {
        self.providers.read().unwrap().clone()
    }

    fn select(&self, target: Option<&str>) -> Vec<Arc<dyn MonitorProvider>> {
        let snapshot = self.snapshot();
        match target {
            Some(key) => snapshot
                .iter()
                .filter(|provider| provider.key() == key)
                .cloned()
                .collect(),
            None => snapshot.iter().cloned().collect(),
        }
    }
}
