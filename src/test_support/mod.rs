//! Shared fixtures for the crate's unit tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::monitor::model::{MonitorEvent, PerformanceMetric, Properties};
use crate::provider::{AttributeSink, MonitorProvider, TraceSink};

#[derive(Clone, Debug, PartialEq)]
pub enum TraceCall {
    Start(String, Option<Properties>),
    Stop(String, Option<Properties>),
    Cancel(String),
}

/// Provider that records everything dispatched to it and advertises every
/// optional capability.
#[derive(Default)]
pub struct RecordingProvider {
    key: String,
    events: Mutex<Vec<MonitorEvent>>,
    metrics: Mutex<Vec<PerformanceMetric>>,
    attributes: Mutex<BTreeMap<String, String>>,
    trace_calls: Mutex<Vec<TraceCall>>,
}

impl RecordingProvider {
    pub fn new(key: &str) -> Arc<Self> {
        Arc::new(Self {
            key: key.to_owned(),
            ..Default::default()
        })
    }

    pub fn recorded_events(&self) -> Vec<MonitorEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn recorded_metrics(&self) -> Vec<PerformanceMetric> {
        self.metrics.lock().unwrap().clone()
    }

    pub fn recorded_attributes(&self) -> BTreeMap<String, String> {
        self.attributes.lock().unwrap().clone()
    }

    pub fn recorded_trace_calls(&self) -> Vec<TraceCall> {
        self.trace_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MonitorProvider for RecordingProvider {
    fn key(&self) -> &str {
        &self.key
    }

    async fn track_event(&self, event: &MonitorEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    async fn track_metric(&self, metric: &PerformanceMetric) {
        self.metrics.lock().unwrap().push(metric.clone());
    }

    fn attributes(&self) -> Option<&dyn AttributeSink> {
        Some(self)
    }

    fn traces(&self) -> Option<&dyn TraceSink> {
        Some(self)
    }
}

impl AttributeSink for RecordingProvider {
    fn set_attribute(&self, key: &str, value: &str) {
        self.attributes
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove_attribute(&self, key: &str) {
        self.attributes.lock().unwrap().remove(key);
    }
}

#[async_trait]
impl TraceSink for RecordingProvider {
    async fn start_trace(&self, trace_key: &str, properties: Option<&Properties>) {
        self.trace_calls
            .lock()
            .unwrap()
            .push(TraceCall::Start(trace_key.to_owned(), properties.cloned()));
    }

    async fn stop_trace(&self, trace_key: &str, properties: Option<&Properties>) {
        self.trace_calls
            .lock()
            .unwrap()
            .push(TraceCall::Stop(trace_key.to_owned(), properties.cloned()));
    }

    async fn cancel_trace(&self, trace_key: &str) {
        self.trace_calls
            .lock()
            .unwrap()
            .push(TraceCall::Cancel(trace_key.to_owned()));
    }
}

/// Provider with only the required capability set — no attributes, no
/// native traces.
#[derive(Default)]
pub struct MinimalProvider {
    key: String,
    events: Mutex<Vec<MonitorEvent>>,
    metrics: Mutex<Vec<PerformanceMetric>>,
}

impl MinimalProvider {
    pub fn new(key: &str) -> Arc<Self> {
        Arc::new(Self {
            key: key.to_owned(),
            ..Default::default()
        })
    }

    pub fn recorded_events(&self) -> Vec<MonitorEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn recorded_metrics(&self) -> Vec<PerformanceMetric> {
        self.metrics.lock().unwrap().clone()
    }
}

#[async_trait]
impl MonitorProvider for MinimalProvider {
    fn key(&self) -> &str {
        &self.key
    }

    async fn track_event(&self, event: &MonitorEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    async fn track_metric(&self, metric: &PerformanceMetric) {
        self.metrics.lock().unwrap().push(metric.clone());
    }
}
