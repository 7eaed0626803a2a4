use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of values accepted in event/trace property maps, so every
/// provider gets something it can serialize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Map(BTreeMap<String, PropertyValue>),
}

/// Property map attached to events and traces.
pub type Properties = BTreeMap<String, PropertyValue>;

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Integer(value as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<BTreeMap<String, PropertyValue>> for PropertyValue {
    fn from(value: BTreeMap<String, PropertyValue>) -> Self {
        PropertyValue::Map(value)
    }
}

/// A custom event reported by the host application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonitorEvent {
    pub name: String,
    pub properties: Properties,
    pub timestamp: DateTime<Utc>,
}

impl MonitorEvent {
    /// Builds an event stamped with the current wall-clock time.
    pub fn new(name: impl Into<String>, properties: Properties) -> Self {
        Self {
            name: name.into(),
            properties,
            timestamp: Utc::now(),
        }
    }
}

/// Resource categories reported through [`PerformanceMetric::Resource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Cpu,
    Memory,
}

/// A performance measurement routed to the registered providers.
///
/// `Network` URLs are sanitized by the facade before dispatch; `Trace`
/// metrics are produced by the trace tracker when a locally timed trace is
/// stopped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PerformanceMetric {
    Resource {
        resource_type: ResourceType,
        value: f64,
        unit: String,
    },
    Network {
        url: String,
        http_method: String,
        status_code: u16,
        duration_ms: i64,
    },
    ScreenLoad {
        screen_name: String,
        duration_ms: i64,
    },
    Trace {
        name: String,
        duration_ms: i64,
        properties: Option<Properties>,
    },
}
