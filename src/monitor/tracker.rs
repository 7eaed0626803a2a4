use std::collections::HashMap;
use std::time::Instant;

use async_lock::Mutex;

use crate::monitor::model::{PerformanceMetric, Properties};

#[derive(Debug)]
struct TraceContext {
    start: Instant,
    properties: Option<Properties>,
}

/// Local stopwatch for caller-named traces.
///
/// A trace key moves `absent -> active -> absent`; starting an already
/// active key restarts it. The map's remove-if-present is the only consumer
/// of a context, so a racing stop/cancel pair acts on it at most once.
#[derive(Debug, Default)]
pub struct TraceTracker {
    active: Mutex<HashMap<String, TraceContext>>,
}

impl TraceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the stopwatch for `trace_key`.
    pub async fn begin(&self, trace_key: &str, properties: Option<Properties>) {
        self.active.lock().await.insert(
            trace_key.to_owned(),
            TraceContext {
                start: Instant::now(),
                properties,
            },
        );
    }

    /// Consumes the active context for `trace_key` and produces the trace
    /// metric, merging finish-time properties over start-time ones.
    ///
    /// Returns `None` when the key has no active context.
    pub async fn finish(
        &self,
        trace_key: &str,
        properties: Option<Properties>,
    ) -> Option<PerformanceMetric> {
        let context = self.active.lock().await.remove(trace_key)?;
        let duration_ms = context.start.elapsed().as_millis() as i64;

        Some(PerformanceMetric::Trace {
            name: trace_key.to_owned(),
            duration_ms,
            properties: merge_properties(context.properties, properties),
        })
    }

    /// Discards the active context for `trace_key`, if any. No metric is
    /// ever produced.
    pub async fn cancel(&self, trace_key: &str) {
        self.active.lock().await.remove(trace_key);
    }

    #[cfg(test)]
    pub(crate) async fn is_active(&self, trace_key: &str) -> bool {
        self.active.lock().await.contains_key(trace_key)
    }
}

fn merge_properties(
    start: Option<Properties>,
    finish: Option<Properties>,
) -> Option<Properties> {
    let mut merged = start.unwrap_or_default();
    if let Some(finish) = finish {
        merged.extend(finish);
    }
    if merged.is_empty() {
        None
    } else {
        Some(merged)
    }
}
