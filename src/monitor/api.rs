use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::logger::Logger;
use crate::monitor::constants::MONITOR_LOGGER_NAME;
use crate::monitor::error::{invalid_argument, MonitorResult};
use crate::monitor::model::{MonitorEvent, PerformanceMetric, Properties};
use crate::monitor::sanitizer::UrlSanitizer;
use crate::monitor::tracker::TraceTracker;
use crate::provider::MonitorProvider;
use crate::registry::ProviderRegistry;

/// Immutable configuration consumed by [`Monitor::initialize`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonitorSettings {
    /// Allowlist patterns applied to `Network` metric URLs.
    pub url_patterns: Vec<String>,
    /// When true, trace lifecycle calls are forwarded to providers with a
    /// native trace capability instead of being timed locally.
    pub use_native_tracing: bool,
}

/// Main entry point for the MonitorKit library.
///
/// Coordinates monitoring operations and routes them to the registered
/// providers. Handles are cheap clones sharing one inner state.
#[derive(Clone)]
pub struct Monitor {
    inner: Arc<MonitorInner>,
}

struct MonitorInner {
    settings: MonitorSettings,
    registry: ProviderRegistry,
    sanitizer: UrlSanitizer,
    tracker: TraceTracker,
    use_native_tracing: AtomicBool,
    logger: Logger,
}

impl Monitor {
    /// Builds a monitor from the given settings. The registry starts empty;
    /// providers are attached with [`Monitor::add_provider`].
    pub fn initialize(settings: MonitorSettings) -> Self {
        let sanitizer = UrlSanitizer::new();
        sanitizer.configure_patterns(&settings.url_patterns);
        let use_native_tracing = AtomicBool::new(settings.use_native_tracing);

        Self {
            inner: Arc::new(MonitorInner {
                settings,
                registry: ProviderRegistry::new(),
                sanitizer,
                tracker: TraceTracker::new(),
                use_native_tracing,
                logger: Logger::new(MONITOR_LOGGER_NAME),
            }),
        }
    }

    pub fn settings(&self) -> &MonitorSettings {
        &self.inner.settings
    }

    pub fn logger(&self) -> &Logger {
        &self.inner.logger
    }

    /// Adds a monitoring provider.
    pub fn add_provider(&self, provider: Arc<dyn MonitorProvider>) {
        self.inner.logger.debug(format!(
            "Registered provider '{}'.",
            provider.key()
        ));
        self.inner.registry.add_provider(provider);
    }

    /// Removes every provider registered under `provider_key`.
    pub fn remove_provider(&self, provider_key: &str) {
        self.inner.registry.remove_provider(provider_key);
    }

    /// Replaces the URL patterns used for automatic sanitization of
    /// `Network` metrics.
    ///
    /// Example: `["api/users/*/profile", "auth/**"]`.
    pub fn configure_url_patterns(&self, patterns: &[String]) {
        self.inner.sanitizer.configure_patterns(patterns);
    }

    pub fn use_native_tracing(&self) -> bool {
        self.inner.use_native_tracing.load(Ordering::SeqCst)
    }

    /// Switches between locally timed traces and provider-native tracing.
    pub fn set_use_native_tracing(&self, enabled: bool) {
        self.inner
            .use_native_tracing
            .store(enabled, Ordering::SeqCst);
    }

    /// Tracks a custom event.
    ///
    /// `provider_key` targets a single provider; `None` broadcasts.
    pub async fn track_event(
        &self,
        name: &str,
        properties: Properties,
        provider_key: Option<&str>,
    ) -> MonitorResult<()> {
        if name.trim().is_empty() {
            return Err(invalid_argument("Event name must not be empty"));
        }
        let event = MonitorEvent::new(name, properties);
        self.inner.registry.dispatch_event(&event, provider_key).await;
        Ok(())
    }

    /// Tracks a performance metric.
    ///
    /// `Network` metrics have their URL sanitized first; sanitization is
    /// orthogonal to the tracing mode.
    pub async fn track_metric(&self, metric: PerformanceMetric, provider_key: Option<&str>) {
        let processed = match metric {
            PerformanceMetric::Network {
                url,
                http_method,
                status_code,
                duration_ms,
            } => PerformanceMetric::Network {
                url: self.inner.sanitizer.sanitize(&url),
                http_method,
                status_code,
                duration_ms,
            },
            other => other,
        };
        self.inner
            .registry
            .dispatch_metric(&processed, provider_key)
            .await;
    }

    /// Sets a global attribute on providers with the attribute capability.
    pub fn set_attribute(&self, key: &str, value: &str, provider_key: Option<&str>) {
        self.inner.registry.set_attribute(key, value, provider_key);
    }

    pub fn set_attributes(
        &self,
        attributes: &BTreeMap<String, String>,
        provider_key: Option<&str>,
    ) {
        self.inner.registry.set_attributes(attributes, provider_key);
    }

    pub fn remove_attribute(&self, key: &str, provider_key: Option<&str>) {
        self.inner.registry.remove_attribute(key, provider_key);
    }

    pub fn remove_attributes(&self, keys: &[String], provider_key: Option<&str>) {
        self.inner.registry.remove_attributes(keys, provider_key);
    }

    /// Starts a trace timer. Starting a key that is already active
    /// restarts it.
    ///
    /// In native-tracing mode the call is forwarded to the providers and no
    /// local state is touched.
    pub async fn start_trace(&self, trace_key: &str, properties: Option<Properties>) {
        if self.use_native_tracing() {
            self.inner
                .registry
                .dispatch_trace_start(trace_key, properties.as_ref(), None)
                .await;
            return;
        }
        self.inner.tracker.begin(trace_key, properties).await;
    }

    /// Stops a trace, computes its duration, and dispatches the resulting
    /// metric. Stopping a trace that was never started dispatches nothing
    /// and logs a warning.
    pub async fn stop_trace(&self, trace_key: &str, properties: Option<Properties>) {
        if self.use_native_tracing() {
            self.inner
                .registry
                .dispatch_trace_stop(trace_key, properties.as_ref(), None)
                .await;
            return;
        }

        match self.inner.tracker.finish(trace_key, properties).await {
            Some(metric) => self.track_metric(metric, None).await,
            None => self.inner.logger.warn(format!(
                "Attempted to stop trace '{trace_key}' but it was not active."
            )),
        }
    }

    /// Cancels an active trace without producing any metric. Useful when
    /// the traced work failed or was aborted.
    pub async fn cancel_trace(&self, trace_key: &str) {
        if self.use_native_tracing() {
            self.inner
                .registry
                .dispatch_trace_cancel(trace_key, None)
                .await;
            return;
        }
        self.inner.tracker.cancel(trace_key).await;
    }
}
