//! Core monitoring surface: the [`Monitor`] facade, the domain model, the
//! URL sanitizer, and the trace tracker.

mod api;
mod constants;
mod error;
pub mod model;
mod sanitizer;
mod tracker;

#[doc(inline)]
pub use api::{Monitor, MonitorSettings};

#[doc(inline)]
pub use constants::{MONITOR_LOGGER_NAME, REDACTED_SEGMENT};

#[doc(inline)]
pub use error::{
    internal_error, invalid_argument, MonitorError, MonitorErrorCode, MonitorResult,
};

#[doc(inline)]
pub use model::{
    MonitorEvent, PerformanceMetric, Properties, PropertyValue, ResourceType,
};

#[doc(inline)]
pub use sanitizer::UrlSanitizer;

#[doc(inline)]
pub use tracker::TraceTracker;
