pub const MONITOR_LOGGER_NAME: &str = "@monitorkit/monitor";

/// Marker substituted for redacted URL parts.
pub const REDACTED_SEGMENT: &str = "*";
