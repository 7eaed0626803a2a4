use std::sync::{Arc, LazyLock, RwLock};

use regex::Regex;

use crate::monitor::constants::REDACTED_SEGMENT;

static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}").unwrap()
});

// Placeholder tokens keep an expanded `**` from being re-expanded by the
// later `*` substitution.
const DOUBLE_WILD_TOKEN: &str = "##DOUBLE_WILD##";
const SINGLE_WILD_TOKEN: &str = "##SINGLE_WILD##";

struct PatternEntry {
    pattern: String,
    matcher: Regex,
}

/// Sanitizes URLs before they are reported, preventing sensitive data
/// (IDs, UUIDs) from leaking into analytics.
///
/// It uses a hybrid strategy:
/// 1. **Allowlist patterns**: if the URL matches a configured pattern, the
///    pattern itself is reported as a stable low-cardinality label.
/// 2. **Generic fallback**: UUIDs and purely numeric path segments are
///    replaced with `*`.
pub struct UrlSanitizer {
    patterns: RwLock<Arc<[PatternEntry]>>,
}

impl Default for UrlSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlSanitizer {
    pub fn new() -> Self {
        Self {
            patterns: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// Replaces the active pattern set wholesale.
    ///
    /// Wildcards supported:
    /// - `*` matches a single path segment (no `/`).
    /// - `**` matches any suffix, including further `/` separators.
    ///
    /// Patterns are tried in the order given; the first match wins. Any
    /// string is accepted as a template, so this never fails.
    pub fn configure_patterns(&self, patterns: &[String]) {
        let compiled: Vec<PatternEntry> = patterns
            .iter()
            .filter_map(|pattern| {
                compile_pattern(pattern).map(|matcher| PatternEntry {
                    pattern: pattern.clone(),
                    matcher,
                })
            })
            .collect();
        *self.patterns.write().unwrap() = Arc::from(compiled);
    }

    /// Sanitizes a raw URL or path.
    ///
    /// Returns the matching allowlist pattern verbatim, or the input with
    /// every UUID and every digit-only path segment redacted. Input with
    /// nothing to redact comes back unchanged.
    pub fn sanitize(&self, url: &str) -> String {
        let snapshot = self.patterns.read().unwrap().clone();
        for entry in snapshot.iter() {
            if entry.matcher.is_match(url) {
                return entry.pattern.clone();
            }
        }

        let scrubbed = UUID_PATTERN.replace_all(url, REDACTED_SEGMENT);
        redact_numeric_segments(&scrubbed)
    }
}

/// Turns an allowlist template into an anchored regex. Literal characters
/// (including `.` and `?`) are escaped; `**` must be rewritten before `*`.
fn compile_pattern(pattern: &str) -> Option<Regex> {
    let rewritten = regex::escape(pattern)
        .replace(r"\*\*", DOUBLE_WILD_TOKEN)
        .replace(r"\*", SINGLE_WILD_TOKEN)
        .replace(DOUBLE_WILD_TOKEN, ".*")
        .replace(SINGLE_WILD_TOKEN, "[^/]+");

    Regex::new(&format!("^{rewritten}$")).ok()
}

/// Replaces every path segment made up entirely of digits with `*`.
///
/// Segment boundaries are slashes and the string ends; rewriting segments
/// directly avoids needing lookaround, which the `regex` crate lacks.
fn redact_numeric_segments(input: &str) -> String {
    input
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
                REDACTED_SEGMENT
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
