//! Request-scoped diagnostic context threaded through the calculation pipeline.

use std::time::{SystemTime, UNIX_EPOCH};

/// Carries a correlation ID for a single `compute_panchangam` call. Built
/// fresh per request rather than stored behind a global, since nothing in
/// this pipeline is a singleton.
#[derive(Debug, Clone)]
pub struct ObservabilityContext {
    pub correlation_id: String,
}

impl ObservabilityContext {
    pub fn new() -> Self {
        ObservabilityContext { correlation_id: generate_correlation_id() }
    }
}

impl Default for ObservabilityContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Format: `err_<unix-nanos>_<thread-id>`.
pub fn generate_correlation_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("err_{}_{:?}", nanos, std::thread::current().id())
}
