//! Error types for the panchangam calculation pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main error type surfaced by every component.
#[derive(Debug, thiserror::Error)]
pub enum PanchangamError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("ephemeris calculation failed: {0}")]
    Calculation(String),

    #[error("all ephemeris providers exhausted: {0}")]
    ProviderExhausted(String),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("request exceeded deadline of {0:?}")]
    DeadlineExceeded(std::time::Duration),

    #[error("request cancelled")]
    Cancellation,

    #[error("internal error: {0}")]
    Internal(String),
}

impl PanchangamError {
    pub fn category(&self) -> Category {
        match self {
            PanchangamError::Validation(_) => Category::Validation,
            PanchangamError::Calculation(_) => Category::Calculation,
            PanchangamError::ProviderExhausted(_) => Category::Calculation,
            PanchangamError::Cache(_) => Category::Resource,
            PanchangamError::Config(_) => Category::Internal,
            PanchangamError::UnknownRegion(_) => Category::Validation,
            PanchangamError::DeadlineExceeded(_) => Category::Resource,
            PanchangamError::Cancellation => Category::Resource,
            PanchangamError::Internal(_) => Category::Internal,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            PanchangamError::Validation(_) => Severity::Low,
            PanchangamError::UnknownRegion(_) => Severity::Low,
            PanchangamError::Cache(_) => Severity::Medium,
            PanchangamError::Calculation(_) => Severity::Medium,
            PanchangamError::ProviderExhausted(_) => Severity::High,
            PanchangamError::DeadlineExceeded(_) => Severity::High,
            PanchangamError::Cancellation => Severity::Medium,
            PanchangamError::Config(_) => Severity::High,
            PanchangamError::Internal(_) => Severity::Critical,
        }
    }

    pub fn retryable(&self) -> bool {
        matches!(
            self,
            PanchangamError::ProviderExhausted(_)
                | PanchangamError::DeadlineExceeded(_)
                | PanchangamError::Cache(_)
        )
    }

    /// Whether this error reflects a known, handled condition (bad input,
    /// unsupported region) as opposed to something the system didn't
    /// anticipate.
    pub fn expected(&self) -> bool {
        matches!(
            self,
            PanchangamError::Validation(_) | PanchangamError::UnknownRegion(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Validation,
    Calculation,
    Network,
    Resource,
    Internal,
}

/// Envelope wrapping a `PanchangamError` with the diagnostic context needed
/// to triage it without reproducing the request.
#[derive(Debug, Serialize, Deserialize)]
pub struct EnhancedError {
    pub message: String,
    pub severity: Severity,
    pub category: Category,
    pub operation: String,
    pub component: String,
    pub correlation_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub retryable: bool,
    pub expected: bool,
    #[serde(default)]
    pub additional: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_snapshot: Option<String>,
}

impl EnhancedError {
    pub fn from_error(
        err: &PanchangamError,
        operation: impl Into<String>,
        component: impl Into<String>,
        correlation_id: impl Into<String>,
    ) -> Self {
        let severity = err.severity();
        let stack_snapshot = matches!(severity, Severity::High | Severity::Critical)
            .then(|| format!("{:?}", backtrace::Backtrace::new()));

        EnhancedError {
            message: err.to_string(),
            severity,
            category: err.category(),
            operation: operation.into(),
            component: component.into(),
            correlation_id: correlation_id.into(),
            timestamp: chrono::Utc::now(),
            retryable: err.retryable(),
            expected: err.expected(),
            additional: HashMap::new(),
            stack_snapshot,
        }
    }

    pub fn with_additional(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.additional.insert(key.into(), value);
        self
    }
}
