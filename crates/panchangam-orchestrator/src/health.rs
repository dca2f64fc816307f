//! Health probe, independent of any transport. The external HTTP surface
//! wraps this in a handler; this crate just answers the question.

use panchangam_core::{CheckResult, HealthChecks, HealthReport, HealthStatus};

use crate::PanchangamOrchestrator;

pub fn health(orchestrator: &PanchangamOrchestrator) -> HealthReport {
    let provider_check = CheckResult::healthy(format!(
        "active provider: {}",
        orchestrator.provider_manager.active_provider_name()
    ));

    let orchestrator_check = CheckResult::healthy("ready");

    let status = if matches!(provider_check.status, HealthStatus::Unhealthy)
        || matches!(orchestrator_check.status, HealthStatus::Unhealthy)
    {
        HealthStatus::Unhealthy
    } else if matches!(provider_check.status, HealthStatus::Degraded)
        || matches!(orchestrator_check.status, HealthStatus::Degraded)
    {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        checks: Some(HealthChecks { provider_manager: provider_check, orchestrator: orchestrator_check }),
    }
}
