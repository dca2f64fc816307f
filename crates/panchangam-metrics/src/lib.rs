//! Prometheus metrics for the panchangam calculation engine.
//!
//! Each [`PanchangamMetrics`] owns its own `Registry` rather than registering
//! into a process-wide global: an orchestrator (and its tests) may construct
//! more than one instance, and a shared `lazy_static` registry would panic on
//! the second registration of the same metric name.

use std::sync::Arc;

use prometheus::{Counter, Gauge, Histogram, HistogramOpts, Registry};

use panchangam_core::PanchangamError;

pub struct PanchangamMetrics {
    registry: Registry,

    pub requests_total: Counter,
    pub request_duration: Histogram,

    pub calculations_total: Counter,
    pub calculation_duration: Histogram,
    pub calculation_errors_total: Counter,

    pub cache_hits: Counter,
    pub cache_misses: Counter,

    pub validation_errors: Counter,
    pub provider_exhausted_errors: Counter,
    pub deadline_exceeded_errors: Counter,

    pub uptime_seconds: Gauge,
}

impl PanchangamMetrics {
    pub fn new() -> Self {
        Self::try_new().expect("panchangam metric descriptors are statically valid")
    }

    pub fn try_new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = Counter::new("panchangam_requests_total", "Total number of panchangam requests")?;
        let request_duration = Histogram::with_opts(HistogramOpts::new(
            "panchangam_request_duration_ms",
            "End-to-end request duration in milliseconds",
        ))?;

        let calculations_total =
            Counter::new("panchangam_calculations_total", "Total number of completed panchangam calculations")?;
        let calculation_duration = Histogram::with_opts(HistogramOpts::new(
            "panchangam_calculation_duration_ms",
            "Calculation pipeline duration in milliseconds",
        ))?;
        let calculation_errors_total =
            Counter::new("panchangam_calculation_errors_total", "Total number of calculation errors")?;

        let cache_hits = Counter::new("panchangam_cache_hits_total", "Total ephemeris cache hits")?;
        let cache_misses = Counter::new("panchangam_cache_misses_total", "Total ephemeris cache misses")?;

        let validation_errors =
            Counter::new("panchangam_validation_errors_total", "Total requests rejected by validation")?;
        let provider_exhausted_errors = Counter::new(
            "panchangam_provider_exhausted_errors_total",
            "Total requests where every ephemeris provider failed",
        )?;
        let deadline_exceeded_errors =
            Counter::new("panchangam_deadline_exceeded_errors_total", "Total requests that exceeded their deadline")?;

        let uptime_seconds = Gauge::new("panchangam_uptime_seconds", "Process uptime in seconds")?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;
        registry.register(Box::new(calculations_total.clone()))?;
        registry.register(Box::new(calculation_duration.clone()))?;
        registry.register(Box::new(calculation_errors_total.clone()))?;
        registry.register(Box::new(cache_hits.clone()))?;
        registry.register(Box::new(cache_misses.clone()))?;
        registry.register(Box::new(validation_errors.clone()))?;
        registry.register(Box::new(provider_exhausted_errors.clone()))?;
        registry.register(Box::new(deadline_exceeded_errors.clone()))?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration,
            calculations_total,
            calculation_duration,
            calculation_errors_total,
            cache_hits,
            cache_misses,
            validation_errors,
            provider_exhausted_errors,
            deadline_exceeded_errors,
            uptime_seconds,
        })
    }

    /// Record a completed calculation and its wall-clock duration in milliseconds.
    pub fn record_calculation(&self, duration_ms: f64) {
        self.requests_total.inc();
        self.calculations_total.inc();
        self.request_duration.observe(duration_ms);
        self.calculation_duration.observe(duration_ms);
    }

    /// Record a failed calculation, bucketed by error category.
    pub fn record_error(&self, error: &PanchangamError) {
        self.calculation_errors_total.inc();
        match error {
            PanchangamError::Validation(_) | PanchangamError::UnknownRegion(_) => self.validation_errors.inc(),
            PanchangamError::ProviderExhausted(_) => self.provider_exhausted_errors.inc(),
            PanchangamError::DeadlineExceeded(_) => self.deadline_exceeded_errors.inc(),
            _ => {}
        }
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.inc();
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.inc();
    }

    pub fn set_uptime(&self, seconds: f64) {
        self.uptime_seconds.set(seconds);
    }

    /// Encode all registered metrics in Prometheus text exposition format.
    pub fn get_metrics_text(&self) -> Result<String, Box<dyn std::error::Error>> {
        use prometheus::Encoder;
        let mut buffer = Vec::new();
        let encoder = prometheus::TextEncoder::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl Default for PanchangamMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Periodically updates the uptime gauge. Spawned once by the CLI binary.
pub struct UptimeCollector {
    metrics: Arc<PanchangamMetrics>,
    start_time: std::time::Instant,
}

impl UptimeCollector {
    pub fn new(metrics: Arc<PanchangamMetrics>) -> Self {
        Self { metrics, start_time: std::time::Instant::now() }
    }

    pub async fn start_collection_loop(&self) {
        let metrics = self.metrics.clone();
        let start_time = self.start_time;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(30));
            loop {
                interval.tick().await;
                metrics.set_uptime(start_time.elapsed().as_secs_f64());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calculations_and_errors() {
        let metrics = PanchangamMetrics::new();
        metrics.record_calculation(12.5);
        metrics.record_error(&PanchangamError::Validation("bad latitude".to_string()));
        metrics.record_cache_hit();
        metrics.record_cache_miss();

        let text = metrics.get_metrics_text().expect("should encode metrics text");
        assert!(text.contains("panchangam_requests_total"));
        assert!(text.contains("panchangam_validation_errors_total"));
    }

    #[test]
    fn independent_instances_do_not_collide() {
        let a = PanchangamMetrics::new();
        let b = PanchangamMetrics::new();
        a.record_calculation(1.0);
        b.record_calculation(2.0);
    }
}
