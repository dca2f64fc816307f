//! Validates a request, resolves regional conventions, fans the five anga
//! calculators out concurrently, partitions the muhurtas, and assembles a
//! `PanchangamResult` under a deadline.
//!
//! The parallel fan-out and `#[instrument]` tracing here are grounded in
//! the workflow orchestrator this crate started from; the registry of
//! swappable engines it used to coordinate is gone; there's exactly one
//! pipeline; the five anga futures are joined with `tokio::try_join!`
//! instead of a dynamic `futures::future::join_all` over a lookup table.

pub mod festivals;
pub mod health;

use std::sync::Arc;
use std::time::Instant as StdInstant;

use chrono::{Datelike, TimeZone};
use tracing::{info, instrument, warn};

use panchangam_cache::ProviderManager;
use panchangam_core::{
    EnhancedError, GeographicLocation, JulianDay, ObservabilityContext, PanchangamConfig, PanchangamError,
    PanchangamRequest, PanchangamResult, Provenance,
};
use panchangam_ephemeris::{AnalyticProvider, EphemerisProvider, TabularProvider};
use panchangam_metrics::PanchangamMetrics;

pub use health::health;

pub struct PanchangamOrchestrator {
    pub(crate) provider_manager: Arc<ProviderManager>,
    config: PanchangamConfig,
    metrics: Arc<PanchangamMetrics>,
}

impl PanchangamOrchestrator {
    pub fn new(config: PanchangamConfig) -> Self {
        let providers: Vec<Arc<dyn EphemerisProvider>> = vec![
            Arc::new(TabularProvider::new(config.default_ayanamsa)),
            Arc::new(AnalyticProvider::new(config.default_ayanamsa)),
        ];
        let provider_manager = Arc::new(ProviderManager::new(providers, config.provider_cache_capacity));

        PanchangamOrchestrator { provider_manager, config, metrics: Arc::new(PanchangamMetrics::new()) }
    }

    #[instrument(skip(self, request), fields(correlation_id))]
    pub async fn compute(&self, request: PanchangamRequest) -> Result<PanchangamResult, EnhancedError> {
        let ctx = ObservabilityContext::new();
        tracing::Span::current().record("correlation_id", &ctx.correlation_id.as_str());

        match tokio::time::timeout(self.config.request_deadline, self.compute_inner(request)).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(err)) => {
                self.metrics.record_error(&err);
                Err(EnhancedError::from_error(&err, "compute_panchangam", "panchangam-orchestrator", ctx.correlation_id))
            }
            Err(_) => {
                let err = PanchangamError::DeadlineExceeded(self.config.request_deadline);
                self.metrics.record_error(&err);
                Err(EnhancedError::from_error(&err, "compute_panchangam", "panchangam-orchestrator", ctx.correlation_id))
            }
        }
    }

    async fn compute_inner(&self, request: PanchangamRequest) -> Result<PanchangamResult, PanchangamError> {
        let start = StdInstant::now();
        validate_request(&request)?;

        let mut warnings = Vec::new();

        let (tz, tz_warning) = panchangam_core::resolve_timezone(&request.location.timezone);
        if let Some(w) = tz_warning {
            warn!(%w, "timezone fallback");
            warnings.push(w);
        }

        let resolved_region = panchangam_regional::resolve(request.region.as_deref(), request.method);
        if let Some(w) = &resolved_region.warning {
            warnings.push(w.clone());
        }

        let ayanamsa = request.ayanamsa.unwrap_or(self.config.default_ayanamsa);
        let jd = JulianDay::from_utc(request.date);

        let local_date = request.date.with_timezone(&tz);
        let local_midnight_naive = local_date
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| PanchangamError::Internal("failed to construct local midnight".to_string()))?;
        let local_midnight_utc = tz
            .from_local_datetime(&local_midnight_naive)
            .single()
            .unwrap_or_else(|| chrono::Utc.from_utc_datetime(&local_midnight_naive).with_timezone(&tz))
            .with_timezone(&chrono::Utc);
        let local_midnight_jd = JulianDay::from_utc(local_midnight_utc);

        let sun_times = panchangam_riseset::compute_sun_times(&request.location, local_midnight_jd);

        let manager = self.provider_manager.clone();
        let (tithi, nakshatra, yoga, karana) = tokio::try_join!(
            panchangam_angas::compute_tithi(&manager, jd),
            panchangam_angas::compute_nakshatra(&manager, jd, ayanamsa),
            panchangam_angas::compute_yoga(&manager, jd, ayanamsa),
            panchangam_angas::compute_karana(&manager, jd),
        )?;

        let vara = match sun_times.sunrise {
            Some(sunrise) => panchangam_angas::compute_vara(sunrise.with_timezone(&tz).date_naive()),
            None => {
                warnings.push("no sunrise at this latitude today; Vara computed from local midnight instead of sunrise".to_string());
                panchangam_angas::compute_vara(local_date.date_naive())
            }
        };

        let events = panchangam_muhurta::compute_events(&sun_times, vara.index);
        let festival_tags = festivals::tag(&tithi, &nakshatra);

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.metrics.record_calculation(elapsed_ms);

        info!(
            tithi = %tithi.name,
            nakshatra = %nakshatra.name,
            vara = %vara.name,
            elapsed_ms,
            "panchangam computed"
        );

        Ok(PanchangamResult {
            date: request.date,
            location: request.location,
            tithi,
            nakshatra,
            yoga,
            karana,
            vara,
            sun_times,
            events,
            festivals: festival_tags,
            provenance: Provenance {
                method: resolved_region.method,
                calendar_system: resolved_region.calendar_system,
                ayanamsa,
                ephemeris_provider: self.provider_manager.active_provider_name().to_string(),
                calculation_time_ms: elapsed_ms,
                cached: false,
            },
            warnings,
        })
    }
}

fn validate_request(request: &PanchangamRequest) -> Result<(), PanchangamError> {
    let GeographicLocation { latitude, longitude, .. } = request.location;

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(PanchangamError::Validation(format!("latitude {} out of range [-90, 90]", latitude)));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(PanchangamError::Validation(format!("longitude {} out of range [-180, 180]", longitude)));
    }
    if request.date.year() < 1900 || request.date.year() > 2100 {
        return Err(PanchangamError::Validation(format!(
            "date year {} outside supported ephemeris coverage (1900-2100)",
            request.date.year()
        )));
    }
    Ok(())
}
