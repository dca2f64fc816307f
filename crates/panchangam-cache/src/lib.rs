//! Provider manager: a single bounded LRU in front of the ephemeris
//! provider fallback chain, with single-flight coalescing so that
//! concurrent requests for the same instant compute it only once.

pub mod l1_cache;

use std::sync::Arc;

use dashmap::DashMap;
use panchangam_core::{Ayanamsa, EphemerisSample, JulianDay, PanchangamError};
use panchangam_ephemeris::EphemerisProvider;
use tokio::sync::OnceCell;

pub use l1_cache::{CacheStats, L1Cache};

/// A deterministic, collision-resistant key for an ephemeris lookup.
///
/// JD is rounded to the microday before hashing so that floating-point
/// jitter from repeated UTC<->JD conversions doesn't fragment the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub rounded_jd: i64,
}

impl CacheKey {
    pub fn from_jd(jd: JulianDay) -> Self {
        CacheKey { rounded_jd: jd.cache_rounded() }
    }
}

type InFlight = Arc<OnceCell<Result<EphemerisSample, PanchangamError>>>;

/// Drives the provider fallback chain, caches results, and coalesces
/// concurrent identical lookups so only one provider call happens per key
/// even under concurrent fan-out from the five anga calculators.
pub struct ProviderManager {
    providers: Vec<Arc<dyn EphemerisProvider>>,
    cache: Arc<L1Cache>,
    in_flight: Arc<DashMap<CacheKey, InFlight>>,
}

impl ProviderManager {
    pub fn new(providers: Vec<Arc<dyn EphemerisProvider>>, cache_capacity: usize) -> Self {
        ProviderManager {
            providers,
            cache: Arc::new(L1Cache::new(cache_capacity)),
            in_flight: Arc::new(DashMap::new()),
        }
    }

    pub fn ayanamsa(&self) -> Ayanamsa {
        self.providers.first().map(|p| p.ayanamsa()).unwrap_or_default()
    }

    pub fn active_provider_name(&self) -> &'static str {
        self.providers.first().map(|p| p.name()).unwrap_or("none")
    }

    pub async fn positions(&self, jd: JulianDay) -> Result<(EphemerisSample, bool), PanchangamError> {
        let key = CacheKey::from_jd(jd);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok((cached, true));
        }

        let cell: InFlight = self
            .in_flight
            .entry(key.clone())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();

        let result = cell
            .get_or_init(|| async { self.compute_with_fallback(jd).await })
            .await
            .clone();

        self.in_flight.remove(&key);

        if let Ok(sample) = &result {
            self.cache.store(&key, sample.clone()).await;
        }

        result.map(|sample| (sample, false))
    }

    async fn compute_with_fallback(&self, jd: JulianDay) -> Result<EphemerisSample, PanchangamError> {
        let mut last_error = None;
        for provider in &self.providers {
            match provider.positions(jd).await {
                Ok(sample) => return Ok(sample),
                Err(err) => {
                    tracing::warn!(provider = provider.name(), error = %err, "ephemeris provider failed, trying next");
                    last_error = Some(err);
                }
            }
        }
        Err(PanchangamError::ProviderExhausted(
            last_error.map(|e| e.to_string()).unwrap_or_else(|| "no providers configured".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchangam_ephemeris::StubProvider;

    #[tokio::test]
    async fn caches_identical_key() {
        let stub = Arc::new(StubProvider::new(10.0, 20.0));
        let manager = ProviderManager::new(vec![stub.clone()], 16);

        let jd = JulianDay(2451545.0);
        let (_, cached_first) = manager.positions(jd).await.unwrap();
        let (_, cached_second) = manager.positions(jd).await.unwrap();

        assert!(!cached_first);
        assert!(cached_second);
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn concurrent_identical_requests_call_provider_once() {
        let stub = Arc::new(StubProvider::new(10.0, 20.0));
        let manager = Arc::new(ProviderManager::new(vec![stub.clone()], 16));
        let jd = JulianDay(2451545.0);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let manager = manager.clone();
            handles.push(tokio::spawn(async move { manager.positions(jd).await }));
        }
        for h in handles {
            h.await.unwrap().unwrap();
        }

        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn falls_back_when_first_provider_errors() {
        struct FailingProvider;
        #[async_trait::async_trait]
        impl EphemerisProvider for FailingProvider {
            async fn positions(&self, _jd: JulianDay) -> Result<EphemerisSample, PanchangamError> {
                Err(PanchangamError::Calculation("boom".into()))
            }
            fn coverage(&self) -> std::ops::RangeInclusive<i32> {
                0..=0
            }
            fn ayanamsa(&self) -> Ayanamsa {
                Ayanamsa::Lahiri
            }
            fn name(&self) -> &'static str {
                "failing"
            }
        }

        let stub = Arc::new(StubProvider::new(1.0, 2.0));
        let manager = ProviderManager::new(vec![Arc::new(FailingProvider), stub], 16);
        let (sample, _) = manager.positions(JulianDay(2451545.0)).await.unwrap();
        assert_eq!(sample.sun_longitude_deg, 1.0);
    }
}
