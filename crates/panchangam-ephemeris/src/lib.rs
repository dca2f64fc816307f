//! Ephemeris providers: Sun/Moon ecliptic longitude at a Julian Day.
//!
//! Three implementations are offered behind one trait, matched to the
//! provider-fallback chain the provider manager drives: `TabularProvider`
//! for dates inside its bundled coverage window, `AnalyticProvider` as the
//! always-available fallback, and `StubProvider` for deterministic tests.

pub mod analytic;
pub mod tabular;

use std::ops::RangeInclusive;

use async_trait::async_trait;
use panchangam_core::{Ayanamsa, EphemerisSample, JulianDay, PanchangamError};

#[async_trait]
pub trait EphemerisProvider: Send + Sync {
    async fn positions(&self, jd: JulianDay) -> Result<EphemerisSample, PanchangamError>;
    fn coverage(&self) -> RangeInclusive<i32>;
    fn ayanamsa(&self) -> Ayanamsa;
    fn name(&self) -> &'static str;
}

/// VSOP87/ELP2000-truncated series, 1900-2100, sub-arcminute accuracy.
pub struct TabularProvider {
    ayanamsa: Ayanamsa,
}

impl TabularProvider {
    pub fn new(ayanamsa: Ayanamsa) -> Self {
        TabularProvider { ayanamsa }
    }
}

#[async_trait]
impl EphemerisProvider for TabularProvider {
    async fn positions(&self, jd: JulianDay) -> Result<EphemerisSample, PanchangamError> {
        let year = jd.to_utc().date_naive().format("%Y").to_string();
        let year: i32 = year.parse().unwrap_or(0);
        if !self.coverage().contains(&year) {
            return Err(PanchangamError::Calculation(format!(
                "year {} outside tabular provider coverage {:?}",
                year,
                self.coverage()
            )));
        }

        let sun = tabular::sun_longitude(jd);
        let moon = tabular::moon_longitude(jd);
        Ok(EphemerisSample { jd: jd.0, sun_longitude_deg: sun, moon_longitude_deg: moon })
    }

    fn coverage(&self) -> RangeInclusive<i32> {
        1900..=2100
    }

    fn ayanamsa(&self) -> Ayanamsa {
        self.ayanamsa
    }

    fn name(&self) -> &'static str {
        "tabular"
    }
}

/// Mean longitude plus equation of center. Wider error bars, no coverage
/// limit; the fallback of last resort before giving up on a request.
pub struct AnalyticProvider {
    ayanamsa: Ayanamsa,
}

impl AnalyticProvider {
    pub fn new(ayanamsa: Ayanamsa) -> Self {
        AnalyticProvider { ayanamsa }
    }
}

#[async_trait]
impl EphemerisProvider for AnalyticProvider {
    async fn positions(&self, jd: JulianDay) -> Result<EphemerisSample, PanchangamError> {
        let sun = analytic::sun_longitude(jd);
        let moon = analytic::moon_longitude(jd);
        Ok(EphemerisSample { jd: jd.0, sun_longitude_deg: sun, moon_longitude_deg: moon })
    }

    fn coverage(&self) -> RangeInclusive<i32> {
        -4000..=8000
    }

    fn ayanamsa(&self) -> Ayanamsa {
        self.ayanamsa
    }

    fn name(&self) -> &'static str {
        "analytic"
    }
}

/// Deterministic constant-longitude provider. Only reachable through the
/// `test-support` feature; exists so the cache and orchestrator crates can
/// exercise coalescing and fallback behavior without depending on real
/// astronomical output.
#[cfg(any(test, feature = "test-support"))]
pub struct StubProvider {
    pub sun_longitude_deg: f64,
    pub moon_longitude_deg: f64,
    pub calls: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "test-support"))]
impl StubProvider {
    pub fn new(sun_longitude_deg: f64, moon_longitude_deg: f64) -> Self {
        StubProvider {
            sun_longitude_deg,
            moon_longitude_deg,
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl EphemerisProvider for StubProvider {
    async fn positions(&self, jd: JulianDay) -> Result<EphemerisSample, PanchangamError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(EphemerisSample {
            jd: jd.0,
            sun_longitude_deg: self.sun_longitude_deg,
            moon_longitude_deg: self.moon_longitude_deg,
        })
    }

    fn coverage(&self) -> RangeInclusive<i32> {
        i32::MIN..=i32::MAX
    }

    fn ayanamsa(&self) -> Ayanamsa {
        Ayanamsa::Lahiri
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
