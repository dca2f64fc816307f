//! Request/response types shared by every component of the calculation pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::time::Ayanamsa;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A point on Earth's surface. Altitude is accepted but not used by the
/// rise/set refinement (spec's atmospheric model is zenith-only).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct GeographicLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude_m: f64,
    /// IANA timezone identifier, e.g. `"Asia/Kolkata"`. Falls back to UTC
    /// with a warning if unparseable.
    pub timezone: String,
}

/// Which lunar month naming/boundary convention applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalendarSystem {
    Amanta,
    Purnimanta,
}

/// Which astronomical model underlies the angas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    /// Modern positional astronomy (the only method this crate computes).
    Drik,
    /// Traditional arithmetic almanac rules; requests for this method are
    /// honored by falling back to Drik with a provenance note, since no
    /// Vakya coefficient tables are bundled.
    Vakya,
    /// Let the regional resolver pick based on the request date/region.
    Auto,
}

/// A single request for a full panchangam.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PanchangamRequest {
    pub date: DateTime<Utc>,
    pub location: GeographicLocation,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub method: CalculationMethodRequest,
    #[serde(default)]
    pub ayanamsa: Option<Ayanamsa>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethodRequest {
    #[default]
    Auto,
    Drik,
    Vakya,
}

/// Ecliptic longitudes of Sun and Moon at a given instant, geocentric,
/// apparent (nutation/aberration-corrected to the precision the active
/// provider supports).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EphemerisSample {
    pub jd: f64,
    pub sun_longitude_deg: f64,
    pub moon_longitude_deg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Tithi {
    pub index: u8,
    pub name: String,
    pub paksha: Paksha,
    /// Degrees of elapsed motion into the current tithi, `[0, 12)`.
    pub elapsed_degrees: f64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Paksha {
    Shukla,
    Krishna,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Nakshatra {
    pub index: u8,
    pub name: String,
    pub lord: String,
    pub deity: String,
    pub symbol: String,
    pub pada: u8,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Yoga {
    pub index: u8,
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Karana {
    pub index: u8,
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Vara {
    pub index: u8,
    pub name: String,
    pub lord: String,
}

/// Which of the rise/set outcomes applies to a given civil day.
///
/// `NoRise`/`NoSet` are reachable in principle (a root exists for one limb
/// of the altitude equation but not the other, at the coverage's latitude
/// extremes) but the refinement in `panchangam-riseset` only ever observes
/// them as a joint pair today — see that crate for the current coverage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SunTimesStatus {
    Normal,
    NoRise,
    NoSet,
    PolarDay,
    PolarNight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SunTimes {
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub solar_noon: DateTime<Utc>,
    pub status: SunTimesStatus,
    /// `sunset - sunrise` in seconds; `None` whenever either is absent.
    pub day_length_seconds: Option<i64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MuhurtaQuality {
    Shubha,
    Ashubha,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Event {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub quality: MuhurtaQuality,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Which algorithm family and ayanamsa actually produced a result, recorded
/// for reproducibility even when the request asked for `Auto`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Provenance {
    pub method: CalculationMethod,
    pub calendar_system: CalendarSystem,
    pub ayanamsa: Ayanamsa,
    pub ephemeris_provider: String,
    pub calculation_time_ms: f64,
    pub cached: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PanchangamResult {
    pub date: DateTime<Utc>,
    pub location: GeographicLocation,
    pub tithi: Tithi,
    pub nakshatra: Nakshatra,
    pub yoga: Yoga,
    pub karana: Karana,
    pub vara: Vara,
    pub sun_times: SunTimes,
    pub events: Vec<Event>,
    pub festivals: Vec<String>,
    pub provenance: Provenance,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl PanchangamResult {
    /// Formats the response envelope described for the external transport
    /// surface. Pure data shaping; no transport dependency.
    pub fn to_envelope(&self) -> serde_json::Value {
        serde_json::json!({
            "status": "ok",
            "data": self,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: HealthStatus,
    pub message: String,
    pub latency_ms: Option<f64>,
}

impl CheckResult {
    pub fn healthy(message: impl Into<String>) -> Self {
        CheckResult { status: HealthStatus::Healthy, message: message.into(), latency_ms: None }
    }

    pub fn healthy_with_latency(message: impl Into<String>, latency_ms: f64) -> Self {
        CheckResult { status: HealthStatus::Healthy, message: message.into(), latency_ms: Some(latency_ms) }
    }

    pub fn degraded(message: impl Into<String>) -> Self {
        CheckResult { status: HealthStatus::Degraded, message: message.into(), latency_ms: None }
    }

    pub fn unhealthy(message: impl Into<String>) -> Self {
        CheckResult { status: HealthStatus::Unhealthy, message: message.into(), latency_ms: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthChecks {
    pub provider_manager: CheckResult,
    pub orchestrator: CheckResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub checks: Option<HealthChecks>,
}
