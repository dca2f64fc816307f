//! Resolves a free-text region name to a calendar system and computation
//! method. Unrecognized regions fall back to sane defaults rather than
//! failing the request — the region field is advisory, not a contract.

use panchangam_core::{CalculationMethod, CalculationMethodRequest, CalendarSystem};

/// Regions that follow the Purnimanta (month ends at full moon) convention.
const PURNIMANTA_REGIONS: &[&str] = &[
    "uttar pradesh", "bihar", "punjab", "haryana", "rajasthan", "madhya pradesh",
    "delhi", "jharkhand", "chhattisgarh", "himachal pradesh", "uttarakhand",
];

/// Regions known to follow the Amanta (month ends at new moon) convention.
/// A region outside both lists is unrecognized, not merely "Amanta by
/// default" — it falls through to the unknown-region sentinel below.
const AMANTA_REGIONS: &[&str] = &[
    "tamil nadu", "karnataka", "andhra pradesh", "telangana", "kerala",
    "maharashtra", "gujarat", "goa", "west bengal", "odisha", "assam",
];

pub struct ResolvedRegion {
    pub calendar_system: CalendarSystem,
    pub method: CalculationMethod,
    pub warning: Option<String>,
}

pub fn resolve(region: Option<&str>, requested_method: CalculationMethodRequest) -> ResolvedRegion {
    let normalized = region.map(|r| r.trim().to_lowercase());

    let (calendar_system, region_warning) = match normalized.as_deref() {
        None => (CalendarSystem::Amanta, None),
        Some(name) if PURNIMANTA_REGIONS.contains(&name) => (CalendarSystem::Purnimanta, None),
        Some(name) if AMANTA_REGIONS.contains(&name) => (CalendarSystem::Amanta, None),
        Some(name) => (
            CalendarSystem::Purnimanta,
            Some(format!("unknown_region_defaulted: region '{}' not recognized", name)),
        ),
    };

    let (method, method_warning) = match requested_method {
        CalculationMethodRequest::Drik => (CalculationMethod::Drik, None),
        CalculationMethodRequest::Vakya => (
            CalculationMethod::Drik,
            Some("Vakya method requested but no Vakya coefficient tables are bundled; falling back to Drik".to_string()),
        ),
        CalculationMethodRequest::Auto => (CalculationMethod::Drik, None),
    };

    let warning = region_warning.or(method_warning);
    ResolvedRegion { calendar_system, method, warning }
}
