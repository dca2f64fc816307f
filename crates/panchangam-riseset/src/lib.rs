//! Sunrise, sunset, and solar noon for an observer.
//!
//! Declination and the equation of time follow the NOAA solar calculator's
//! formulation (`solar` module); the rise/set instants themselves are
//! found by the explicit iterative refinement spec'd for this component
//! rather than NOAA's fixed two-pass shortcut: each pass recomputes the
//! hour angle against the declination at the *current* time estimate and
//! stops once consecutive estimates agree to within a second, capped at
//! eight passes.

pub mod solar;

use panchangam_core::{GeographicLocation, JulianDay, SunTimes, SunTimesStatus};

/// Standard: -50' atmospheric refraction minus the sun's angular radius.
const TARGET_ALTITUDE_DEG: f64 = -0.833;
const MAX_ITERATIONS: usize = 8;
const CONVERGENCE_DAYS: f64 = 1.0 / 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Limb {
    Rise,
    Set,
}

/// Computes sunrise, sunset, and solar noon for the local calendar day
/// containing `local_midnight_utc` (the instant of local midnight,
/// expressed as a UTC-referenced Julian Day by the caller).
pub fn compute_sun_times(location: &GeographicLocation, local_midnight_utc: JulianDay) -> SunTimes {
    let noon = refine_solar_noon(location, local_midnight_utc);
    let t_noon = solar::julian_centuries(noon.0);
    let decl_noon = solar::declination(t_noon);

    let cos_h = hour_angle_cosine(location.latitude, decl_noon);

    if cos_h > 1.0 {
        return SunTimes {
            sunrise: None,
            sunset: None,
            solar_noon: noon.to_utc(),
            status: SunTimesStatus::PolarNight,
            day_length_seconds: None,
        };
    }
    if cos_h < -1.0 {
        return SunTimes {
            sunrise: None,
            sunset: None,
            solar_noon: noon.to_utc(),
            status: SunTimesStatus::PolarDay,
            day_length_seconds: None,
        };
    }

    let h0 = cos_h.acos().to_degrees();
    let sunrise = refine_limb(location, noon.add_days(-h0 / 360.0), noon, Limb::Rise);
    let sunset = refine_limb(location, noon.add_days(h0 / 360.0), noon, Limb::Set);
    let sunrise_utc = sunrise.to_utc();
    let sunset_utc = sunset.to_utc();

    SunTimes {
        sunrise: Some(sunrise_utc),
        sunset: Some(sunset_utc),
        solar_noon: noon.to_utc(),
        status: SunTimesStatus::Normal,
        day_length_seconds: Some((sunset_utc - sunrise_utc).num_seconds()),
    }
}

fn hour_angle_cosine(latitude_deg: f64, declination_deg: f64) -> f64 {
    let phi = latitude_deg.to_radians();
    let delta = declination_deg.to_radians();
    let target = TARGET_ALTITUDE_DEG.to_radians();
    (target.sin() - phi.sin() * delta.sin()) / (phi.cos() * delta.cos())
}

fn refine_solar_noon(location: &GeographicLocation, local_midnight_utc: JulianDay) -> JulianDay {
    let mut estimate = local_midnight_utc.add_days(0.5 - location.longitude / 360.0);

    for _ in 0..MAX_ITERATIONS {
        let t = solar::julian_centuries(estimate.0);
        let eot_days = solar::equation_of_time(t) / 1440.0;
        let refined =
            local_midnight_utc.add_days(0.5 - location.longitude / 360.0 - eot_days);
        if (refined.0 - estimate.0).abs() < CONVERGENCE_DAYS {
            return refined;
        }
        estimate = refined;
    }
    estimate
}

fn refine_limb(location: &GeographicLocation, initial: JulianDay, noon: JulianDay, limb: Limb) -> JulianDay {
    let mut estimate = initial;

    for _ in 0..MAX_ITERATIONS {
        let t = solar::julian_centuries(estimate.0);
        let decl = solar::declination(t);
        let cos_h = hour_angle_cosine(location.latitude, decl).clamp(-1.0, 1.0);
        let h0 = cos_h.acos().to_degrees();

        let signed_offset = match limb {
            Limb::Rise => -h0 / 360.0,
            Limb::Set => h0 / 360.0,
        };

        let refined = noon.add_days(signed_offset);
        if (refined.0 - estimate.0).abs() < CONVERGENCE_DAYS {
            return refined;
        }
        estimate = refined;
    }
    estimate
}
