//! Low-precision fallback: mean longitude plus the equation of center.
//!
//! Always available, no coverage-year limit, error bars on the order of a
//! few arcminutes for the Moon. Used when the tabular series' coverage
//! window doesn't include the requested date.

use std::f64::consts::PI;

use panchangam_core::{Ayanamsa, JulianDay};

const DEG: f64 = PI / 180.0;

fn normalize_degrees(d: f64) -> f64 {
    let mut x = d % 360.0;
    if x < 0.0 {
        x += 360.0;
    }
    x
}

/// Sun's apparent geocentric ecliptic longitude, Meeus low-precision (Ch. 25).
pub fn sun_longitude(jd: JulianDay) -> f64 {
    let t = jd.julian_centuries();

    let l0 = normalize_degrees(280.46646 + 36000.76983 * t + 0.0003032 * t * t);
    let m = normalize_degrees(357.52911 + 35999.05029 * t - 0.0001537 * t * t);
    let m_rad = m * DEG;

    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    normalize_degrees(l0 + c)
}

/// Moon's apparent geocentric ecliptic longitude, mean longitude plus the
/// two dominant perturbation terms (evection and the annual equation).
pub fn moon_longitude(jd: JulianDay) -> f64 {
    let t = jd.julian_centuries();

    let l_prime = normalize_degrees(218.3164477 + 481267.88123421 * t);
    let d = normalize_degrees(297.8501921 + 445267.1114034 * t) * DEG;
    let m = normalize_degrees(357.5291092 + 35999.0502909 * t) * DEG;
    let m_prime = normalize_degrees(134.9633964 + 477198.8675055 * t) * DEG;

    let correction = 6.2886 * m_prime.sin()
        + 1.2740 * (2.0 * d - m_prime).sin()
        + 0.6583 * (2.0 * d).sin()
        - 0.1856 * m.sin();

    normalize_degrees(l_prime + correction)
}

/// Applies an ayanamsa offset to convert a tropical longitude to sidereal.
pub fn to_sidereal(tropical_longitude: f64, ayanamsa: Ayanamsa, jd: JulianDay) -> f64 {
    normalize_degrees(tropical_longitude - ayanamsa.value_at(jd))
}
