//! Solar position helpers, following the NOAA solar calculator's
//! formulation of Meeus's low-precision solar series (ch. 25).

use std::f64::consts::PI;

const DEG: f64 = PI / 180.0;
const RAD: f64 = 180.0 / PI;

fn normalize_degrees(d: f64) -> f64 {
    let mut x = d % 360.0;
    if x < 0.0 {
        x += 360.0;
    }
    x
}

pub fn julian_centuries(jd: f64) -> f64 {
    (jd - 2451545.0) / 36525.0
}

fn geometric_mean_longitude(t: f64) -> f64 {
    normalize_degrees(280.46646 + t * (36000.76983 + t * 0.0003032))
}

fn geometric_mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

fn orbit_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

fn equation_of_center(t: f64) -> f64 {
    let m = geometric_mean_anomaly(t) * DEG;
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

fn true_longitude(t: f64) -> f64 {
    geometric_mean_longitude(t) + equation_of_center(t)
}

fn apparent_longitude(t: f64) -> f64 {
    let omega = 125.04 - 1934.136 * t;
    true_longitude(t) - 0.00569 - 0.00478 * (omega * DEG).sin()
}

fn mean_obliquity_of_ecliptic(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.815 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

fn obliquity_correction(t: f64) -> f64 {
    let omega = 125.04 - 1934.136 * t;
    mean_obliquity_of_ecliptic(t) + 0.00256 * (omega * DEG).cos()
}

/// Apparent geocentric solar declination, in degrees.
pub fn declination(t: f64) -> f64 {
    let e = obliquity_correction(t) * DEG;
    let lambda = apparent_longitude(t) * DEG;
    (e.sin() * lambda.sin()).asin() * RAD
}

/// Equation of time, in minutes (apparent solar time minus mean solar time).
pub fn equation_of_time(t: f64) -> f64 {
    let epsilon = obliquity_correction(t) * DEG;
    let l0 = geometric_mean_longitude(t) * DEG;
    let e = orbit_eccentricity(t);
    let m = geometric_mean_anomaly(t) * DEG;

    let y = (epsilon / 2.0).tan().powi(2);

    let result = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    result * RAD * 4.0
}

/// Solar altitude above the horizon, in degrees, given latitude, declination,
/// and hour angle (all in degrees).
pub fn altitude(latitude_deg: f64, declination_deg: f64, hour_angle_deg: f64) -> f64 {
    let phi = latitude_deg * DEG;
    let delta = declination_deg * DEG;
    let h = hour_angle_deg * DEG;
    (phi.sin() * delta.sin() + phi.cos() * delta.cos() * h.cos()).asin() * RAD
}
