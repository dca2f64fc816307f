//! Time representations shared across the calculation pipeline.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Day Number, fractional, UT-based.
///
/// Kept distinct from a bare `f64` so that a UTC offset, a longitude, or a
/// plain duration can never be passed where a JD is expected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(pub f64);

impl JulianDay {
    /// Meeus (1998) chapter 7 algorithm, valid for the Gregorian calendar.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        let mut year = dt.year() as f64;
        let mut month = dt.month() as f64;
        let day = dt.day() as f64
            + dt.hour() as f64 / 24.0
            + dt.minute() as f64 / 1440.0
            + (dt.second() as f64 + dt.nanosecond() as f64 / 1e9) / 86400.0;

        if month <= 2.0 {
            year -= 1.0;
            month += 12.0;
        }

        let a = (year / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        let jd = (365.25 * (year + 4716.0)).floor()
            + (30.6001 * (month + 1.0)).floor()
            + day
            + b
            - 1524.5;

        JulianDay(jd)
    }

    pub fn to_utc(self) -> DateTime<Utc> {
        let jd = self.0 + 0.5;
        let z = jd.floor();
        let f = jd - z;
        let a = if z < 2299161.0 {
            z
        } else {
            let alpha = ((z - 1867216.25) / 36524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day_frac = b - d - (30.6001 * e).floor() + f;
        let day = day_frac.floor();
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        let remainder = day_frac - day;
        let total_seconds = (remainder * 86400.0).round() as i64;
        let (hour, rem) = (total_seconds / 3600, total_seconds % 3600);
        let (minute, second) = (rem / 60, rem % 60);

        chrono::NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
            .and_then(|d| d.and_hms_opt(hour as u32, minute as u32, second as u32))
            .map(|ndt| DateTime::<Utc>::from_naive_utc_and_offset(ndt, Utc))
            .unwrap_or(dt_epoch())
    }

    pub fn julian_centuries(self) -> f64 {
        (self.0 - 2451545.0) / 36525.0
    }

    pub fn add_days(self, days: f64) -> JulianDay {
        JulianDay(self.0 + days)
    }

    /// Rounds to the nearest microday, used as a cache key so that
    /// floating-point jitter from repeated conversions doesn't fragment
    /// the provider cache.
    pub fn cache_rounded(self) -> i64 {
        (self.0 * 1_000_000.0).round() as i64
    }
}

fn dt_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::from_naive_utc_and_offset(
        chrono::NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        Utc,
    )
}

/// An ecliptic longitude, always normalized into `[0, 360)` degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Longitude(f64);

impl Longitude {
    pub fn new(degrees: f64) -> Self {
        let mut d = degrees % 360.0;
        if d < 0.0 {
            d += 360.0;
        }
        Longitude(d)
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Angular separation `self - other`, normalized to `[0, 360)`.
    pub fn separation_from(self, other: Longitude) -> f64 {
        let mut diff = self.0 - other.0;
        if diff < 0.0 {
            diff += 360.0;
        }
        diff
    }
}

/// Precession model applied to convert tropical longitudes to sidereal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ayanamsa {
    Lahiri,
    Krishnamurti,
    Raman,
}

impl Default for Ayanamsa {
    fn default() -> Self {
        Ayanamsa::Lahiri
    }
}

impl Ayanamsa {
    /// Offset in degrees to subtract from a tropical longitude at `jd`.
    pub fn value_at(self, jd: JulianDay) -> f64 {
        let years_since_2000 = (jd.0 - 2451545.0) / 365.25;
        match self {
            // 23.85 deg at J2000, precessing at ~50.29 arcsec/year.
            Ayanamsa::Lahiri => 23.85 + (50.29 / 3600.0) * years_since_2000,
            Ayanamsa::Krishnamurti => 23.85 + (50.2388 / 3600.0) * years_since_2000 - 0.00813,
            Ayanamsa::Raman => 22.46 + (50.33 / 3600.0) * years_since_2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_j2000_epoch() {
        let dt = DateTime::parse_from_rfc3339("2000-01-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let jd = JulianDay::from_utc(dt);
        assert!((jd.0 - 2451545.0).abs() < 1e-6);
    }

    #[test]
    fn jd_round_trip() {
        let dt = DateTime::parse_from_rfc3339("2026-07-28T06:15:30Z")
            .unwrap()
            .with_timezone(&Utc);
        let jd = JulianDay::from_utc(dt);
        let back = jd.to_utc();
        assert_eq!(dt.date_naive(), back.date_naive());
        assert!((dt.time() - back.time()).num_seconds().abs() <= 1);
    }

    #[test]
    fn longitude_normalizes() {
        assert!((Longitude::new(370.0).degrees() - 10.0).abs() < 1e-9);
        assert!((Longitude::new(-10.0).degrees() - 350.0).abs() < 1e-9);
    }

    #[test]
    fn longitude_separation_wraps() {
        let a = Longitude::new(10.0);
        let b = Longitude::new(350.0);
        assert!((a.separation_from(b) - 20.0).abs() < 1e-9);
    }
}
