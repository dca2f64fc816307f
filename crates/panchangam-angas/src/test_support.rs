//! Linear-motion ephemeris double shared by the anga calculators' unit
//! tests. A `StubProvider`'s constant output can never bracket a crossing,
//! so root-finding tests need a provider whose longitudes actually move.

#![cfg(test)]

use panchangam_core::{Ayanamsa, EphemerisSample, JulianDay, PanchangamError};
use panchangam_ephemeris::EphemerisProvider;

pub struct LinearProvider {
    pub jd0: f64,
    pub sun0: f64,
    pub sun_rate_per_day: f64,
    pub moon0: f64,
    pub moon_rate_per_day: f64,
}

impl LinearProvider {
    pub fn sun_moon(jd0: f64, sun0: f64, moon0: f64) -> Self {
        LinearProvider { jd0, sun0, sun_rate_per_day: 0.9856, moon0, moon_rate_per_day: 13.1764 }
    }
}

#[async_trait::async_trait]
impl EphemerisProvider for LinearProvider {
    async fn positions(&self, jd: JulianDay) -> Result<EphemerisSample, PanchangamError> {
        let dt = jd.0 - self.jd0;
        Ok(EphemerisSample {
            jd: jd.0,
            sun_longitude_deg: self.sun0 + self.sun_rate_per_day * dt,
            moon_longitude_deg: self.moon0 + self.moon_rate_per_day * dt,
        })
    }

    fn coverage(&self) -> std::ops::RangeInclusive<i32> {
        i32::MIN..=i32::MAX
    }

    fn ayanamsa(&self) -> Ayanamsa {
        Ayanamsa::Lahiri
    }

    fn name(&self) -> &'static str {
        "linear-test-double"
    }
}
