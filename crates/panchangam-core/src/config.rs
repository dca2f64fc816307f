//! Layered configuration, read from the environment with typed defaults.

use std::time::Duration;

use crate::time::Ayanamsa;

#[derive(Debug, Clone)]
pub struct PanchangamConfig {
    /// First and last calendar year the bundled ephemeris tables cover.
    pub ephemeris_coverage: (i32, i32),
    pub default_ayanamsa: Ayanamsa,
    pub provider_cache_capacity: usize,
    pub request_deadline: Duration,
}

impl PanchangamConfig {
    pub fn from_env() -> Self {
        PanchangamConfig {
            ephemeris_coverage: (
                env_parse("PANCHANGAM_EPHEMERIS_START_YEAR", 1900),
                env_parse("PANCHANGAM_EPHEMERIS_END_YEAR", 2100),
            ),
            default_ayanamsa: match std::env::var("PANCHANGAM_AYANAMSA").as_deref() {
                Ok("krishnamurti") => Ayanamsa::Krishnamurti,
                Ok("raman") => Ayanamsa::Raman,
                _ => Ayanamsa::Lahiri,
            },
            provider_cache_capacity: env_parse("PANCHANGAM_CACHE_CAPACITY", 8192),
            request_deadline: Duration::from_secs(env_parse("PANCHANGAM_DEADLINE_SECS", 30)),
        }
    }

    /// Logs warnings for suspicious values; never fails the process.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.provider_cache_capacity == 0 {
            warnings.push("PANCHANGAM_CACHE_CAPACITY is 0; caching disabled".to_string());
        }
        if self.request_deadline.as_secs() == 0 {
            warnings.push("PANCHANGAM_DEADLINE_SECS is 0; every request will time out".to_string());
        }
        if self.ephemeris_coverage.0 >= self.ephemeris_coverage.1 {
            warnings.push(format!(
                "ephemeris coverage window is empty or inverted: {:?}",
                self.ephemeris_coverage
            ));
        }

        for warning in &warnings {
            tracing::warn!(%warning, "suspicious configuration value");
        }

        warnings
    }
}

impl Default for PanchangamConfig {
    fn default() -> Self {
        PanchangamConfig {
            ephemeris_coverage: (1900, 2100),
            default_ayanamsa: Ayanamsa::Lahiri,
            provider_cache_capacity: 8192,
            request_deadline: Duration::from_secs(30),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = PanchangamConfig::default();
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn zero_capacity_warns() {
        let cfg = PanchangamConfig { provider_cache_capacity: 0, ..PanchangamConfig::default() };
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("CACHE_CAPACITY")));
    }
}
