//! IANA timezone resolution with a safe fallback.

use chrono_tz::Tz;

/// Resolves an IANA timezone name. Falls back to UTC with a warning string
/// rather than failing the whole request over a malformed or unrecognized
/// zone identifier.
pub fn resolve_timezone(name: &str) -> (Tz, Option<String>) {
    match name.parse::<Tz>() {
        Ok(tz) => (tz, None),
        Err(_) => (
            Tz::UTC,
            Some(format!("unrecognized timezone '{}', falling back to UTC", name)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_zone_resolves_without_warning() {
        let (tz, warning) = resolve_timezone("Asia/Kolkata");
        assert_eq!(tz, chrono_tz::Asia::Kolkata);
        assert!(warning.is_none());
    }

    #[test]
    fn malformed_zone_falls_back_to_utc() {
        let (tz, warning) = resolve_timezone("Not/AZone");
        assert_eq!(tz, chrono_tz::UTC);
        assert!(warning.is_some());
    }
}
