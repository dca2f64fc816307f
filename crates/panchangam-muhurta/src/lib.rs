//! Partitions the diurnal arc into the inauspicious eighths (Rahu Kalam,
//! Yamagandam, Gulika Kalam) and the auspicious windows (Abhijit, Brahma
//! Muhurta).

use chrono::Duration;
use panchangam_core::{Event, MuhurtaQuality, SunTimes, SunTimesStatus};

/// Weekday-indexed eighth-of-day slot for each inauspicious period,
/// 0 = Sunday .. 6 = Saturday, slot 0..=7.
const RAHU_EIGHTH: [u8; 7] = [4, 1, 6, 3, 5, 2, 7];
const YAMA_EIGHTH: [u8; 7] = [2, 5, 0, 4, 6, 3, 1];
const GULIKA_EIGHTH: [u8; 7] = [6, 3, 4, 5, 2, 7, 0];

const BRAHMA_MUHURTA_MINUTES: i64 = 96;

/// Abhijit's half-width is capped at 12 minutes each side of solar noon
/// (24 minutes total), the practical cap from a full muhurta (1/15 of the
/// day) on days whose daylight arc runs long.
const ABHIJIT_HALF_CAP_MINUTES: i64 = 12;

/// Builds every event for the day given the computed sun times and the
/// weekday index (0=Sunday) the Vara already resolved.
pub fn compute_events(sun_times: &SunTimes, vara_index: u8) -> Vec<Event> {
    let mut events = Vec::new();

    let (Some(sunrise), Some(sunset)) = (sun_times.sunrise, sun_times.sunset) else {
        // Rahu/Yama/Gulika and Abhijit are all defined relative to the
        // daylight arc; without one there's nothing to partition.
        return events;
    };

    let day_length = sunset - sunrise;
    let eighth = day_length / 8;
    let idx = (vara_index % 7) as i32;

    events.push(eighth_event("Rahu Kalam", sunrise, eighth, RAHU_EIGHTH[idx as usize], MuhurtaQuality::Ashubha));
    events.push(eighth_event("Yamagandam", sunrise, eighth, YAMA_EIGHTH[idx as usize], MuhurtaQuality::Ashubha));
    events.push(eighth_event("Gulika Kalam", sunrise, eighth, GULIKA_EIGHTH[idx as usize], MuhurtaQuality::Ashubha));

    let muhurta_length = day_length / 15;
    let half = muhurta_length / 2;
    let abhijit_cap = Duration::minutes(ABHIJIT_HALF_CAP_MINUTES);
    let half = half.min(abhijit_cap);
    let mut abhijit_quality = MuhurtaQuality::Shubha;
    let mut metadata = std::collections::HashMap::new();
    if vara_index % 7 == 3 {
        // Wednesday: Abhijit is traditionally excluded rather than counted
        // auspicious, since Budha already rules the day.
        abhijit_quality = MuhurtaQuality::Neutral;
        metadata.insert("abhijit_wednesday_downgrade".to_string(), serde_json::Value::Bool(true));
    }
    events.push(Event {
        name: "Abhijit Muhurta".to_string(),
        start: sun_times.solar_noon - half,
        end: sun_times.solar_noon + half,
        quality: abhijit_quality,
        metadata,
    });

    events.push(Event {
        name: "Brahma Muhurta".to_string(),
        start: sunrise - Duration::minutes(BRAHMA_MUHURTA_MINUTES),
        end: sunrise,
        quality: MuhurtaQuality::Shubha,
        metadata: std::collections::HashMap::new(),
    });

    events
}

fn eighth_event(
    name: &str,
    sunrise: chrono::DateTime<chrono::Utc>,
    eighth_len: Duration,
    eighth_index: u8,
    quality: MuhurtaQuality,
) -> Event {
    let start = sunrise + eighth_len * eighth_index as i32;
    let end = start + eighth_len;
    Event { name: name.to_string(), start, end, quality, metadata: std::collections::HashMap::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_sun_times() -> SunTimes {
        SunTimes {
            sunrise: Some(chrono::Utc.with_ymd_and_hms(2026, 7, 28, 0, 30, 0).unwrap()),
            sunset: Some(chrono::Utc.with_ymd_and_hms(2026, 7, 28, 12, 30, 0).unwrap()),
            solar_noon: chrono::Utc.with_ymd_and_hms(2026, 7, 28, 6, 30, 0).unwrap(),
            status: SunTimesStatus::Normal,
            day_length_seconds: Some(12 * 3600),
        }
    }

    #[test]
    fn produces_five_events_with_sun_times() {
        let events = compute_events(&sample_sun_times(), 0);
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn no_events_without_sunrise_or_sunset() {
        let st = SunTimes { sunrise: None, sunset: None, ..sample_sun_times() };
        assert!(compute_events(&st, 0).is_empty());
    }

    #[test]
    fn wednesday_downgrades_abhijit_to_neutral() {
        let events = compute_events(&sample_sun_times(), 3);
        let abhijit = events.iter().find(|e| e.name == "Abhijit Muhurta").unwrap();
        assert_eq!(abhijit.quality, MuhurtaQuality::Neutral);
        assert_eq!(abhijit.metadata.get("abhijit_wednesday_downgrade").and_then(|v| v.as_bool()), Some(true));
    }

    #[test]
    fn other_days_keep_abhijit_auspicious() {
        let events = compute_events(&sample_sun_times(), 0);
        let abhijit = events.iter().find(|e| e.name == "Abhijit Muhurta").unwrap();
        assert_eq!(abhijit.quality, MuhurtaQuality::Shubha);
    }

    #[test]
    fn brahma_muhurta_ends_at_sunrise() {
        let st = sample_sun_times();
        let events = compute_events(&st, 0);
        let brahma = events.iter().find(|e| e.name == "Brahma Muhurta").unwrap();
        assert_eq!(brahma.end, st.sunrise.unwrap());
        assert_eq!((brahma.end - brahma.start).num_minutes(), BRAHMA_MUHURTA_MINUTES);
    }

    #[test]
    fn abhijit_is_clamped_to_twelve_minutes_each_side_on_a_long_day() {
        // A 14-hour day: uncapped half-width would be (14h/15)/2 = 28min,
        // well past the 12-minute practical cap.
        let st = SunTimes {
            sunrise: Some(chrono::Utc.with_ymd_and_hms(2026, 7, 28, 0, 0, 0).unwrap()),
            sunset: Some(chrono::Utc.with_ymd_and_hms(2026, 7, 28, 14, 0, 0).unwrap()),
            solar_noon: chrono::Utc.with_ymd_and_hms(2026, 7, 28, 7, 0, 0).unwrap(),
            status: SunTimesStatus::Normal,
            day_length_seconds: Some(14 * 3600),
        };
        let events = compute_events(&st, 0);
        let abhijit = events.iter().find(|e| e.name == "Abhijit Muhurta").unwrap();
        assert_eq!((st.solar_noon - abhijit.start).num_minutes(), 12);
        assert_eq!((abhijit.end - st.solar_noon).num_minutes(), 12);
    }

    #[test]
    fn rahu_kalam_within_daylight_arc() {
        let st = sample_sun_times();
        let events = compute_events(&st, 2);
        let rahu = events.iter().find(|e| e.name == "Rahu Kalam").unwrap();
        assert!(rahu.start >= st.sunrise.unwrap() && rahu.end <= st.sunset.unwrap());
    }
}
