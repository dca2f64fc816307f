//! Vara: the weekday prevailing at sunrise, in local civil time.

use chrono::{Datelike, NaiveDate};
use panchangam_core::Vara;

use crate::tables::{VARA_LORDS, VARA_NAMES};

/// Weekday of the given local civil date, 0 = Sunday .. 6 = Saturday.
///
/// Takes a `NaiveDate` rather than a `JulianDay` because a JD's calendar day
/// boundary sits at noon UTC, not local midnight — deriving the weekday from
/// a JD computed off a UTC instant would return the wrong day for any
/// timezone whose local date at sunrise differs from the UTC date.
pub fn compute_vara(local_date: NaiveDate) -> Vara {
    let index = local_date.weekday().num_days_from_sunday() as u8;

    Vara {
        index,
        name: VARA_NAMES[index as usize].to_string(),
        lord: VARA_LORDS[index as usize].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_is_a_saturday() {
        let vara = compute_vara(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(vara.name, "Shanivara");
        assert_eq!(vara.index, 6);
    }

    #[test]
    fn index_always_in_range() {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        for offset in 0..14 {
            let vara = compute_vara(start + chrono::Duration::days(offset));
            assert!(vara.index < 7);
        }
    }

    #[test]
    fn local_date_after_utc_midnight_rollover_uses_the_later_day() {
        // A sunrise instant that is still 2026-07-28 in UTC but already
        // 2026-07-29 in a large positive offset (e.g. UTC+13) must resolve
        // to the weekday of the 29th, not the 28th.
        let earlier = compute_vara(NaiveDate::from_ymd_opt(2026, 7, 28).unwrap());
        let later = compute_vara(NaiveDate::from_ymd_opt(2026, 7, 29).unwrap());
        assert_ne!(earlier.index, later.index);
    }
}
