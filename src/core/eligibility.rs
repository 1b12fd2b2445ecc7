use crate::domain::model::Eligibility;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

pub const DEFAULT_WINDOW_DAYS: u32 = 365;

/// Parses a purchase date.
///
/// A bare `YYYY-MM-DD` is read as midnight UTC on that day. Full RFC 3339
/// timestamps are accepted as well.
pub fn parse_purchase_date(input: &str) -> Option<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc());
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Classifies `date` against a window of `window_days` ending at `now`.
///
/// Elapsed time is compared at full clock precision, never rounded to whole
/// days. Both ends of the window are inclusive.
pub fn assess_purchase_date(date: &str, window_days: u32, now: DateTime<Utc>) -> Eligibility {
    let Some(purchased_at) = parse_purchase_date(date) else {
        tracing::debug!("Unparseable purchase date: {:?}", date);
        return Eligibility::Invalid;
    };

    let elapsed = now - purchased_at;

    if elapsed < TimeDelta::zero() {
        Eligibility::TooNew
    } else if elapsed > TimeDelta::days(i64::from(window_days)) {
        Eligibility::TooOld
    } else {
        Eligibility::Eligible
    }
}

pub fn is_within_trailing_window(date: &str, window_days: u32, now: DateTime<Utc>) -> bool {
    assess_purchase_date(date, window_days, now).is_eligible()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn days_before(now: DateTime<Utc>, days: i64) -> String {
        (now - Duration::days(days)).format("%Y-%m-%d").to_string()
    }

    #[test]
    fn test_exactly_window_days_old_is_eligible() {
        let now = midnight(2026, 10, 15);
        let date = days_before(now, 365);
        assert_eq!(assess_purchase_date(&date, 365, now), Eligibility::Eligible);
        assert!(is_within_trailing_window(&date, DEFAULT_WINDOW_DAYS, now));
    }

    #[test]
    fn test_one_day_past_window_is_too_old() {
        let now = midnight(2026, 10, 15);
        let date = days_before(now, 366);
        assert_eq!(assess_purchase_date(&date, 365, now), Eligibility::TooOld);
        assert!(!is_within_trailing_window(&date, 365, now));
    }

    #[test]
    fn test_future_date_is_too_new() {
        let now = midnight(2026, 10, 15);
        assert_eq!(
            assess_purchase_date("2026-10-16", 365, now),
            Eligibility::TooNew
        );
        assert!(!is_within_trailing_window("2026-10-16", 365, now));
    }

    #[test]
    fn test_today_is_eligible() {
        let now = midnight(2026, 10, 15);
        assert!(is_within_trailing_window("2026-10-15", 365, now));
    }

    #[test]
    fn test_unparseable_input_fails_closed() {
        let now = midnight(2026, 10, 15);
        for input in ["not-a-date", "", "   ", "2026-13-01", "2026-02-30", "15/10/2026"] {
            assert_eq!(
                assess_purchase_date(input, 365, now),
                Eligibility::Invalid,
                "input {:?}",
                input
            );
            assert!(!is_within_trailing_window(input, 365, now));
        }
    }

    #[test]
    fn test_elapsed_time_is_not_truncated() {
        // 365 calendar days plus half a day exceeds the window
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        let date = days_before(midnight(2026, 10, 15), 365);
        assert_eq!(assess_purchase_date(&date, 365, now), Eligibility::TooOld);
    }

    #[test]
    fn test_same_day_later_timestamp_is_too_new() {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 8, 0, 0).unwrap();
        assert_eq!(
            assess_purchase_date("2026-10-15T09:00:00Z", 365, now),
            Eligibility::TooNew
        );
    }

    #[test]
    fn test_sub_millisecond_future_is_too_new() {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        assert_eq!(
            assess_purchase_date("2026-10-15T12:00:00.000500+00:00", 365, now),
            Eligibility::TooNew
        );
    }

    #[test]
    fn test_sub_millisecond_past_window_is_too_old() {
        let purchased = midnight(2025, 10, 15);
        let now = purchased + Duration::days(365) + Duration::microseconds(500);
        assert_eq!(assess_purchase_date("2025-10-15", 365, now), Eligibility::TooOld);

        let edge = purchased + Duration::days(365);
        assert_eq!(assess_purchase_date("2025-10-15", 365, edge), Eligibility::Eligible);
    }

    #[test]
    fn test_rfc3339_input_is_accepted() {
        let now = midnight(2026, 10, 15);
        assert!(is_within_trailing_window("2026-06-01T10:30:00+02:00", 365, now));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let now = midnight(2026, 10, 15);
        assert!(is_within_trailing_window(" 2026-06-01 ", 365, now));
    }

    #[test]
    fn test_custom_window() {
        let now = midnight(2026, 10, 15);
        let date = days_before(now, 31);
        assert!(!is_within_trailing_window(&date, 30, now));
        assert!(is_within_trailing_window(&date, 31, now));
    }

    #[test]
    fn test_window_boundary_property() {
        let now = midnight(2026, 10, 15);
        for offset in -3..=370 {
            let date = days_before(now, offset);
            let expected = (0..=365).contains(&offset);
            assert_eq!(
                is_within_trailing_window(&date, 365, now),
                expected,
                "offset {} days",
                offset
            );
        }
    }
}
