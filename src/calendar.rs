use chrono::{Datelike, NaiveDate, Weekday};

pub const OPENING_MINUTES: u32 = 9 * 60;
pub const CLOSING_MINUTES: u32 = 19 * 60;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Hourly slots offered by the time picker, `09:00` through `19:00`.
pub fn allowed_times() -> Vec<String> {
    (9..=19).map(|hour| format!("{hour:02}:00")).collect()
}

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

/// Only Mondays and Saturdays are bookable.
pub fn is_allowed_date(date: &str) -> bool {
    match parse_date(date) {
        Some(day) => matches!(day.weekday(), Weekday::Mon | Weekday::Sat),
        None => false,
    }
}

/// Converts `HH:MM` (or a bare `HH`) to minutes since midnight.
pub fn minutes_since_midnight(time: &str) -> Option<u32> {
    let time = time.trim();
    if time.is_empty() {
        return None;
    }

    let mut parts = time.split(':');
    let hours = parts.next()?.trim().parse::<u32>().ok()?;
    let minutes = match parts.next().map(str::trim) {
        None | Some("") => 0,
        Some(value) => value.parse::<u32>().ok()?,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

pub fn is_allowed_minutes(minutes: u32) -> bool {
    (OPENING_MINUTES..=CLOSING_MINUTES).contains(&minutes)
}

/// Accepts any time inside the opening window, both ends included, not just
/// the hourly slots from [`allowed_times`].
pub fn is_allowed_time(time: &str) -> bool {
    minutes_since_midnight(time).is_some_and(is_allowed_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mondays_and_saturdays_only() {
        // 2024-06-03 is a Monday.
        let days = [
            ("2024-06-03", true),
            ("2024-06-04", false),
            ("2024-06-05", false),
            ("2024-06-06", false),
            ("2024-06-07", false),
            ("2024-06-08", true),
            ("2024-06-09", false),
        ];
        for (day, expected) in days {
            assert_eq!(is_allowed_date(day), expected, "{day}");
        }
    }

    #[test]
    fn empty_or_garbage_dates_are_rejected() {
        assert!(!is_allowed_date(""));
        assert!(!is_allowed_date("   "));
        assert!(!is_allowed_date("next monday"));
        assert!(!is_allowed_date("2024-02-30"));
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        assert!(is_allowed_time("09:00"));
        assert!(is_allowed_time("19:00"));
        assert!(is_allowed_time("13:45"));
        assert!(!is_allowed_time("08:59"));
        assert!(!is_allowed_time("19:01"));
        assert!(!is_allowed_time("20:00"));
    }

    #[test]
    fn minute_bounds_match_window() {
        for minutes in 0..24 * 60 {
            assert_eq!(is_allowed_minutes(minutes), (540..=1140).contains(&minutes));
        }
    }

    #[test]
    fn missing_minutes_default_to_zero() {
        assert_eq!(minutes_since_midnight("9"), Some(540));
        assert_eq!(minutes_since_midnight("10:"), Some(600));
        assert!(is_allowed_time("9"));
    }

    #[test]
    fn malformed_times_are_rejected() {
        assert!(!is_allowed_time(""));
        assert!(!is_allowed_time("noon"));
        assert!(!is_allowed_time("12:xx"));
        assert!(!is_allowed_time("25:00"));
    }

    #[test]
    fn picker_offers_eleven_hourly_slots() {
        let slots = allowed_times();
        assert_eq!(slots.len(), 11);
        assert_eq!(slots.first().map(String::as_str), Some("09:00"));
        assert_eq!(slots.last().map(String::as_str), Some("19:00"));
        assert!(slots.iter().all(|slot| is_allowed_time(slot)));
    }
}
