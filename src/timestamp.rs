use chrono::{NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

/// Layouts tried in order; the first that parses the whole string wins.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

// H:MM or HH:MM with optional :SS, not glued to a preceding digit or colon
static TIME_OF_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^\d:])(\d{1,2}):[0-5]\d(?::[0-5]\d)?").expect("valid time regex")
});

/// Hour of day (0-23) for a log timestamp, or `None` if it can't be read.
pub fn extract_hour(timestamp: &str) -> Option<u32> {
    let timestamp = timestamp.trim();

    if let Some(parsed) = TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(timestamp, format).ok())
    {
        return Some(parsed.hour());
    }

    let captures = TIME_OF_DAY.captures(timestamp)?;
    let hour: u32 = captures[1].parse().ok()?;
    (hour <= 23).then_some(hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_date_with_seconds() {
        assert_eq!(extract_hour("01/27/2014 03:26:04"), Some(3));
    }

    #[test]
    fn us_date_without_seconds() {
        assert_eq!(extract_hour("01/27/2014 23:59"), Some(23));
    }

    #[test]
    fn iso_date_with_and_without_seconds() {
        assert_eq!(extract_hour("2014-01-27 15:05"), Some(15));
        assert_eq!(extract_hour("2014-01-27 00:05:59"), Some(0));
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(extract_hour("garbage"), None);
        assert_eq!(extract_hour(""), None);
    }

    #[test]
    fn falls_back_to_time_pattern() {
        assert_eq!(extract_hour("3:26:04 leftover text"), Some(3));
        assert_eq!(extract_hour("Mon Jan 27 14:26 2014"), Some(14));
    }

    #[test]
    fn time_attached_to_letters() {
        assert_eq!(extract_hour("2014-01-27T10:00:00"), Some(10));
        assert_eq!(extract_hour("10:30am"), Some(10));
        assert_eq!(extract_hour("at_10:00"), Some(10));
        assert_eq!(extract_hour("Mon 3:26pm"), Some(3));
    }

    #[test]
    fn invalid_calendar_date_still_yields_hour() {
        assert_eq!(extract_hour("13/45/2014 10:00:00"), Some(10));
    }

    #[test]
    fn out_of_range_hour_is_rejected() {
        assert_eq!(extract_hour("at 24:00:00"), None);
        assert_eq!(extract_hour("99:10"), None);
    }

    #[test]
    fn digits_run_into_hour_are_not_a_time() {
        assert_eq!(extract_hour("123:45"), None);
    }
}
