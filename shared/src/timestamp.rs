//! Submission timestamp parsing
//!
//! Form submissions carry timestamps in the fixed `DD/MM/YYYY HH:mm:ss`
//! spreadsheet convention. Day/month order is a locale constant of the
//! source sheet and is never auto-detected.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a `DD/MM/YYYY HH:mm:ss` timestamp. The time part is optional and
/// defaults to midnight. Returns `None` for malformed input instead of
/// failing, so one bad row never aborts a batch.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.split_once(' ') {
        Some((date_part, time_part)) => {
            let date = NaiveDate::parse_from_str(date_part, "%d/%m/%Y").ok()?;
            let time = NaiveTime::parse_from_str(time_part.trim(), "%H:%M:%S").ok()?;
            Some(date.and_time(time))
        }
        None => {
            let date = NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok()?;
            date.and_hms_opt(0, 0, 0)
        }
    }
}

/// Calendar day a parsed instant belongs to
pub fn day_key(at: NaiveDateTime) -> NaiveDate {
    at.date()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_timestamp() {
        let at = parse_timestamp("01/06/2024 08:30:15").unwrap();
        assert_eq!(at.date(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(at.time(), NaiveTime::from_hms_opt(8, 30, 15).unwrap());
    }

    #[test]
    fn test_parse_date_only_defaults_to_midnight() {
        let at = parse_timestamp("15/02/2024").unwrap();
        assert_eq!(at.time(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_day_before_month() {
        // 31/12 is a valid day/month pair, 12/31 is not
        assert!(parse_timestamp("31/12/2025 23:59:59").is_some());
        assert!(parse_timestamp("12/31/2025 23:59:59").is_none());
    }

    #[test]
    fn test_malformed_input_is_none() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("32/01/2024 08:00:00").is_none());
        assert!(parse_timestamp("01/13/2024 08:00:00").is_none());
        assert!(parse_timestamp("01/06/2024 25:00:00").is_none());
        assert!(parse_timestamp("01/06").is_none());
        assert!(parse_timestamp("aa/bb/cccc 08:00:00").is_none());
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(parse_timestamp("01/06/2024 08:00:00 extra").is_none());
    }

    #[test]
    fn test_day_key() {
        let at = parse_timestamp("02/06/2024 09:00:00").unwrap();
        assert_eq!(day_key(at), NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    }
}
