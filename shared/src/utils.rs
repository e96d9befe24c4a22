// Date/time helpers shared by the engine and the GUI.
// Every conversion here is UTC: a calendar date means midnight UTC of that day.
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, ParseError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

// Midnight UTC of `date`, in seconds since the epoch.
pub fn date_to_timestamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::default()).and_utc().timestamp()
}

// Renders a Unix timestamp as "YYYY-MM-DD HH:MM:SS".
// Values chrono cannot represent fall back to the raw number.
pub fn format_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}

pub fn parse_timestamp(s: &str) -> Result<i64, ParseError> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)?;
    Ok(naive.and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_to_timestamp_is_utc_midnight() {
        let date = parse_date("2022-01-01").unwrap();
        assert_eq!(date_to_timestamp(date), 1_640_995_200);
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("01/01/2022").is_err());
        assert!(parse_date("2022-13-01").is_err());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(1_640_995_200), "2022-01-01 00:00:00");
        assert_eq!(format_timestamp(1_640_996_100), "2022-01-01 00:15:00");
    }

    #[test]
    fn test_format_then_parse_timestamp() {
        let ts = 1_735_689_600; // 2025-01-01
        assert_eq!(parse_timestamp(&format_timestamp(ts)).unwrap(), ts);
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("2022-01-01").is_err());
    }
}
