use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;

/// Error types for timezone operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimezoneError {
    InvalidTimezone(String),
}

impl std::fmt::Display for TimezoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimezoneError::InvalidTimezone(tz) => write!(f, "Invalid timezone: {}", tz),
        }
    }
}

impl std::error::Error for TimezoneError {}

/// Parse a timezone string
pub fn parse_timezone(tz_str: &str) -> Result<Tz, TimezoneError> {
    tz_str
        .trim()
        .parse()
        .map_err(|_| TimezoneError::InvalidTimezone(tz_str.to_string()))
}

/// Today's calendar date in the given timezone, or the machine's local zone
pub fn today_in(timezone: Option<&Tz>) -> NaiveDate {
    match timezone {
        Some(tz) => Utc::now().with_timezone(tz).date_naive(),
        None => Local::now().date_naive(),
    }
}
