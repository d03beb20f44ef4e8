use chrono::NaiveDate;

use crate::constants::PHONE_DIGITS;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    InvalidPhone(String),
    InvalidDateFormat(String),
    DateOutOfRange { day: u32, month: u32, year: i32 },
    FutureYear { year: i32, current_year: i32 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "Contact name cannot be empty"),
            ValidationError::InvalidPhone(value) => {
                write!(f, "Phone number must be {} digits long, got '{}'", PHONE_DIGITS, value)
            }
            ValidationError::InvalidDateFormat(value) => {
                write!(f, "Invalid date format. Use DD.MM.YYYY, got '{}'", value)
            }
            ValidationError::DateOutOfRange { day, month, year } => {
                write!(f, "{:02}.{:02}.{} is not a valid calendar date", day, month, year)
            }
            ValidationError::FutureYear { year, current_year } => {
                write!(f, "Birth year {} cannot be after {}", year, current_year)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate that a contact name has at least one non-whitespace character
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Validate that a phone number is exactly ten ASCII digits
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.len() != PHONE_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone(value.to_string()));
    }
    Ok(())
}

/// Parse an all-digit component of at most `max_len` characters
fn parse_component(part: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if part.len() < min_len || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<u32>().ok()
}

/// Parse a `DD.MM.YYYY` birthday, rejecting years after `max_year`
///
/// Day and month accept one or two digits, the year exactly four.
pub fn parse_birthday(value: &str, max_year: i32) -> Result<NaiveDate, ValidationError> {
    let format_error = || ValidationError::InvalidDateFormat(value.to_string());

    let parts: Vec<&str> = value.trim().split('.').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(format_error());
    };

    let day = parse_component(day, 1, 2).ok_or_else(format_error)?;
    let month = parse_component(month, 1, 2).ok_or_else(format_error)?;
    let year = parse_component(year, 4, 4).ok_or_else(format_error)? as i32;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ValidationError::DateOutOfRange { day, month, year })?;

    if year > max_year {
        return Err(ValidationError::FutureYear {
            year,
            current_year: max_year,
        });
    }

    Ok(date)
}
