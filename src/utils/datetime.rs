/// Pure date utility functions for birthday arithmetic
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Check if a given year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// The birthday's month/day in `year`
///
/// A 29 February birthday falls on 28 February in non-leap years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 && !is_leap_year(year) {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// First occurrence of the birthday on or after `today`
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday forward to the following Monday
pub fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let offset = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(offset)).unwrap_or(date)
}

/// The date a birthday should be celebrated on, relative to `today`
pub fn congratulation_date(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    next_occurrence(birthday, today).map(shift_off_weekend)
}

/// Whole days from `from` to `to` (negative when `to` is earlier)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Format a date as DD.MM.YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Get the English weekday name
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2000)); // Divisible by 400
        assert!(is_leap_year(2024));

        assert!(!is_leap_year(1900)); // Divisible by 100, not by 400
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_occurrence_in_year() {
        assert_eq!(occurrence_in_year(date(1990, 3, 15), 2024), Some(date(2024, 3, 15)));
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2024), Some(date(2024, 2, 29)));
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2025), Some(date(2025, 2, 28)));
    }

    #[test]
    fn test_next_occurrence() {
        let today = date(2024, 11, 1);
        // Later this year
        assert_eq!(next_occurrence(date(1990, 11, 2), today), Some(date(2024, 11, 2)));
        // Today counts as this year's occurrence
        assert_eq!(next_occurrence(date(1990, 11, 1), today), Some(date(2024, 11, 1)));
        // Already passed, rolls over
        assert_eq!(next_occurrence(date(2000, 1, 1), today), Some(date(2025, 1, 1)));
    }

    #[test]
    fn test_shift_off_weekend() {
        assert_eq!(shift_off_weekend(date(2024, 11, 2)), date(2024, 11, 4)); // Saturday
        assert_eq!(shift_off_weekend(date(2024, 11, 3)), date(2024, 11, 4)); // Sunday
        assert_eq!(shift_off_weekend(date(2024, 11, 1)), date(2024, 11, 1)); // Friday
        assert_eq!(shift_off_weekend(date(2024, 11, 4)), date(2024, 11, 4)); // Monday
    }

    #[test]
    fn test_congratulation_date() {
        let today = date(2024, 11, 1);
        assert_eq!(congratulation_date(date(1985, 11, 2), today), Some(date(2024, 11, 4)));
        assert_eq!(congratulation_date(date(2000, 1, 1), today), Some(date(2025, 1, 1)));
        // 28.12.2024 is a Saturday, the shift crosses into the next year
        assert_eq!(
            congratulation_date(date(1999, 12, 28), date(2024, 12, 27)),
            Some(date(2024, 12, 30))
        );
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2024, 11, 1), date(2024, 11, 4)), 3);
        assert_eq!(days_between(date(2024, 11, 1), date(2024, 11, 1)), 0);
        assert_eq!(days_between(date(2024, 11, 4), date(2024, 11, 1)), -3);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2000, 1, 1)), "01.01.2000");
        assert_eq!(format_date(date(2024, 11, 4)), "04.11.2024");
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(date(2024, 11, 1)), "Friday");
        assert_eq!(weekday_name(date(2024, 11, 4)), "Monday");
    }
}
