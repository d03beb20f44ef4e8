/// Pure functions for rendering contacts and birthday listings
use crate::constants::UPCOMING_WINDOW_DAYS;
use crate::models::AddressBook;
use crate::services::UpcomingBirthday;
use crate::utils::datetime::{format_date, weekday_name};
use crate::utils::messages::{NO_CONTACTS, build_no_upcoming_birthdays};

/// Build a single upcoming birthday line
pub fn build_birthday_entry(upcoming: &UpcomingBirthday<'_>) -> String {
    format!(
        "{} has a birthday on {} ({})",
        upcoming.record.name(),
        format_date(upcoming.congratulation_date),
        weekday_name(upcoming.congratulation_date)
    )
}

/// Join upcoming birthday lines, or explain that there are none
pub fn format_upcoming_birthdays(upcoming: &[UpcomingBirthday<'_>]) -> String {
    if upcoming.is_empty() {
        return build_no_upcoming_birthdays(UPCOMING_WINDOW_DAYS);
    }
    upcoming
        .iter()
        .map(build_birthday_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per contact, in book order
pub fn format_contact_list(book: &AddressBook) -> String {
    if book.is_empty() {
        return NO_CONTACTS.to_string();
    }
    book.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
