use chrono::NaiveDate;
use tracing::info;

use super::CommandError;
use crate::models::AddressBook;
use crate::utils::message_formatter::format_upcoming_birthdays;
use crate::utils::messages::{BIRTHDAY_ADDED, build_birthday_reply};

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook, today: NaiveDate) -> Result<String, CommandError> {
    let (name, birthday) = (args[0], args[1]);

    book.find_mut(name)?.add_birthday(birthday, today)?;
    info!("Set birthday of {}", name);
    Ok(BIRTHDAY_ADDED.to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &mut AddressBook, _today: NaiveDate) -> Result<String, CommandError> {
    let name = args[0];
    let birthday = book.find(name)?.birthday().map(|b| b.to_string());
    Ok(build_birthday_reply(name, birthday.as_deref()))
}

/// `birthdays`: whom to congratulate during the coming week
pub fn upcoming_birthdays(_args: &[&str], book: &mut AddressBook, today: NaiveDate) -> Result<String, CommandError> {
    let upcoming = book.upcoming_congratulations(today);
    info!("{} upcoming birthdays as of {}", upcoming.len(), today);
    Ok(format_upcoming_birthdays(&upcoming))
}
