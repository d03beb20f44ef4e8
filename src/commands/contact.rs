use chrono::NaiveDate;
use tracing::info;

use super::CommandError;
use crate::models::{AddressBook, Phone, Record};
use crate::utils::message_formatter::format_contact_list;
use crate::utils::messages::{
    CONTACT_ADDED, CONTACT_DELETED, PHONE_ADDED, PHONE_CHANGED, build_phone_list,
};

/// `add <name> <phone>`: create the contact, or append the phone if it already exists
pub fn add_contact(args: &[&str], book: &mut AddressBook, _today: NaiveDate) -> Result<String, CommandError> {
    let (name, phone) = (args[0], args[1]);

    if let Ok(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        info!("Added phone to existing contact {}", name);
        return Ok(PHONE_ADDED.to_string());
    }

    // Validate everything before the record reaches the book
    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    info!("Created contact {}", name);
    Ok(CONTACT_ADDED.to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook, _today: NaiveDate) -> Result<String, CommandError> {
    let (name, old_phone, new_phone) = (args[0], args[1], args[2]);

    book.find_mut(name)?.edit_phone(old_phone, new_phone)?;
    info!("Changed phone of {}", name);
    Ok(PHONE_CHANGED.to_string())
}

/// `phone <name>`
pub fn show_phones(args: &[&str], book: &mut AddressBook, _today: NaiveDate) -> Result<String, CommandError> {
    let name = args[0];
    let record = book.find(name)?;
    let phones: Vec<String> = record.phones().iter().map(Phone::to_string).collect();
    Ok(build_phone_list(name, &phones))
}

/// `all`
pub fn show_all(_args: &[&str], book: &mut AddressBook, _today: NaiveDate) -> Result<String, CommandError> {
    Ok(format_contact_list(book))
}

/// `delete <name>`
pub fn delete_contact(args: &[&str], book: &mut AddressBook, _today: NaiveDate) -> Result<String, CommandError> {
    let removed = book.delete(args[0])?;
    info!("Deleted contact {}", removed.name());
    Ok(CONTACT_DELETED.to_string())
}
