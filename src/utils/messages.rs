/// User-facing reply texts, kept in one place so the command table can refer to them

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const FAREWELL: &str = "Good bye!";
pub const HELLO_REPLY: &str = "How can I help you?";
pub const INVALID_COMMAND: &str = "Invalid command. Type 'help' to see available commands.";

pub const CONTACT_ADDED: &str = "Contact added.";
pub const PHONE_ADDED: &str = "Phone added to existing contact.";
pub const PHONE_CHANGED: &str = "Phone number changed.";
pub const BIRTHDAY_ADDED: &str = "Birthday added.";
pub const CONTACT_DELETED: &str = "Contact deleted.";

pub const NO_PHONES: &str = "No phone numbers found.";
pub const NO_BIRTHDAY: &str = "No birthday found.";
pub const NO_CONTACTS: &str = "No contacts saved.";

pub const CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const PHONE_NOT_FOUND: &str = "Phone number not found.";
pub const PHONE_FORMAT_ERROR: &str = "Phone number must be 10 digits long.";
pub const DATE_FORMAT_ERROR: &str = "Invalid date format. Use DD.MM.YYYY";
pub const GENERIC_INPUT_ERROR: &str = "Invalid input.";

pub const NAME_REQUIRED: &str = "Please provide a name.";
pub const NAME_AND_PHONE_REQUIRED: &str = "Please provide a name and a phone number.";
pub const NAME_AND_PHONES_REQUIRED: &str = "Please provide a name, the old and the new phone number.";
pub const NAME_AND_BIRTHDAY_REQUIRED: &str = "Please provide a name and a birthday.";

/// Build the reply listing a contact's phone numbers
pub fn build_phone_list(name: &str, phones: &[String]) -> String {
    if phones.is_empty() {
        return NO_PHONES.to_string();
    }
    let mut lines = vec![format!("Phone numbers for {}:", name)];
    lines.extend(phones.iter().cloned());
    lines.join("\n")
}

/// Build the reply showing a contact's birthday
pub fn build_birthday_reply(name: &str, birthday: Option<&str>) -> String {
    birthday
        .map(|date| format!("{} birthday: {}", name, date))
        .unwrap_or_else(|| NO_BIRTHDAY.to_string())
}

/// Build the empty-result reply for the upcoming birthdays listing
pub fn build_no_upcoming_birthdays(window_days: i64) -> String {
    format!("No upcoming birthdays in the next {} days.", window_days)
}

/// Build the help block listing every command
pub fn build_help() -> String {
    [
        "Available commands:",
        "  help - Show available commands.",
        "  hello - Greet the bot.",
        "  add <name> <phone> - Add a new contact or a phone to an existing one.",
        "  change <name> <old_phone> <new_phone> - Change the phone number of a contact.",
        "  phone <name> - Get the phone numbers of a contact.",
        "  add-birthday <name> <DD.MM.YYYY> - Add a birthday to a contact.",
        "  show-birthday <name> - Show the birthday of a contact.",
        "  birthdays - Show birthdays in the next 7 days.",
        "  delete <name> - Delete a contact.",
        "  all - Get all contacts.",
        "  close - Close the bot.",
        "  exit - Close the bot.",
    ]
    .join("\n")
}
