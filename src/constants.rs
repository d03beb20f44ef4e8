/// Number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;

/// How many days ahead `birthdays` looks, inclusive
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Prompt printed before each command is read
pub const PROMPT: &str = "Enter a command: ";

/// Environment variable naming the IANA timezone used for "today"
pub const TIMEZONE_ENV: &str = "ASSISTANT_TIMEZONE";

/// Environment variable enabling the demo contacts at startup
pub const DEMO_CONTACTS_ENV: &str = "ASSISTANT_DEMO_CONTACTS";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "contact_assistant=warn";
