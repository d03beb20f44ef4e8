// Command modules
mod birthday;
mod contact;
mod general;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::models::{AddressBook, BookError};
use crate::utils::messages::{
    CONTACT_NOT_FOUND, DATE_FORMAT_ERROR, FAREWELL, GENERIC_INPUT_ERROR, INVALID_COMMAND,
    NAME_AND_BIRTHDAY_REQUIRED, NAME_AND_PHONE_REQUIRED, NAME_AND_PHONES_REQUIRED, NAME_REQUIRED,
    PHONE_FORMAT_ERROR, PHONE_NOT_FOUND,
};
use crate::utils::string_utils::parse_input;
use crate::utils::validation::ValidationError;

/// Every command the assistant understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Hello,
    Add,
    Change,
    Phone,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    All,
    Delete,
    Exit,
}

/// How many positional arguments a command takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

/// Failures a command handler can report back to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Arguments { expected: Arity, got: usize },
    Validation(ValidationError),
    ContactNotFound(String),
    PhoneNotFound(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Arguments { expected, got } => {
                write!(f, "Expected {:?} arguments, got {}", expected, got)
            }
            CommandError::Validation(e) => write!(f, "{}", e),
            CommandError::ContactNotFound(name) => write!(f, "Contact not found: {}", name),
            CommandError::PhoneNotFound(phone) => write!(f, "Phone number not found: {}", phone),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ValidationError> for CommandError {
    fn from(e: ValidationError) -> Self {
        CommandError::Validation(e)
    }
}

impl From<BookError> for CommandError {
    fn from(e: BookError) -> Self {
        match e {
            BookError::ContactNotFound(name) => CommandError::ContactNotFound(name),
            BookError::PhoneNotFound(phone) => CommandError::PhoneNotFound(phone),
            BookError::Validation(e) => CommandError::Validation(e),
        }
    }
}

/// The message shown for each kind of failure of one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMessages {
    pub arguments: &'static str,
    pub validation: &'static str,
    pub contact_not_found: &'static str,
    pub phone_not_found: &'static str,
}

impl ErrorMessages {
    pub fn message_for(&self, error: &CommandError) -> &'static str {
        match error {
            CommandError::Arguments { .. } => self.arguments,
            CommandError::Validation(_) => self.validation,
            CommandError::ContactNotFound(_) => self.contact_not_found,
            CommandError::PhoneNotFound(_) => self.phone_not_found,
        }
    }
}

const DEFAULT_MESSAGES: ErrorMessages = ErrorMessages {
    arguments: GENERIC_INPUT_ERROR,
    validation: GENERIC_INPUT_ERROR,
    contact_not_found: CONTACT_NOT_FOUND,
    phone_not_found: PHONE_NOT_FOUND,
};

const NAME_ONLY_MESSAGES: ErrorMessages = ErrorMessages {
    arguments: NAME_REQUIRED,
    ..DEFAULT_MESSAGES
};

const ADD_MESSAGES: ErrorMessages = ErrorMessages {
    arguments: NAME_AND_PHONE_REQUIRED,
    validation: PHONE_FORMAT_ERROR,
    ..DEFAULT_MESSAGES
};

const CHANGE_MESSAGES: ErrorMessages = ErrorMessages {
    arguments: NAME_AND_PHONES_REQUIRED,
    validation: PHONE_FORMAT_ERROR,
    ..DEFAULT_MESSAGES
};

const ADD_BIRTHDAY_MESSAGES: ErrorMessages = ErrorMessages {
    arguments: NAME_AND_BIRTHDAY_REQUIRED,
    validation: DATE_FORMAT_ERROR,
    ..DEFAULT_MESSAGES
};

/// Signature shared by every command handler
pub type Handler = fn(&[&str], &mut AddressBook, NaiveDate) -> Result<String, CommandError>;

impl Command {
    /// Look up a command by its (already lowercased) keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let command = match keyword {
            "help" => Command::Help,
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "all" => Command::All,
            "delete" => Command::Delete,
            "close" | "exit" => Command::Exit,
            _ => return None,
        };
        Some(command)
    }

    pub fn arity(&self) -> Arity {
        match self {
            Command::Add | Command::AddBirthday => Arity::Exactly(2),
            Command::Change => Arity::Exactly(3),
            Command::Phone | Command::ShowBirthday | Command::Delete => Arity::AtLeast(1),
            Command::Help | Command::Hello | Command::Birthdays | Command::All | Command::Exit => {
                Arity::AtLeast(0)
            }
        }
    }

    /// Error-to-message row for this command
    pub fn error_messages(&self) -> &'static ErrorMessages {
        match self {
            Command::Add => &ADD_MESSAGES,
            Command::Change => &CHANGE_MESSAGES,
            Command::AddBirthday => &ADD_BIRTHDAY_MESSAGES,
            Command::Phone | Command::ShowBirthday | Command::Delete => &NAME_ONLY_MESSAGES,
            Command::Help | Command::Hello | Command::Birthdays | Command::All | Command::Exit => {
                &DEFAULT_MESSAGES
            }
        }
    }

    fn handler(&self) -> Option<Handler> {
        let handler: Handler = match self {
            Command::Help => general::help,
            Command::Hello => general::hello,
            Command::Add => contact::add_contact,
            Command::Change => contact::change_contact,
            Command::Phone => contact::show_phones,
            Command::All => contact::show_all,
            Command::Delete => contact::delete_contact,
            Command::AddBirthday => birthday::add_birthday,
            Command::ShowBirthday => birthday::show_birthday,
            Command::Birthdays => birthday::upcoming_birthdays,
            Command::Exit => return None,
        };
        Some(handler)
    }
}

/// What the command loop should do after a line has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Exit(String),
}

/// Run a handler after checking its arity, turning any failure into the command's message
fn run_command(
    command: Command,
    args: &[&str],
    book: &mut AddressBook,
    today: NaiveDate,
) -> Result<String, CommandError> {
    let arity = command.arity();
    if !arity.accepts(args.len()) {
        return Err(CommandError::Arguments {
            expected: arity,
            got: args.len(),
        });
    }
    match command.handler() {
        Some(handler) => handler(args, book, today),
        None => Ok(FAREWELL.to_string()),
    }
}

/// Parse one input line, execute it against the book and produce the reply
pub fn dispatch(line: &str, book: &mut AddressBook, today: NaiveDate) -> Reply {
    let Some((keyword, args)) = parse_input(line) else {
        return Reply::Continue(INVALID_COMMAND.to_string());
    };
    let Some(command) = Command::from_keyword(&keyword) else {
        debug!("Unknown command: {}", keyword);
        return Reply::Continue(INVALID_COMMAND.to_string());
    };

    if command == Command::Exit {
        info!("Exit requested");
        return Reply::Exit(FAREWELL.to_string());
    }

    match run_command(command, &args, book, today) {
        Ok(text) => Reply::Continue(text),
        Err(e) => {
            debug!("Command {:?} failed: {}", command, e);
            Reply::Continue(command.error_messages().message_for(&e).to_string())
        }
    }
}
