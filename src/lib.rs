//! Command-line address book: contacts with phone numbers and birthdays,
//! plus the list of birthdays to celebrate in the coming week.

pub mod commands;
pub mod constants;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;

pub use commands::{Command, CommandError, Reply, dispatch};
pub use models::{AddressBook, Birthday, BookError, Phone, Record};
pub use services::{BirthdayService, UpcomingBirthday};
pub use utils::validation::ValidationError;
