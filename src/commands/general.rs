use chrono::NaiveDate;

use super::CommandError;
use crate::models::AddressBook;
use crate::utils::messages::{HELLO_REPLY, build_help};

/// Greet the user
pub fn hello(_args: &[&str], _book: &mut AddressBook, _today: NaiveDate) -> Result<String, CommandError> {
    Ok(HELLO_REPLY.to_string())
}

/// List the available commands
pub fn help(_args: &[&str], _book: &mut AddressBook, _today: NaiveDate) -> Result<String, CommandError> {
    Ok(build_help())
}
