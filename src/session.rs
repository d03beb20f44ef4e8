/// The interactive read-dispatch-print loop
use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::commands::{Reply, dispatch};
use crate::constants::PROMPT;
use crate::models::{AddressBook, Record};
use crate::utils::messages::{FAREWELL, GREETING};
use crate::utils::validation::ValidationError;

/// Build the sample book offered at startup when demo contacts are enabled
pub fn demo_contacts(today: NaiveDate) -> Result<AddressBook, ValidationError> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    book.add_record(john);

    let mut alice = Record::new("Alice")?;
    alice.add_phone("0987654321")?;
    alice.add_birthday("01.01.2000", today)?;
    book.add_record(alice);

    let mut bob = Record::new("Bob")?;
    bob.add_phone("1112223334")?;
    bob.add_birthday("01.11.2024", today)?;
    book.add_record(bob);

    Ok(book)
}

/// Read commands until `close`/`exit` or end of input
///
/// `today` is consulted once per command so a session left open past
/// midnight sees the new date.
pub fn run<R, W, F>(mut input: R, mut output: W, book: &mut AddressBook, mut today: F) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut() -> NaiveDate,
{
    writeln!(output, "{}", GREETING)?;
    info!("Session started with {} contacts", book.len());

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            break;
        }

        match dispatch(&line, book, today()) {
            Reply::Continue(text) => writeln!(output, "{}", text)?,
            Reply::Exit(text) => {
                writeln!(output, "{}", text)?;
                break;
            }
        }
    }

    info!("Session finished with {} contacts", book.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()
    }

    fn run_script(script: &str, book: &mut AddressBook) -> String {
        let mut output = Vec::new();
        run(Cursor::new(script), &mut output, book, today).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_runs_until_exit() {
        let mut book = AddressBook::new();
        let output = run_script(
            "hello\nadd John 1234567890\nphone John\nexit\nadd Ignored 1234567890\n",
            &mut book,
        );

        assert_eq!(
            output,
            "Welcome to the assistant bot!\n\
             Enter a command: How can I help you?\n\
             Enter a command: Contact added.\n\
             Enter a command: Phone numbers for John:\n1234567890\n\
             Enter a command: Good bye!\n"
        );
        assert_eq!(book.len(), 1);
        assert!(!book.contains("Ignored"));
    }

    #[test]
    fn test_session_survives_bad_input() {
        let mut book = AddressBook::new();
        let output = run_script(
            "add John\nadd John 12\nnonsense\n\nadd John 1234567890\nclose\n",
            &mut book,
        );

        assert!(output.contains("Please provide a name and a phone number."));
        assert!(output.contains("Phone number must be 10 digits long."));
        assert!(output.contains("Invalid command. Type 'help' to see available commands."));
        assert!(output.ends_with("Contact added.\nEnter a command: Good bye!\n"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_session_ends_on_eof() {
        let mut book = AddressBook::new();
        let output = run_script("add John 1234567890\n", &mut book);
        assert!(output.ends_with("Enter a command: \nGood bye!\n"));
    }

    #[test]
    fn test_demo_contacts() {
        let book = demo_contacts(today()).unwrap();
        let names: Vec<&str> = book.iter().map(Record::name).collect();
        assert_eq!(names, vec!["John", "Alice", "Bob"]);

        let upcoming = book.get_upcoming_birthdays(today());
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name(), "Bob");
    }
}
