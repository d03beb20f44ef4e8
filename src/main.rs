use std::io;

use chrono_tz::Tz;
use tracing::{error, info};

use contact_assistant::{
    AddressBook,
    constants::{DEMO_CONTACTS_ENV, LOG_DIRECTIVE, TIMEZONE_ENV},
    session::{self, demo_contacts},
    utils::timezone::{parse_timezone, today_in},
};

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    initialize_logging();

    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let timezone = config.timezone;
    let today = move || today_in(timezone.as_ref());

    let mut book = if config.demo_contacts {
        match demo_contacts(today()) {
            Ok(book) => {
                info!("Loaded {} demo contacts", book.len());
                book
            }
            Err(e) => {
                error!("Failed to build demo contacts: {}", e);
                AddressBook::new()
            }
        }
    } else {
        AddressBook::new()
    };

    let stdin = io::stdin();
    if let Err(e) = session::run(stdin.lock(), io::stdout(), &mut book, today) {
        error!("Console I/O failed: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    timezone: Option<Tz>,
    demo_contacts: bool,
}

/// Initialize the logging system on stderr so stdout stays the conversation
fn initialize_logging() {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match LOG_DIRECTIVE.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Box<dyn std::error::Error>> {
    // Optional: timezone that decides what "today" is
    let timezone = match std::env::var(TIMEZONE_ENV) {
        Ok(value) if !value.trim().is_empty() => Some(parse_timezone(&value)?),
        _ => None,
    };

    let demo_contacts = std::env::var(DEMO_CONTACTS_ENV)
        .map(|value| is_truthy(&value))
        .unwrap_or(false);

    match &timezone {
        Some(tz) => info!("Using timezone {}", tz),
        None => info!("Using the local timezone"),
    }

    Ok(Config {
        timezone,
        demo_contacts,
    })
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
