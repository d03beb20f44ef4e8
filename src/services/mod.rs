/// Business logic that spans the whole address book
mod birthday_service;

pub use birthday_service::{BirthdayService, UpcomingBirthday};
